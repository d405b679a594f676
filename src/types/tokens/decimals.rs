// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use serde::{Deserialize, Serialize};

/// Token decimal precision
///
/// The number of decimal places between a raw on-chain value and its
/// human-readable form. Every value in the activity feed is normalized with
/// the native unit's exponent, [`TokenDecimals::NATIVE`].
///
/// # Examples
///
/// ```
/// use activityscan::TokenDecimals;
///
/// assert_eq!(TokenDecimals::NATIVE.as_u8(), 18);
/// assert_eq!(TokenDecimals::new(6).to_string(), "6 decimals");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Fixed exponent of the native unit (18)
    pub const NATIVE: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::NATIVE
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::ops::Add;
use std::str::FromStr;

use super::decimals::TokenDecimals;
use crate::errors::ClassificationError;

/// Raw token amount (not normalized for decimals)
///
/// The value exactly as the explorer reports it, in the smallest unit. Use
/// [`normalize`](Self::normalize) to obtain the human-readable decimal.
///
/// # Examples
///
/// ```
/// use activityscan::{TokenAmount, TokenDecimals};
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
///
/// let raw: TokenAmount = "1500000000000000000".parse().unwrap();
/// let normalized = raw.normalize(TokenDecimals::NATIVE).unwrap();
/// assert_eq!(normalized, BigDecimal::from_str("1.5").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether the raw amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Normalize by token decimals: amount / 10^decimals
    ///
    /// The division is exact: the raw integer becomes the unscaled digits of a
    /// [`BigDecimal`] with scale `decimals`, so no precision is lost. The
    /// result is normalized (trailing zeros stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationError::ConversionFailed`] if the digits cannot be
    /// represented as a `BigDecimal`.
    pub fn normalize(&self, decimals: TokenDecimals) -> Result<BigDecimal, ClassificationError> {
        let scaled = format!("{}e-{}", self.0, decimals.as_u8());
        BigDecimal::from_str(&scaled)
            .map(|value| value.normalized())
            .map_err(|_| ClassificationError::bigdecimal_conversion_failed(self.0))
    }
}

impl FromStr for TokenAmount {
    type Err = alloy_primitives::ruint::ParseError;

    /// Parse a decimal (or `0x`-prefixed hex) string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_str(s.trim()).map(Self)
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for TokenAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for activity feed assembly
//!
//! The feed needs a handful of static values that are not resolved from the
//! ledger: the faucet and verification-rewards accounts and the decimal
//! exponent of the native unit.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use activityscan::FeedConfig;
//!
//! let config = FeedConfig::default();
//! assert_eq!(config.native_decimals.as_u8(), 18);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use activityscan::FeedConfigBuilder;
//! use alloy_primitives::address;
//!
//! let config = FeedConfigBuilder::new()
//!     .faucet_address(address!("1111111111111111111111111111111111111111"))
//!     .build();
//! ```

use alloy_primitives::Address;

use crate::errors::ConfigError;
use crate::types::tokens::TokenDecimals;

pub mod constants;

use constants::well_known::{FAUCET_ADDRESS, VERIFICATION_REWARDS_ADDRESS};

/// Environment variable overriding the faucet address
pub const FAUCET_ADDRESS_ENV: &str = "ACTIVITYSCAN_FAUCET_ADDRESS";

/// Environment variable overriding the verification-rewards address
pub const VERIFICATION_REWARDS_ADDRESS_ENV: &str = "ACTIVITYSCAN_VERIFICATION_REWARDS_ADDRESS";

/// Static configuration for feed assembly
///
/// Use [`FeedConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Account whose incoming transfers are faucet grants
    /// Default: [`FAUCET_ADDRESS`]
    pub faucet_address: Address,

    /// Account whose incoming transfers are verification rewards
    /// Default: [`VERIFICATION_REWARDS_ADDRESS`]
    pub verification_rewards_address: Address,

    /// Decimal exponent applied to every raw value
    /// Default: 18
    pub native_decimals: TokenDecimals,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            faucet_address: FAUCET_ADDRESS,
            verification_rewards_address: VERIFICATION_REWARDS_ADDRESS,
            native_decimals: TokenDecimals::NATIVE,
        }
    }
}

impl FeedConfig {
    /// Load defaults, then apply address overrides from the environment
    ///
    /// Reads [`FAUCET_ADDRESS_ENV`] and [`VERIFICATION_REWARDS_ADDRESS_ENV`].
    /// Unset variables keep their defaults. Call `dotenvy::dotenv()` first if
    /// the overrides live in a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(faucet) = address_override(FAUCET_ADDRESS_ENV)? {
            config.faucet_address = faucet;
        }
        if let Some(rewards) = address_override(VERIFICATION_REWARDS_ADDRESS_ENV)? {
            config.verification_rewards_address = rewards;
        }

        Ok(config)
    }
}

fn address_override(variable: &'static str) -> Result<Option<Address>, ConfigError> {
    match std::env::var(variable) {
        Ok(value) => value
            .trim()
            .parse::<Address>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidAddress {
                variable,
                details: e.to_string(),
            }),
        Err(_) => Ok(None),
    }
}

/// Builder for [`FeedConfig`]
///
/// # Example
///
/// ```rust
/// use activityscan::{FeedConfigBuilder, TokenDecimals};
/// use alloy_primitives::address;
///
/// let config = FeedConfigBuilder::new()
///     .verification_rewards_address(address!("2222222222222222222222222222222222222222"))
///     .native_decimals(TokenDecimals::NATIVE)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct FeedConfigBuilder {
    config: FeedConfig,
}

impl FeedConfigBuilder {
    /// Create a new builder starting from [`FeedConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the faucet address
    pub fn faucet_address(mut self, address: Address) -> Self {
        self.config.faucet_address = address;
        self
    }

    /// Set the verification-rewards address
    pub fn verification_rewards_address(mut self, address: Address) -> Self {
        self.config.verification_rewards_address = address;
        self
    }

    /// Set the decimal exponent used for value normalization
    pub fn native_decimals(mut self, decimals: TokenDecimals) -> Self {
        self.config.native_decimals = decimals;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> FeedConfig {
        self.config
    }
}

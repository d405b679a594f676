// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for feed configuration.

/// Errors raised while loading a [`FeedConfig`](crate::FeedConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment override is not a valid address.
    #[error("Invalid address in {variable}: {details}")]
    InvalidAddress {
        /// Environment variable holding the value
        variable: &'static str,
        /// Parse failure details
        details: String,
    },
}

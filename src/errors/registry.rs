// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the address registry.

use alloy_primitives::Address;

/// Errors raised while populating or reading the [`AddressRegistry`](crate::AddressRegistry).
///
/// `NotReady` and `UnknownTokenAddress` are fatal to the current feed request.
/// Neither is ever defaulted: an unknown token contract means the transfer rows
/// and the registry describe different networks.
///
/// # Examples
///
/// ```rust
/// use activityscan::RegistryError;
/// use alloy_primitives::address;
///
/// let error = RegistryError::UnknownTokenAddress {
///     address: address!("765de816845861e75a25fca122bb6898b8b1282a"),
/// };
/// assert!(error.to_string().starts_with("Missing token symbol mapping"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A lookup was attempted before the registry was populated.
    #[error("Address registry has not been populated")]
    NotReady,

    /// A transfer references a token contract the registry does not know.
    #[error("Missing token symbol mapping for contract {address}; registry may be stale or on the wrong network")]
    UnknownTokenAddress {
        /// Contract address with no symbol mapping
        address: Address,
    },

    /// The resolution response lacked a required field.
    #[error("Registry resolution is missing field: {field}")]
    MissingField {
        /// Name of the absent field
        field: &'static str,
    },

    /// The resolution response contained a value that is not an address.
    #[error("Registry resolution contains an invalid address {value:?}: {details}")]
    InvalidAddress {
        /// The offending value
        value: String,
        /// Parse failure details
        details: String,
    },

    /// The backing ledger client failed to resolve the registry.
    #[error("Registry resolution failed")]
    ResolutionFailed {
        /// The underlying client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RegistryError {
    /// Create a `MissingField` error.
    pub fn missing_field(field: &'static str) -> Self {
        RegistryError::MissingField { field }
    }

    /// Create an `InvalidAddress` error.
    pub fn invalid_address(value: impl Into<String>, details: impl std::fmt::Display) -> Self {
        RegistryError::InvalidAddress {
            value: value.into(),
            details: details.to_string(),
        }
    }

    /// Wrap a resolver client failure.
    pub fn resolution_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RegistryError::ResolutionFailed {
            source: Box::new(source),
        }
    }
}

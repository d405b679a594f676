// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer group classification.

use alloy_primitives::{Address, TxHash};

use super::RegistryError;

/// Errors that can occur while turning a transfer group into a feed event.
///
/// Group sizes outside `1..=3` are not errors; those groups are dropped
/// without producing an event.
///
/// # Examples
///
/// ```rust,ignore
/// use activityscan::{ClassificationError, EventClassifier};
///
/// match classifier.classify(&group) {
///     Ok(Some(classification)) => println!("{classification:?}"),
///     Ok(None) => println!("group dropped"),
///     Err(ClassificationError::Unclassifiable { hash, .. }) => {
///         eprintln!("wrong account data for {hash}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    /// The viewing account is neither sender nor receiver of the transfer.
    ///
    /// This means the fetch returned rows for a different account, or the rows
    /// are malformed.
    #[error("Transfer {hash} does not involve {viewer} (from {from}, to {to})")]
    Unclassifiable {
        /// Transaction hash of the offending row
        hash: TxHash,
        /// The viewing account
        viewer: Address,
        /// Sender recorded in the row
        from: Address,
        /// Receiver recorded in the row
        to: Address,
    },

    /// A registry lookup failed during classification.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A raw value could not be normalized.
    #[error("Conversion failed: {details}")]
    ConversionFailed {
        /// Details about the conversion failure
        details: String,
    },
}

impl ClassificationError {
    /// Create a `ConversionFailed` error with details.
    pub fn conversion_failed(details: impl Into<String>) -> Self {
        ClassificationError::ConversionFailed {
            details: details.into(),
        }
    }

    /// Helper to create a BigDecimal conversion error.
    pub fn bigdecimal_conversion_failed(value: impl std::fmt::Display) -> Self {
        Self::conversion_failed(format!("Failed to convert {} to BigDecimal", value))
    }
}

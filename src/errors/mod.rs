// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the activityscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Concern-specific errors** for fine-grained handling ([`FetchError`],
//!   [`RegistryError`], [`ClassificationError`], [`CommentDecodeError`],
//!   [`ConfigError`])
//! - **Unified error type** ([`ActivityError`]) for callers that only need to
//!   propagate failures
//!
//! # Taxonomy
//!
//! | Condition                         | Error                                        |
//! |-----------------------------------|----------------------------------------------|
//! | Lookup before population          | [`RegistryError::NotReady`]                  |
//! | Unmapped token contract           | [`RegistryError::UnknownTokenAddress`]       |
//! | Viewer not party to a transfer    | [`ClassificationError::Unclassifiable`]      |
//! | Group size other than 1, 2 or 3   | none: the group is dropped                   |
//! | Undecodable comment               | none: the comment is empty                   |
//!
//! # Example
//!
//! ```rust,ignore
//! use activityscan::{ActivityError, ActivityFeed, TransferQuery};
//!
//! async fn load(feed: &ActivityFeed<Source, Resolver>) -> Result<(), ActivityError> {
//!     let query = TransferQuery::new(viewer);
//!     let events = feed.feed_events(&query).await?;
//!     println!("{} events", events.len());
//!     Ok(())
//! }
//! ```

mod classification;
mod comment;
mod config;
mod fetch;
mod registry;

pub use classification::ClassificationError;
pub use comment::CommentDecodeError;
pub use config::ConfigError;
pub use fetch::FetchError;
pub use registry::RegistryError;

/// Unified error type for all activityscan operations.
///
/// All concern-specific error types convert into `ActivityError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum ActivityError {
    /// Error from the transfer fetch collaborator.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error from the address registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from group classification.
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Error from configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_converts_to_unified() {
        fn lookup() -> Result<(), ActivityError> {
            Err(RegistryError::NotReady)?
        }

        let error = lookup().unwrap_err();
        assert!(matches!(
            error,
            ActivityError::Registry(RegistryError::NotReady)
        ));
        assert_eq!(
            error.to_string(),
            "Registry error: Address registry has not been populated"
        );
    }

    #[test]
    fn test_classification_wraps_registry_error() {
        let error: ClassificationError = RegistryError::missing_field("escrowAddress").into();
        assert_eq!(
            error.to_string(),
            "Registry error: Registry resolution is missing field: escrowAddress"
        );
    }
}

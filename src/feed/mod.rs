// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Activity feed assembly
//!
//! [`ActivityFeed`] drives one feed request end to end:
//!
//! ```text
//! fetch rows ─▶ group by hash ─▶ ensure registry ─▶ classify ─▶ sort (─▶ filter)
//! ```
//!
//! The classification steps are also available as pure batch functions
//! ([`assemble_feed_events`], [`assemble_reward_events`],
//! [`assemble_token_transactions`]) for callers that already hold the rows.
//!
//! # Example
//!
//! ```rust,no_run
//! use activityscan::{
//!     ActivityFeed, FeedConfig, JsonFileTransferSource, StaticRegistryResolver, TransferQuery,
//! };
//! use alloy_primitives::address;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = JsonFileTransferSource::new("transfers.json");
//! let resolver = StaticRegistryResolver::from_file("registry.json").await?;
//! let feed = ActivityFeed::new(source, resolver, FeedConfig::default());
//!
//! let query = TransferQuery::new(address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));
//! for event in feed.feed_events(&query).await? {
//!     println!("{} {} {:?}", event.timestamp, event.event_type, event.payload);
//! }
//! # Ok(())
//! # }
//! ```

use tracing::Instrument;

use crate::classify::{CommentDecoder, EventClassifier, TransferCommentDecoder};
use crate::config::FeedConfig;
use crate::errors::ActivityError;
use crate::registry::{AddressRegistry, RegistryResolver};
use crate::tracing::spans;
use crate::transfers::{TransferQuery, TransferSource};
use crate::types::events::{FeedEvent, TokenTransaction};

mod assemble;

pub use assemble::{assemble_feed_events, assemble_reward_events, assemble_token_transactions};

/// Activity feed for accounts served by one transfer source
///
/// Feed operations take `&self` and may run concurrently; the address
/// registry is populated once, by whichever request gets there first.
pub struct ActivityFeed<S, R, C = TransferCommentDecoder> {
    source: S,
    registry: AddressRegistry<R>,
    decoder: C,
    config: FeedConfig,
}

impl<S, R> ActivityFeed<S, R>
where
    S: TransferSource,
    R: RegistryResolver,
{
    /// Create a feed with the default comment decoder
    pub fn new(source: S, resolver: R, config: FeedConfig) -> Self {
        Self::with_registry(source, AddressRegistry::new(resolver), config)
    }

    /// Create a feed over an existing registry
    pub fn with_registry(source: S, registry: AddressRegistry<R>, config: FeedConfig) -> Self {
        Self {
            source,
            registry,
            decoder: TransferCommentDecoder,
            config,
        }
    }
}

impl<S, R, C> ActivityFeed<S, R, C>
where
    S: TransferSource,
    R: RegistryResolver,
    C: CommentDecoder,
{
    /// Replace the comment decoder
    pub fn with_comment_decoder<D: CommentDecoder>(self, decoder: D) -> ActivityFeed<S, R, D> {
        ActivityFeed {
            source: self.source,
            registry: self.registry,
            decoder,
            config: self.config,
        }
    }

    /// The address registry backing this feed
    pub fn registry(&self) -> &AddressRegistry<R> {
        &self.registry
    }

    /// Static configuration in use
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// General activity feed for `query.address`, newest first
    ///
    /// # Errors
    ///
    /// Fetch failures, registry failures, and unclassifiable or unmapped
    /// transfers abort the request.
    pub async fn feed_events(&self, query: &TransferQuery) -> Result<Vec<FeedEvent>, ActivityError> {
        async {
            let rows = self.source.fetch_token_transfers(query).await?;
            let addresses = self.registry.ensure_populated().await?;
            let classifier =
                EventClassifier::new(query.address, addresses, &self.config, &self.decoder);
            Ok::<_, ActivityError>(assemble_feed_events(rows, &classifier)?)
        }
        .instrument(spans::assemble_feed("feed", query.address))
        .await
    }

    /// Verification-rewards payouts to `query.address`, newest first
    pub async fn reward_events(
        &self,
        query: &TransferQuery,
    ) -> Result<Vec<FeedEvent>, ActivityError> {
        async {
            let rows = self.source.fetch_token_transfers(query).await?;
            let addresses = self.registry.ensure_populated().await?;
            let classifier =
                EventClassifier::new(query.address, addresses, &self.config, &self.decoder);
            Ok::<_, ActivityError>(assemble_reward_events(rows, &classifier)?)
        }
        .instrument(spans::assemble_feed("rewards", query.address))
        .await
    }

    /// Activity of `query.address` denominated in `token`, newest first
    ///
    /// Amounts are signed from the viewer's point of view.
    pub async fn token_transactions(
        &self,
        query: &TransferQuery,
        token: &str,
    ) -> Result<Vec<TokenTransaction>, ActivityError> {
        async {
            let rows = self.source.fetch_token_transfers(query).await?;
            let addresses = self.registry.ensure_populated().await?;
            let classifier =
                EventClassifier::new(query.address, addresses, &self.config, &self.decoder);
            Ok::<_, ActivityError>(assemble_token_transactions(rows, &classifier, token)?)
        }
        .instrument(spans::assemble_feed("token", query.address))
        .await
    }
}

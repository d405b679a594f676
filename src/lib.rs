// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # activityscan
//!
//! Account activity feeds reconstructed from block-explorer token transfer rows.
//!
//! The explorer only reports flat per-transfer rows. This crate infers the user
//! actions behind them:
//!
//! - **Exchanges**: two same-hash rows forming one swap
//! - **Transfers**: sent, received, faucet grants, verification fees and
//!   rewards, escrow movements
//! - **Fee-currency-paid transfers**: three same-hash rows where two of them
//!   settle the gas fee in the stable token
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activityscan::{
//!     ActivityFeed, FeedConfig, JsonFileTransferSource, StaticRegistryResolver, TransferQuery,
//! };
//! use alloy_primitives::address;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let feed = ActivityFeed::new(
//!     JsonFileTransferSource::new("transfers.json"),
//!     StaticRegistryResolver::from_file("registry.json").await?,
//!     FeedConfig::from_env()?,
//! );
//!
//! let query = TransferQuery::new(address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"));
//! let stable_activity = feed.token_transactions(&query, "cUSD").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`transfers`]: raw rows, the explorer envelope, fetching and grouping
//! - [`registry`]: lazily populated well-known contract addresses
//! - [`classify`]: the rule table, the fee heuristic and the classifier
//! - [`feed`]: end-to-end feed assembly
//! - [`config`]: static configuration
//! - [`errors`]: error types

pub mod classify;
pub mod config;
pub mod errors;
pub mod feed;
pub mod registry;
pub mod transfers;
pub mod types;

mod tracing;

#[cfg(test)]
mod test_support;

// Configuration
pub use config::{FeedConfig, FeedConfigBuilder};

// Errors
pub use errors::{
    ActivityError, ClassificationError, CommentDecodeError, ConfigError, FetchError, RegistryError,
};

// Strong types
pub use types::events::{
    CurrencyAmount, EventType, FeedEvent, FeedPayload, TokenTransaction, TokenTransactionDetail,
};
pub use types::gas::{GasAmount, GasPrice};
pub use types::tokens::{TokenAmount, TokenDecimals};

// Transfers
pub use transfers::{
    group_by_hash, parse_explorer_response, ExplorerResponse, GroupedTransfers,
    JsonFileTransferSource, RawTransferRow, ReceiptMetadata, TransferGroup, TransferQuery,
    TransferSource,
};

// Registry
pub use registry::{
    AddressRegistry, RegistryResolver, RegistrySnapshot, RegistryState, ResolvedAddresses,
    StaticRegistryResolver,
};

// Classification
pub use classify::{
    resolve_event_type, select_fee_paid_transfer, CommentDecoder, EventClassifier,
    GroupClassification, TransferCommentDecoder, WellKnownAddresses,
};

// Feed assembly
pub use feed::{
    assemble_feed_events, assemble_reward_events, assemble_token_transactions, ActivityFeed,
};

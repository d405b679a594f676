// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Example assembling activity feeds from a saved explorer response
//!
//! This example shows how to:
//! 1. Load a registry snapshot and a `tokentx` response from disk
//! 2. Build an `ActivityFeed` with configuration from the environment
//! 3. Print the general feed, the rewards feed and a token-scoped feed
//!
//! Run with:
//! ```bash
//! VIEWER=0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa \
//! TRANSFERS_PATH=demos/data/transfers.json \
//! REGISTRY_PATH=demos/data/registry.json \
//! TOKEN=cUSD \
//! RUST_LOG=activityscan=debug \
//! cargo run --example activity_feed_from_files
//! ```

use activityscan::{
    ActivityFeed, FeedConfig, FeedPayload, JsonFileTransferSource, StaticRegistryResolver,
    TransferQuery,
};
use alloy_primitives::Address;
use anyhow::{Context, Result};
use std::env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dotenvy::dotenv().ok();

    let viewer: Address = env::var("VIEWER")
        .unwrap_or_else(|_| "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string())
        .parse()
        .context("VIEWER is not an address")?;
    let transfers_path =
        env::var("TRANSFERS_PATH").unwrap_or_else(|_| "demos/data/transfers.json".to_string());
    let registry_path =
        env::var("REGISTRY_PATH").unwrap_or_else(|_| "demos/data/registry.json".to_string());
    let token = env::var("TOKEN").unwrap_or_else(|_| "cUSD".to_string());

    info!(%viewer, transfers_path, registry_path, token, "Starting activity feed example");

    let resolver = StaticRegistryResolver::from_file(&registry_path)
        .await
        .context("Failed to load registry snapshot")?;
    let config = FeedConfig::from_env().context("Invalid address override")?;
    let feed = ActivityFeed::new(JsonFileTransferSource::new(transfers_path), resolver, config);

    let query = TransferQuery::new(viewer);

    println!("\n=== Activity Feed ===");
    for event in feed.feed_events(&query).await? {
        let when = event
            .datetime()
            .map(|datetime| datetime.to_rfc3339())
            .unwrap_or_else(|| event.timestamp.to_string());
        match &event.payload {
            FeedPayload::Exchange {
                in_value,
                in_symbol,
                out_value,
                out_symbol,
            } => println!(
                "{when}  {:<20} {in_value} {in_symbol} -> {out_value} {out_symbol}",
                event.event_type
            ),
            FeedPayload::Transfer {
                value,
                symbol,
                address,
                comment,
            } => println!(
                "{when}  {:<20} {value} {symbol} ({address}) {comment}",
                event.event_type
            ),
        }
    }

    println!("\n=== Verification Rewards ===");
    for event in feed.reward_events(&query).await? {
        println!("{}  {}", event.timestamp, serde_json::to_string(&event)?);
    }

    println!("\n=== {token} Transactions ===");
    for transaction in feed.token_transactions(&query, &token).await? {
        println!(
            "{}  {:<20} {} {}",
            transaction.timestamp,
            transaction.event_type,
            transaction.amount.value,
            transaction.amount.currency_code
        );
    }

    Ok(())
}

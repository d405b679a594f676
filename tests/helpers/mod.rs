// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for activityscan integration tests
//!
//! Provides mock implementations of the collaborator traits so feeds can be
//! assembled without an explorer or a ledger client.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use activityscan::{
    FetchError, RawTransferRow, RegistryError, RegistryResolver, RegistrySnapshot, TransferQuery,
    TransferSource,
};
use alloy_primitives::{address, Address, TxHash};
use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

pub const VIEWER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub const OTHER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
pub const THIRD: Address = address!("cccccccccccccccccccccccccccccccccccccccc");
pub const STABLE_TOKEN: Address = address!("765de816845861e75a25fca122bb6898b8b1282a");
pub const GOLD_TOKEN: Address = address!("471ece3750da237f93b8e339c536989b8978a438");
pub const ATTESTATIONS: Address = address!("dc553892cdeeed9f575aa0fba099e5847fd88d20");
pub const ESCROW: Address = address!("f4fa51472ca8d72af678975d9f8795a504e7ada5");

/// One whole native unit (10^18)
pub const ONE: u128 = 1_000_000_000_000_000_000;

/// Registry contents matching the address constants above
///
/// Mapping keys are upper-cased to exercise case-insensitive lookups.
pub fn registry_snapshot() -> RegistrySnapshot {
    RegistrySnapshot {
        token_address_mapping: Some(HashMap::from([
            (
                STABLE_TOKEN.to_string().to_uppercase().replace("0X", "0x"),
                "cUSD".to_string(),
            ),
            (GOLD_TOKEN.to_string(), "cGLD".to_string()),
        ])),
        attestations_address: Some(ATTESTATIONS),
        escrow_address: Some(ESCROW),
        gold_token_address: Some(GOLD_TOKEN),
        stable_token_address: Some(STABLE_TOKEN),
    }
}

/// Create a transfer row the way the explorer reports it
///
/// Gas defaults to 21000 units at price 1; timestamp and block derive from the
/// hash byte so distinct hashes sort deterministically.
pub fn create_transfer_row(
    hash: u8,
    from: Address,
    to: Address,
    contract: Address,
    value: u128,
) -> RawTransferRow {
    let symbol = if contract == GOLD_TOKEN { "cGLD" } else { "cUSD" };
    serde_json::from_value(json!({
        "blockNumber": (1_000 + u64::from(hash)).to_string(),
        "timeStamp": (1_700_000_000 + u64::from(hash)).to_string(),
        "hash": TxHash::with_last_byte(hash).to_string(),
        "from": from.to_string(),
        "to": to.to_string(),
        "contractAddress": contract.to_string(),
        "value": value.to_string(),
        "tokenSymbol": symbol,
        "gasUsed": "21000",
        "gasPrice": "1",
        "input": "0x",
    }))
    .expect("valid explorer row")
}

/// Wrap rows in a successful explorer envelope
pub fn explorer_body(rows: &[serde_json::Value]) -> String {
    json!({"status": "1", "message": "OK", "result": rows}).to_string()
}

/// Mock TransferSource serving a fixed batch
///
/// Counts the fetches it serves.
#[derive(Default)]
pub struct MockTransferSource {
    rows: Vec<RawTransferRow>,
    rejection: Option<String>,
    fetches: AtomicUsize,
}

impl MockTransferSource {
    /// Serve `rows` for every query
    pub fn new(rows: Vec<RawTransferRow>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Reject every query with `message`
    pub fn rejecting(message: &str) -> Self {
        Self {
            rejection: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Number of fetches served so far
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferSource for MockTransferSource {
    async fn fetch_token_transfers(
        &self,
        _query: &TransferQuery,
    ) -> Result<Vec<RawTransferRow>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.rejection {
            Some(message) => Err(FetchError::explorer_rejected(message.clone())),
            None => Ok(self.rows.clone()),
        }
    }
}

/// RegistryResolver that counts resolutions
///
/// Optionally fails the first `failures` resolutions.
#[derive(Clone)]
pub struct CountingResolver {
    snapshot: RegistrySnapshot,
    calls: Arc<AtomicUsize>,
    failures: usize,
}

impl CountingResolver {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot,
            calls: Arc::new(AtomicUsize::new(0)),
            failures: 0,
        }
    }

    /// Fail the first `failures` resolutions
    pub fn failing_first(mut self, failures: usize) -> Self {
        self.failures = failures;
        self
    }

    /// Shared call counter, readable after the resolver has been moved
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RegistryResolver for CountingResolver {
    async fn resolve(&self) -> Result<RegistrySnapshot, RegistryError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(RegistryError::resolution_failed(std::io::Error::other(
                "ledger client unavailable",
            )));
        }
        Ok(self.snapshot.clone())
    }
}

/// RegistryResolver that blocks until released
///
/// `started` is notified when a resolution begins; the resolution completes
/// once `release` is notified.
pub struct GatedResolver {
    snapshot: RegistrySnapshot,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

impl GatedResolver {
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self {
            snapshot,
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl RegistryResolver for GatedResolver {
    async fn resolve(&self) -> Result<RegistrySnapshot, RegistryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.snapshot.clone())
    }
}

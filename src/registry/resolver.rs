// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The registry resolution boundary

use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::errors::RegistryError;

/// Registry contents as returned by the backing ledger client
///
/// Every field is optional on the wire. Conversion into
/// [`ResolvedAddresses`](super::ResolvedAddresses) rejects a snapshot with any
/// field absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    /// Token contract address (any case) → symbol
    #[serde(default)]
    pub token_address_mapping: Option<HashMap<String, String>>,
    /// Attestation contract
    #[serde(default)]
    pub attestations_address: Option<Address>,
    /// Escrow contract
    #[serde(default)]
    pub escrow_address: Option<Address>,
    /// Native (gold) token contract
    #[serde(default)]
    pub gold_token_address: Option<Address>,
    /// Stable token contract
    #[serde(default)]
    pub stable_token_address: Option<Address>,
}

/// Resolves the well-known contract addresses from a backing ledger client
///
/// Called at most once per successful [`AddressRegistry`](super::AddressRegistry)
/// population.
#[async_trait]
pub trait RegistryResolver: Send + Sync {
    /// Fetch the current registry contents
    async fn resolve(&self) -> Result<RegistrySnapshot, RegistryError>;
}

/// Resolver serving a fixed snapshot
///
/// Useful for tests, demos, and deployments where the contract addresses are
/// pinned in configuration.
///
/// # Example
///
/// ```
/// use activityscan::StaticRegistryResolver;
///
/// let resolver = StaticRegistryResolver::from_json(r#"{
///     "tokenAddressMapping": {"0x765de816845861e75a25fca122bb6898b8b1282a": "cUSD"},
///     "attestationsAddress": "0xdc553892cdeeed9f575aa0fba099e5847fd88d20",
///     "escrowAddress": "0xf4fa51472ca8d72af678975d9f8795a504e7ada5",
///     "goldTokenAddress": "0x471ece3750da237f93b8e339c536989b8978a438",
///     "stableTokenAddress": "0x765de816845861e75a25fca122bb6898b8b1282a"
/// }"#).unwrap();
/// assert!(resolver.snapshot().escrow_address.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct StaticRegistryResolver {
    snapshot: RegistrySnapshot,
}

impl StaticRegistryResolver {
    /// Serve `snapshot` on every resolution
    pub fn new(snapshot: RegistrySnapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a snapshot from its JSON form
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(RegistryError::resolution_failed)
    }

    /// Load a snapshot from a JSON file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(RegistryError::resolution_failed)?;
        Self::from_json(&json)
    }

    /// The snapshot being served
    pub fn snapshot(&self) -> &RegistrySnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl RegistryResolver for StaticRegistryResolver {
    async fn resolve(&self) -> Result<RegistrySnapshot, RegistryError> {
        Ok(self.snapshot.clone())
    }
}

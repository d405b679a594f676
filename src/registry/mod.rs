// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address registry: well-known contract addresses needed for classification
//!
//! The registry resolves the token symbol mapping, the attestation contract and
//! the escrow contract from a [`RegistryResolver`] the first time a feed needs
//! them, then serves pure reads.
//!
//! # State machine
//!
//! ```text
//! Uninitialized ──ensure_populated()──▶ Populating ──ok──▶ Ready
//!       ▲                                   │
//!       └───────────────err─────────────────┘
//! ```
//!
//! Population is single-flight: concurrent callers of
//! [`AddressRegistry::ensure_populated`] await the in-flight resolution rather
//! than starting their own, and readers only ever observe an empty or a fully
//! populated registry.
//!
//! # Example
//!
//! ```rust
//! use activityscan::{AddressRegistry, RegistryState, StaticRegistryResolver};
//!
//! # async fn example(resolver: StaticRegistryResolver) -> Result<(), activityscan::RegistryError> {
//! let registry = AddressRegistry::new(resolver);
//! assert_eq!(registry.state(), RegistryState::Uninitialized);
//!
//! registry.ensure_populated().await?;
//! assert_eq!(registry.state(), RegistryState::Ready);
//! let escrow = registry.escrow_address()?;
//! # Ok(())
//! # }
//! ```

use alloy_primitives::Address;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{info, Instrument};

use crate::errors::RegistryError;
use crate::tracing::spans;

mod addresses;
mod resolver;

pub use addresses::ResolvedAddresses;
pub use resolver::{RegistryResolver, RegistrySnapshot, StaticRegistryResolver};

/// Population state of an [`AddressRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Nothing resolved yet, or the last attempt failed
    Uninitialized,
    /// A resolution is in flight
    Populating,
    /// Addresses are cached for the lifetime of the registry
    Ready,
}

/// Lazily populated cache of well-known addresses
#[derive(Debug)]
pub struct AddressRegistry<R> {
    resolver: R,
    resolved: OnceCell<ResolvedAddresses>,
    populating: AtomicBool,
}

/// Raises the populating flag for the lifetime of one resolution attempt
struct PopulatingFlag<'a>(&'a AtomicBool);

impl<'a> PopulatingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for PopulatingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<R: RegistryResolver> AddressRegistry<R> {
    /// Create an unpopulated registry backed by `resolver`
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            resolved: OnceCell::new(),
            populating: AtomicBool::new(false),
        }
    }

    /// Create a registry that is already [`RegistryState::Ready`]
    ///
    /// The resolver is never consulted.
    pub fn with_addresses(resolver: R, addresses: ResolvedAddresses) -> Self {
        Self {
            resolver,
            resolved: OnceCell::new_with(Some(addresses)),
            populating: AtomicBool::new(false),
        }
    }

    /// Current population state
    pub fn state(&self) -> RegistryState {
        if self.resolved.initialized() {
            RegistryState::Ready
        } else if self.populating.load(Ordering::Acquire) {
            RegistryState::Populating
        } else {
            RegistryState::Uninitialized
        }
    }

    /// Resolve and cache the addresses unless already cached
    ///
    /// Once the registry is ready this is a pure read and performs no
    /// resolution. A failed resolution leaves the registry uninitialized so a
    /// later call can retry.
    ///
    /// # Errors
    ///
    /// Resolver failures, and [`RegistryError::MissingField`] /
    /// [`RegistryError::InvalidAddress`] for an incomplete snapshot.
    pub async fn ensure_populated(&self) -> Result<&ResolvedAddresses, RegistryError> {
        if let Some(resolved) = self.resolved.get() {
            return Ok(resolved);
        }

        self.resolved
            .get_or_try_init(|| async {
                let _flag = PopulatingFlag::raise(&self.populating);
                let snapshot = self.resolver.resolve().await?;
                let resolved = ResolvedAddresses::try_from(snapshot)?;
                info!(
                    tokens = resolved.tokens().len(),
                    attestations = %resolved.attestations(),
                    escrow = %resolved.escrow(),
                    "Address registry populated"
                );
                Ok::<_, RegistryError>(resolved)
            })
            .instrument(spans::ensure_registry())
            .await
    }

    /// All resolved addresses
    pub fn addresses(&self) -> Result<&ResolvedAddresses, RegistryError> {
        self.resolved.get().ok_or(RegistryError::NotReady)
    }

    /// Symbol of the token deployed at `address`
    pub fn token_symbol_for(&self, address: Address) -> Result<&str, RegistryError> {
        self.addresses()?.token_symbol_for(address)
    }

    /// Attestation contract
    pub fn attestation_address(&self) -> Result<Address, RegistryError> {
        self.addresses().map(ResolvedAddresses::attestations)
    }

    /// Escrow contract
    pub fn escrow_address(&self) -> Result<Address, RegistryError> {
        self.addresses().map(ResolvedAddresses::escrow)
    }

    /// Stable token contract
    pub fn stable_token_address(&self) -> Result<Address, RegistryError> {
        self.addresses().map(ResolvedAddresses::stable_token)
    }

    /// Native (gold) token contract
    pub fn gold_token_address(&self) -> Result<Address, RegistryError> {
        self.addresses().map(ResolvedAddresses::gold_token)
    }
}

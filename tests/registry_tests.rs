// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address registry population tests
//!
//! Covers idempotent population, single-flight behavior under concurrent
//! requests, and recovery after a failed resolution.

mod helpers;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use activityscan::{AddressRegistry, RegistryError, RegistryState};
use helpers::{
    registry_snapshot, CountingResolver, GatedResolver, ATTESTATIONS, ESCROW, GOLD_TOKEN,
    STABLE_TOKEN,
};

#[tokio::test]
async fn test_population_is_idempotent() {
    let resolver = CountingResolver::new(registry_snapshot());
    let calls = resolver.counter();
    let registry = AddressRegistry::new(resolver);

    registry.ensure_populated().await.unwrap();
    registry.ensure_populated().await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(registry.state(), RegistryState::Ready);
}

#[tokio::test]
async fn test_lookups_after_population() {
    let registry = AddressRegistry::new(CountingResolver::new(registry_snapshot()));
    registry.ensure_populated().await.unwrap();

    assert_eq!(registry.attestation_address().unwrap(), ATTESTATIONS);
    assert_eq!(registry.escrow_address().unwrap(), ESCROW);
    assert_eq!(registry.stable_token_address().unwrap(), STABLE_TOKEN);
    assert_eq!(registry.gold_token_address().unwrap(), GOLD_TOKEN);
    // mapping key was upper-cased
    assert_eq!(registry.token_symbol_for(STABLE_TOKEN).unwrap(), "cUSD");
    assert_eq!(registry.addresses().unwrap().tokens().len(), 2);
}

#[tokio::test]
async fn test_lookups_before_population_fail() {
    let registry = AddressRegistry::new(CountingResolver::new(registry_snapshot()));

    assert!(matches!(
        registry.attestation_address(),
        Err(RegistryError::NotReady)
    ));
    assert!(matches!(
        registry.token_symbol_for(GOLD_TOKEN),
        Err(RegistryError::NotReady)
    ));
}

#[tokio::test]
async fn test_failed_population_can_be_retried() {
    let resolver = CountingResolver::new(registry_snapshot()).failing_first(1);
    let calls = resolver.counter();
    let registry = AddressRegistry::new(resolver);

    let error = registry.ensure_populated().await.unwrap_err();
    assert!(matches!(error, RegistryError::ResolutionFailed { .. }));
    assert_eq!(registry.state(), RegistryState::Uninitialized);

    registry.ensure_populated().await.unwrap();
    assert_eq!(registry.state(), RegistryState::Ready);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_incomplete_snapshot_is_rejected() {
    let mut snapshot = registry_snapshot();
    snapshot.stable_token_address = None;
    let registry = AddressRegistry::new(CountingResolver::new(snapshot));

    let error = registry.ensure_populated().await.unwrap_err();
    assert!(matches!(
        error,
        RegistryError::MissingField {
            field: "stableTokenAddress"
        }
    ));
    assert_eq!(registry.state(), RegistryState::Uninitialized);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_registry_reports_populating_while_in_flight() {
    let resolver = GatedResolver::new(registry_snapshot());
    let started = Arc::clone(&resolver.started);
    let release = Arc::clone(&resolver.release);
    let registry = Arc::new(AddressRegistry::new(resolver));

    let task = {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move { registry.ensure_populated().await.map(|_| ()) })
    };

    started.notified().await;
    assert_eq!(registry.state(), RegistryState::Populating);
    assert!(matches!(
        registry.escrow_address(),
        Err(RegistryError::NotReady)
    ));

    release.notify_one();
    task.await.unwrap().unwrap();
    assert_eq!(registry.state(), RegistryState::Ready);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_population_is_single_flight() {
    let resolver = GatedResolver::new(registry_snapshot());
    let started = Arc::clone(&resolver.started);
    let release = Arc::clone(&resolver.release);
    let calls = resolver.counter();
    let registry = Arc::new(AddressRegistry::new(resolver));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.ensure_populated().await.map(|_| ()) })
        })
        .collect();

    started.notified().await;
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    release.notify_one();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(registry.state(), RegistryState::Ready);
    assert_eq!(registry.escrow_address().unwrap(), ESCROW);
}

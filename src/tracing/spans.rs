// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for feed assembly.
//!
//! Telemetry stays out of the business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param_value))
//!     .await
//! }
//! ```

use alloy_primitives::{Address, TxHash};
use tracing::{Level, Span};

/// Create span for assembling one feed for a viewing account.
///
/// `kind` is one of `feed`, `rewards`, or `token`.
///
/// Parent: None (root span for this operation)
/// Children: ensure_registry, classify_group spans
#[inline]
pub(crate) fn assemble_feed(kind: &'static str, viewer: Address) -> Span {
    tracing::span!(
        Level::INFO,
        "activityscan.assemble_feed",
        kind = kind,
        viewer = %viewer,
    )
}

/// Create span for classifying one transaction group.
///
/// Parent: assemble_feed span
#[inline]
pub(crate) fn classify_group(hash: TxHash, size: usize) -> Span {
    tracing::trace_span!("activityscan.classify_group", hash = %hash, size = size)
}

/// Create span for resolving the address registry.
///
/// Only entered on the population path; ready registries never create it.
///
/// Parent: assemble_feed span
#[inline]
pub(crate) fn ensure_registry() -> Span {
    tracing::debug_span!("activityscan.ensure_registry")
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer group classification
//!
//! This module turns same-hash transfer groups into semantic events:
//!
//! - [`resolve_event_type`]: the ordered address rule table
//! - [`select_fee_paid_transfer`]: the gas reconciliation heuristic for
//!   fee-currency-paid transactions
//! - [`EventClassifier`]: size-based dispatch and rendering into
//!   [`FeedEvent`](crate::FeedEvent) / [`TokenTransaction`](crate::TokenTransaction)
//! - [`CommentDecoder`]: best-effort comment extraction from call data

mod classifier;
mod comment;
mod fee_currency;
mod resolver;

pub use classifier::{EventClassifier, GroupClassification};
pub use comment::{CommentDecoder, TransferCommentDecoder};
pub use fee_currency::select_fee_paid_transfer;
pub use resolver::{resolve_event_type, WellKnownAddresses};

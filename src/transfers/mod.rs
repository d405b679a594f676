// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token transfer rows and where they come from.
//!
//! This module handles:
//! - The explorer's flat per-transfer row shape ([`RawTransferRow`])
//! - The explorer's `{status, message, result}` envelope
//! - The fetch boundary ([`TransferSource`], [`TransferQuery`])
//! - Grouping rows by transaction hash ([`group_by_hash`])

pub mod explorer;
pub mod grouping;
pub mod row;
pub mod source;

pub use explorer::{parse_explorer_response, ExplorerResponse};
pub use grouping::{group_by_hash, GroupedTransfers, TransferGroup};
pub use row::{RawTransferRow, ReceiptMetadata};
pub use source::{JsonFileTransferSource, TransferQuery, TransferSource};

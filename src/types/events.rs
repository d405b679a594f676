// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Semantic activity events
//!
//! Two output shapes exist. [`FeedEvent`] is the general feed entry with a
//! free-form comment and unsigned values. [`TokenTransaction`] is the
//! token-scoped entry whose [`CurrencyAmount`] is signed from the viewer's
//! point of view.

use alloy_primitives::{Address, TxHash};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed taxonomy of activity event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Two same-hash transfers forming one swap
    Exchange,
    /// Plain incoming transfer
    Received,
    /// Plain outgoing transfer
    Sent,
    /// Grant from the faucet account
    Faucet,
    /// Fee paid to the attestation contract
    VerificationFee,
    /// Payout from the verification-rewards account
    VerificationReward,
    /// Transfer into the escrow contract
    EscrowSent,
    /// Transfer out of the escrow contract
    EscrowReceived,
}

impl EventType {
    /// Whether value leaves the viewing account for this event type
    pub const fn is_outgoing(&self) -> bool {
        matches!(
            self,
            EventType::Sent | EventType::VerificationFee | EventType::EscrowSent
        )
    }

    /// Wire name of the event type
    pub const fn as_str(&self) -> &'static str {
        match self {
            EventType::Exchange => "EXCHANGE",
            EventType::Received => "RECEIVED",
            EventType::Sent => "SENT",
            EventType::Faucet => "FAUCET",
            EventType::VerificationFee => "VERIFICATION_FEE",
            EventType::VerificationReward => "VERIFICATION_REWARD",
            EventType::EscrowSent => "ESCROW_SENT",
            EventType::EscrowReceived => "ESCROW_RECEIVED",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn to_datetime(timestamp: u64) -> Option<DateTime<Utc>> {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}

/// General activity feed entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedEvent {
    /// Semantic event type
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Unix timestamp in seconds
    pub timestamp: u64,
    /// Block number
    pub block: u64,
    /// Transaction hash
    pub hash: TxHash,
    /// Event values
    #[serde(flatten)]
    pub payload: FeedPayload,
}

impl FeedEvent {
    /// Timestamp as a UTC datetime, if representable
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.timestamp)
    }
}

/// Value payload of a [`FeedEvent`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedPayload {
    /// Both legs of an exchange
    #[serde(rename_all = "camelCase")]
    Exchange {
        /// Normalized value of the leg sent by the viewer
        in_value: BigDecimal,
        /// Currency of the leg sent by the viewer
        in_symbol: String,
        /// Normalized value of the other leg
        out_value: BigDecimal,
        /// Currency of the other leg
        out_symbol: String,
    },
    /// A single transfer
    Transfer {
        /// Unsigned normalized value
        value: BigDecimal,
        /// Currency symbol
        symbol: String,
        /// Counterparty
        address: Address,
        /// Decoded comment, possibly empty
        comment: String,
    },
}

/// A value tagged with its currency
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyAmount {
    /// Normalized value
    pub value: BigDecimal,
    /// Currency symbol
    pub currency_code: String,
}

impl CurrencyAmount {
    /// Create a new currency amount
    pub fn new(value: BigDecimal, currency_code: impl Into<String>) -> Self {
        Self {
            value,
            currency_code: currency_code.into(),
        }
    }
}

/// Token-scoped activity entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenTransaction {
    /// Semantic event type
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Unix timestamp in seconds
    pub timestamp: u64,
    /// Block number
    pub block: u64,
    /// Transaction hash
    pub hash: TxHash,
    /// Signed amount in the requested token
    pub amount: CurrencyAmount,
    /// Event-specific detail
    #[serde(flatten)]
    pub detail: TokenTransactionDetail,
}

impl TokenTransaction {
    /// Timestamp as a UTC datetime, if representable
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        to_datetime(self.timestamp)
    }
}

/// Event-specific detail of a [`TokenTransaction`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenTransactionDetail {
    /// Both legs of an exchange
    #[serde(rename_all = "camelCase")]
    Exchange {
        /// Leg sent by the viewer
        maker_amount: CurrencyAmount,
        /// Leg received by the viewer
        taker_amount: CurrencyAmount,
    },
    /// Counterparty and comment of a transfer
    Transfer {
        /// Counterparty
        address: Address,
        /// Decoded comment, possibly empty
        comment: String,
    },
}

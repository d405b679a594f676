// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Per-group classification and rendering

use alloy_primitives::Address;
use bigdecimal::BigDecimal;
use tracing::{debug, warn};

use super::comment::CommentDecoder;
use super::fee_currency::select_fee_paid_transfer;
use super::resolver::{resolve_event_type, WellKnownAddresses};
use crate::config::FeedConfig;
use crate::errors::ClassificationError;
use crate::registry::ResolvedAddresses;
use crate::transfers::{RawTransferRow, TransferGroup};
use crate::types::events::{
    CurrencyAmount, EventType, FeedEvent, FeedPayload, TokenTransaction, TokenTransactionDetail,
};

/// What a transfer group represents, before rendering into an output shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupClassification<'a> {
    /// Two rows forming one swap
    Exchange {
        /// Leg sent by the viewer
        in_leg: &'a RawTransferRow,
        /// Leg received by the viewer
        out_leg: &'a RawTransferRow,
    },
    /// One logical transfer
    Transfer {
        /// The row carrying the transfer
        row: &'a RawTransferRow,
        /// Resolved event type
        event_type: EventType,
        /// Non-viewer party of the transfer
        counterparty: Address,
    },
}

impl GroupClassification<'_> {
    /// Event type of the classified group
    pub fn event_type(&self) -> EventType {
        match self {
            GroupClassification::Exchange { .. } => EventType::Exchange,
            GroupClassification::Transfer { event_type, .. } => *event_type,
        }
    }

    fn anchor(&self) -> &RawTransferRow {
        match self {
            GroupClassification::Exchange { in_leg, .. } => in_leg,
            GroupClassification::Transfer { row, .. } => row,
        }
    }
}

/// Classifies transfer groups from one viewing account's point of view
///
/// Group size decides the shape:
///
/// - 1 row: a plain transfer typed by [`resolve_event_type`]
/// - 2 rows: an exchange; the in leg is the first row sent by the viewer, or
///   the first row when neither leg is
/// - 3 rows: a fee-currency-paid transfer, see
///   [`select_fee_paid_transfer`](super::select_fee_paid_transfer)
/// - anything else: dropped
pub struct EventClassifier<'a> {
    viewer: Address,
    addresses: &'a ResolvedAddresses,
    config: &'a FeedConfig,
    decoder: &'a dyn CommentDecoder,
    known: WellKnownAddresses,
}

impl<'a> EventClassifier<'a> {
    /// Create a classifier for `viewer`
    pub fn new(
        viewer: Address,
        addresses: &'a ResolvedAddresses,
        config: &'a FeedConfig,
        decoder: &'a dyn CommentDecoder,
    ) -> Self {
        let known = WellKnownAddresses::new(config, addresses.attestations(), addresses.escrow());
        Self {
            viewer,
            addresses,
            config,
            decoder,
            known,
        }
    }

    /// The viewing account
    pub fn viewer(&self) -> Address {
        self.viewer
    }

    /// Static configuration in use
    pub fn config(&self) -> &FeedConfig {
        self.config
    }

    /// Classify one group
    ///
    /// Returns `Ok(None)` for groups that produce no event.
    ///
    /// # Errors
    ///
    /// [`ClassificationError::Unclassifiable`] if a transfer does not involve
    /// the viewer.
    pub fn classify<'g>(
        &self,
        group: &'g TransferGroup,
    ) -> Result<Option<GroupClassification<'g>>, ClassificationError> {
        let rows = group.rows();
        match rows {
            [row] => self.classify_transfer(row).map(Some),
            [first, second] => {
                let (in_leg, out_leg) = if second.from == self.viewer && first.from != self.viewer {
                    (second, first)
                } else {
                    (first, second)
                };
                Ok(Some(GroupClassification::Exchange { in_leg, out_leg }))
            }
            [_, _, _] => match select_fee_paid_transfer(rows, self.addresses.stable_token()) {
                Some(row) => self.classify_transfer(row).map(Some),
                None => {
                    warn!(
                        hash = %group.hash(),
                        stable_token = %self.addresses.stable_token(),
                        "Fee-currency group has no non-zero stable token transfer, dropping"
                    );
                    Ok(None)
                }
            },
            _ => {
                debug!(hash = %group.hash(), size = group.len(), "Dropping group of unsupported size");
                Ok(None)
            }
        }
    }

    /// Type a single transfer row
    pub fn classify_transfer<'r>(
        &self,
        row: &'r RawTransferRow,
    ) -> Result<GroupClassification<'r>, ClassificationError> {
        let (event_type, counterparty) = resolve_event_type(self.viewer, row.to, row.from, &self.known)
            .ok_or(ClassificationError::Unclassifiable {
                hash: row.hash,
                viewer: self.viewer,
                from: row.from,
                to: row.to,
            })?;

        Ok(GroupClassification::Transfer {
            row,
            event_type,
            counterparty,
        })
    }

    /// Render a classification as a general feed entry
    pub fn to_feed_event(
        &self,
        classification: &GroupClassification<'_>,
    ) -> Result<FeedEvent, ClassificationError> {
        let anchor = classification.anchor();
        let payload = match *classification {
            GroupClassification::Exchange { in_leg, out_leg } => FeedPayload::Exchange {
                in_value: self.normalized(in_leg)?,
                in_symbol: self.symbol(in_leg)?,
                out_value: self.normalized(out_leg)?,
                out_symbol: self.symbol(out_leg)?,
            },
            GroupClassification::Transfer {
                row, counterparty, ..
            } => FeedPayload::Transfer {
                value: self.normalized(row)?,
                symbol: self.symbol(row)?,
                address: counterparty,
                comment: self.comment(row),
            },
        };

        Ok(FeedEvent {
            event_type: classification.event_type(),
            timestamp: anchor.timestamp,
            block: anchor.block_number,
            hash: anchor.hash,
            payload,
        })
    }

    /// Render a classification as a token-scoped entry for `token`
    ///
    /// Transfer amounts are negative for outgoing event types. An exchange is
    /// expressed in `token`: the negated in-leg value when `token` is the
    /// in-leg symbol, otherwise the out-leg value.
    pub fn to_token_transaction(
        &self,
        classification: &GroupClassification<'_>,
        token: &str,
    ) -> Result<TokenTransaction, ClassificationError> {
        let anchor = classification.anchor();
        let (amount, detail) = match *classification {
            GroupClassification::Exchange { in_leg, out_leg } => {
                let maker_amount = CurrencyAmount::new(self.normalized(in_leg)?, self.symbol(in_leg)?);
                let taker_amount =
                    CurrencyAmount::new(self.normalized(out_leg)?, self.symbol(out_leg)?);
                let amount = if maker_amount.currency_code == token {
                    CurrencyAmount::new(-maker_amount.value.clone(), token)
                } else {
                    taker_amount.clone()
                };
                (
                    amount,
                    TokenTransactionDetail::Exchange {
                        maker_amount,
                        taker_amount,
                    },
                )
            }
            GroupClassification::Transfer {
                row,
                event_type,
                counterparty,
            } => {
                let value = self.normalized(row)?;
                let signed = if event_type.is_outgoing() { -value } else { value };
                (
                    CurrencyAmount::new(signed, self.symbol(row)?),
                    TokenTransactionDetail::Transfer {
                        address: counterparty,
                        comment: self.comment(row),
                    },
                )
            }
        };

        Ok(TokenTransaction {
            event_type: classification.event_type(),
            timestamp: anchor.timestamp,
            block: anchor.block_number,
            hash: anchor.hash,
            amount,
            detail,
        })
    }

    /// Render a verification-rewards payout row
    ///
    /// No type resolution takes place; the caller has already matched the
    /// sender against the rewards account.
    pub fn reward_event(&self, row: &RawTransferRow) -> Result<FeedEvent, ClassificationError> {
        Ok(FeedEvent {
            event_type: EventType::VerificationReward,
            timestamp: row.timestamp,
            block: row.block_number,
            hash: row.hash,
            payload: FeedPayload::Transfer {
                value: self.normalized(row)?,
                symbol: self.symbol(row)?,
                address: self.config.verification_rewards_address,
                comment: self.comment(row),
            },
        })
    }

    fn normalized(&self, row: &RawTransferRow) -> Result<BigDecimal, ClassificationError> {
        row.value.normalize(self.config.native_decimals)
    }

    fn symbol(&self, row: &RawTransferRow) -> Result<String, ClassificationError> {
        Ok(self
            .addresses
            .token_symbol_for(row.contract_address)?
            .to_string())
    }

    fn comment(&self, row: &RawTransferRow) -> String {
        if row.input.is_empty() {
            return String::new();
        }
        self.decoder
            .decode_comment(&row.input)
            .unwrap_or_else(|error| {
                debug!(hash = %row.hash, %error, "Comment not decodable, using empty comment");
                String::new()
            })
    }
}

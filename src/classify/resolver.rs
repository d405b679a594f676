// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Address rule table mapping a transfer to its event type

use alloy_primitives::Address;

use crate::config::FeedConfig;
use crate::types::events::EventType;

/// Well-known addresses consulted by [`resolve_event_type`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellKnownAddresses {
    /// Faucet account
    pub faucet: Address,
    /// Verification-rewards account
    pub verification_rewards: Address,
    /// Attestation contract
    pub attestations: Address,
    /// Escrow contract
    pub escrow: Address,
}

impl WellKnownAddresses {
    /// Combine static configuration with registry-resolved contracts
    pub fn new(config: &FeedConfig, attestations: Address, escrow: Address) -> Self {
        Self {
            faucet: config.faucet_address,
            verification_rewards: config.verification_rewards_address,
            attestations,
            escrow,
        }
    }
}

/// Resolve the event type and counterparty of one transfer
///
/// Rules are evaluated in order and the first match wins:
///
/// | # | Condition                                    | Type                  | Counterparty         |
/// |---|----------------------------------------------|-----------------------|----------------------|
/// | 1 | `to == viewer`, `from == faucet`             | `FAUCET`              | faucet               |
/// | 2 | `to == attestations`, `from == viewer`       | `VERIFICATION_FEE`    | attestations         |
/// | 3 | `to == viewer`, `from == rewards`            | `VERIFICATION_REWARD` | rewards              |
/// | 4 | `to == viewer`, `from == escrow`             | `ESCROW_RECEIVED`     | `from`               |
/// | 5 | `to == viewer`                               | `RECEIVED`            | `from`               |
/// | 6 | `from == viewer`, `to == escrow`             | `ESCROW_SENT`         | escrow               |
/// | 7 | `from == viewer`                             | `SENT`                | `to`                 |
///
/// Returns `None` when the viewer is neither sender nor receiver. A self
/// transfer resolves as received.
///
/// # Example
///
/// ```
/// use activityscan::{resolve_event_type, EventType, WellKnownAddresses};
/// use alloy_primitives::address;
///
/// let viewer = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
/// let other = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
/// let known = WellKnownAddresses {
///     faucet: address!("1111111111111111111111111111111111111111"),
///     verification_rewards: address!("2222222222222222222222222222222222222222"),
///     attestations: address!("3333333333333333333333333333333333333333"),
///     escrow: address!("4444444444444444444444444444444444444444"),
/// };
///
/// let resolved = resolve_event_type(viewer, other, viewer, &known);
/// assert_eq!(resolved, Some((EventType::Sent, other)));
/// ```
pub fn resolve_event_type(
    viewer: Address,
    to: Address,
    from: Address,
    known: &WellKnownAddresses,
) -> Option<(EventType, Address)> {
    if to == viewer && from == known.faucet {
        Some((EventType::Faucet, known.faucet))
    } else if to == known.attestations && from == viewer {
        Some((EventType::VerificationFee, known.attestations))
    } else if to == viewer && from == known.verification_rewards {
        Some((EventType::VerificationReward, known.verification_rewards))
    } else if to == viewer && from == known.escrow {
        Some((EventType::EscrowReceived, from))
    } else if to == viewer {
        Some((EventType::Received, from))
    } else if from == viewer && to == known.escrow {
        Some((EventType::EscrowSent, known.escrow))
    } else if from == viewer {
        Some((EventType::Sent, to))
    } else {
        None
    }
}

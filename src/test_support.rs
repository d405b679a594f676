// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for unit tests

use alloy_primitives::{address, Address, TxHash};
use std::collections::HashMap;

use crate::registry::ResolvedAddresses;
use crate::transfers::{RawTransferRow, ReceiptMetadata};
use crate::types::gas::{GasAmount, GasPrice};
use crate::types::tokens::TokenAmount;

pub(crate) const VIEWER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub(crate) const OTHER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
pub(crate) const THIRD: Address = address!("cccccccccccccccccccccccccccccccccccccccc");
pub(crate) const STABLE_TOKEN: Address = address!("765de816845861e75a25fca122bb6898b8b1282a");
pub(crate) const GOLD_TOKEN: Address = address!("471ece3750da237f93b8e339c536989b8978a438");
pub(crate) const ATTESTATIONS: Address = address!("dc553892cdeeed9f575aa0fba099e5847fd88d20");
pub(crate) const ESCROW: Address = address!("f4fa51472ca8d72af678975d9f8795a504e7ada5");

pub(crate) const ONE: u64 = 1_000_000_000_000_000_000;

pub(crate) fn resolved_addresses() -> ResolvedAddresses {
    let tokens = HashMap::from([
        (STABLE_TOKEN, "cUSD".to_string()),
        (GOLD_TOKEN, "cGLD".to_string()),
    ]);
    ResolvedAddresses::new(tokens, ATTESTATIONS, ESCROW, GOLD_TOKEN, STABLE_TOKEN)
}

pub(crate) struct RowBuilder {
    row: RawTransferRow,
}

impl RowBuilder {
    pub(crate) fn new(hash: TxHash) -> Self {
        Self {
            row: RawTransferRow {
                hash,
                from: Address::ZERO,
                to: Address::ZERO,
                contract_address: STABLE_TOKEN,
                value: TokenAmount::ZERO,
                token_symbol: "cUSD".to_string(),
                timestamp: 0,
                block_number: 0,
                gas_used: GasAmount::default(),
                gas_price: GasPrice::default(),
                input: String::new(),
                receipt: ReceiptMetadata::default(),
            },
        }
    }

    pub(crate) fn from(mut self, from: Address) -> Self {
        self.row.from = from;
        self
    }

    pub(crate) fn to(mut self, to: Address) -> Self {
        self.row.to = to;
        self
    }

    pub(crate) fn contract(mut self, contract: Address) -> Self {
        self.row.contract_address = contract;
        self
    }

    pub(crate) fn value(mut self, value: u64) -> Self {
        self.row.value = TokenAmount::from(value);
        self
    }

    pub(crate) fn timestamp(mut self, timestamp: u64) -> Self {
        self.row.timestamp = timestamp;
        self
    }

    pub(crate) fn block(mut self, block: u64) -> Self {
        self.row.block_number = block;
        self
    }

    pub(crate) fn gas(mut self, used: u64, price: u64) -> Self {
        self.row.gas_used = GasAmount::new(used);
        self.row.gas_price = GasPrice::new(price);
        self
    }

    pub(crate) fn input(mut self, input: &str) -> Self {
        self.row.input = input.to_string();
        self
    }

    pub(crate) fn build(self) -> RawTransferRow {
        self.row
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token transfer rows as reported by the block explorer

use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

use crate::types::gas::{GasAmount, GasPrice};
use crate::types::tokens::TokenAmount;

/// One token-transfer log line
///
/// Rows are immutable once fetched. Several rows may share a `hash`; a row's
/// identity is its hash plus its position in the fetched batch.
///
/// Numeric fields arrive as decimal strings and are parsed on deserialization.
/// Addresses are parsed into [`Address`], which makes every later comparison
/// case-insensitive.
///
/// # Example
///
/// ```
/// use activityscan::RawTransferRow;
///
/// let row: RawTransferRow = serde_json::from_str(r#"{
///     "blockNumber": "120",
///     "timeStamp": "1700000000",
///     "hash": "0x0000000000000000000000000000000000000000000000000000000000000001",
///     "from": "0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
///     "to": "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
///     "contractAddress": "0x765de816845861e75a25fca122bb6898b8b1282a",
///     "value": "1000000000000000000",
///     "tokenSymbol": "cUSD",
///     "gasUsed": "21000",
///     "gasPrice": "5000000000",
///     "input": "0x"
/// }"#).unwrap();
///
/// assert_eq!(row.block_number, 120);
/// assert_eq!(row.token_symbol, "cUSD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransferRow {
    /// Transaction hash
    pub hash: TxHash,
    /// Sender
    pub from: Address,
    /// Receiver
    pub to: Address,
    /// Token contract that emitted the transfer
    pub contract_address: Address,
    /// Transferred value in the smallest unit
    #[serde(deserialize_with = "from_str_or_number")]
    pub value: TokenAmount,
    /// Symbol as reported by the explorer
    #[serde(default)]
    pub token_symbol: String,
    /// Block timestamp in unix seconds
    #[serde(rename = "timeStamp", deserialize_with = "from_str_or_number")]
    pub timestamp: u64,
    /// Block number
    #[serde(deserialize_with = "from_str_or_number")]
    pub block_number: u64,
    /// Gas used by the whole transaction
    #[serde(deserialize_with = "from_str_or_number")]
    pub gas_used: GasAmount,
    /// Gas price paid by the transaction
    #[serde(deserialize_with = "from_str_or_number")]
    pub gas_price: GasPrice,
    /// Raw hex call data of the transaction
    #[serde(default)]
    pub input: String,
    /// Remaining receipt metadata
    #[serde(flatten)]
    pub receipt: ReceiptMetadata,
}

impl RawTransferRow {
    /// Gas cost of the transaction this row belongs to
    ///
    /// Every row of a transaction shares the same receipt, so any row yields
    /// the same cost.
    pub fn gas_cost(&self) -> alloy_primitives::U256 {
        self.gas_used * self.gas_price
    }
}

/// Receipt metadata carried through verbatim
///
/// None of these fields take part in classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptMetadata {
    #[serde(default)]
    pub nonce: Option<String>,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub log_index: Option<String>,
    #[serde(default)]
    pub transaction_index: Option<String>,
    #[serde(default)]
    pub gas: Option<String>,
    #[serde(default)]
    pub cumulative_gas_used: Option<String>,
    #[serde(default)]
    pub confirmations: Option<String>,
    #[serde(default)]
    pub token_name: Option<String>,
    #[serde(default)]
    pub token_decimal: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn from_str_or_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(raw) => raw.parse().map_err(serde::de::Error::custom),
        StringOrNumber::Number(n) => n.to_string().parse().map_err(serde::de::Error::custom),
    }
}

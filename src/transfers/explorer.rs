// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block explorer response envelope

use serde::Deserialize;
use serde_json::Value;

use super::row::RawTransferRow;
use crate::config::constants::explorer::STATUS_OK;
use crate::errors::FetchError;

/// The `{status, message, result}` envelope wrapped around explorer results
#[derive(Debug, Clone, Deserialize)]
pub struct ExplorerResponse {
    /// `"1"` on success, `"0"` otherwise
    pub status: String,
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Row array on success; an error string or empty array otherwise
    #[serde(default)]
    pub result: Value,
}

impl ExplorerResponse {
    /// Extract the transfer rows from the envelope
    ///
    /// A `"0"` status with an empty array result is the explorer's way of
    /// saying "no transfers found" and yields an empty batch. Any other `"0"`
    /// status is an error carrying the explorer's message.
    pub fn into_rows(self) -> Result<Vec<RawTransferRow>, FetchError> {
        let ok = self.status == STATUS_OK;

        match self.result {
            Value::Array(rows) if ok => rows
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map_err(FetchError::from),
            Value::Array(rows) if rows.is_empty() => Ok(Vec::new()),
            Value::Null if ok => Ok(Vec::new()),
            Value::String(detail) if !ok => Err(FetchError::explorer_rejected(
                if detail.is_empty() {
                    self.message
                } else {
                    format!("{}: {}", self.message, detail)
                },
            )),
            _ if !ok => Err(FetchError::explorer_rejected(self.message)),
            other => Err(FetchError::invalid_response(format!(
                "expected an array of transfers, got {}",
                json_kind(&other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse an explorer response body into transfer rows
///
/// # Example
///
/// ```
/// use activityscan::parse_explorer_response;
///
/// let rows = parse_explorer_response(
///     r#"{"status":"0","message":"No token transfers found","result":[]}"#,
/// ).unwrap();
/// assert!(rows.is_empty());
/// ```
pub fn parse_explorer_response(body: &str) -> Result<Vec<RawTransferRow>, FetchError> {
    let response: ExplorerResponse = serde_json::from_str(body)?;
    response.into_rows()
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The fetch boundary: where raw transfer rows come from

use alloy_primitives::{Address, BlockNumber};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

use super::explorer::parse_explorer_response;
use super::row::RawTransferRow;
use crate::config::constants::explorer::{MODULE, TOKEN_TRANSFER_ACTION};
use crate::errors::FetchError;

/// Parameters of one token transfer fetch
///
/// `address` is the viewing account. Pagination and sort parameters are not
/// interpreted here; they are passed through to the explorer verbatim.
///
/// # Example
///
/// ```
/// use activityscan::TransferQuery;
/// use alloy_primitives::address;
///
/// let query = TransferQuery::new(address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"))
///     .with_block_range(100, 200)
///     .with_param("sort", "desc");
///
/// let params = query.to_query_params();
/// assert!(params.contains(&("startblock".to_string(), "100".to_string())));
/// assert!(params.contains(&("sort".to_string(), "desc".to_string())));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferQuery {
    /// Account whose activity is being fetched
    pub address: Address,
    /// First block to include, if bounded
    pub start_block: Option<BlockNumber>,
    /// Last block to include, if bounded
    pub end_block: Option<BlockNumber>,
    /// Extra parameters forwarded verbatim (page, offset, sort, ...)
    pub passthrough: BTreeMap<String, String>,
}

impl TransferQuery {
    /// Query the full history of `address`
    pub fn new(address: Address) -> Self {
        Self {
            address,
            start_block: None,
            end_block: None,
            passthrough: BTreeMap::new(),
        }
    }

    /// Restrict the query to `[start_block, end_block]`
    pub fn with_block_range(mut self, start_block: BlockNumber, end_block: BlockNumber) -> Self {
        self.start_block = Some(start_block);
        self.end_block = Some(end_block);
        self
    }

    /// Forward an extra parameter to the explorer
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.passthrough.insert(key.into(), value.into());
        self
    }

    /// Render the explorer query string parameters
    ///
    /// The address is rendered lower-case. Pass-through parameters follow the
    /// fixed parameters in key order.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("module".to_string(), MODULE.to_string()),
            ("action".to_string(), TOKEN_TRANSFER_ACTION.to_string()),
            ("address".to_string(), self.address.to_string().to_lowercase()),
        ];
        if let Some(start) = self.start_block {
            params.push(("startblock".to_string(), start.to_string()));
        }
        if let Some(end) = self.end_block {
            params.push(("endblock".to_string(), end.to_string()));
        }
        params.extend(
            self.passthrough
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        params
    }
}

/// Source of raw token transfer rows
///
/// Implementations return the whole batch for one query at once, in the
/// explorer's order. They own any retry, timeout and cancellation policy.
///
/// # Example
///
/// ```rust,ignore
/// use activityscan::{FetchError, RawTransferRow, TransferQuery, TransferSource};
/// use async_trait::async_trait;
///
/// struct ExplorerClient { base_url: String, http: reqwest::Client }
///
/// #[async_trait]
/// impl TransferSource for ExplorerClient {
///     async fn fetch_token_transfers(
///         &self,
///         query: &TransferQuery,
///     ) -> Result<Vec<RawTransferRow>, FetchError> {
///         let body = self.http.get(&self.base_url)
///             .query(&query.to_query_params())
///             .send().await
///             .map_err(|e| FetchError::request_failed("tokentx", e))?
///             .text().await
///             .map_err(|e| FetchError::request_failed("tokentx body", e))?;
///         activityscan::parse_explorer_response(&body)
///     }
/// }
/// ```
#[async_trait]
pub trait TransferSource: Send + Sync {
    /// Fetch every token transfer row matching `query`
    async fn fetch_token_transfers(
        &self,
        query: &TransferQuery,
    ) -> Result<Vec<RawTransferRow>, FetchError>;
}

/// Transfer source backed by a saved explorer response on disk
///
/// The file holds one `{status, message, result}` envelope. Block range
/// bounds of the query are applied to the stored rows; other parameters are
/// ignored.
#[derive(Debug, Clone)]
pub struct JsonFileTransferSource {
    path: PathBuf,
}

impl JsonFileTransferSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TransferSource for JsonFileTransferSource {
    async fn fetch_token_transfers(
        &self,
        query: &TransferQuery,
    ) -> Result<Vec<RawTransferRow>, FetchError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::request_failed(format!("read {}", self.path.display()), e))?;

        let rows = parse_explorer_response(&body)?;
        let total = rows.len();
        let rows: Vec<_> = rows
            .into_iter()
            .filter(|row| query.start_block.is_none_or(|start| row.block_number >= start))
            .filter(|row| query.end_block.is_none_or(|end| row.block_number <= end))
            .collect();

        debug!(
            path = %self.path.display(),
            total,
            in_range = rows.len(),
            "Loaded token transfers from file"
        );

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_query_params_for_full_history() {
        let query = TransferQuery::new(address!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"));
        let params = query.to_query_params();

        assert_eq!(
            params,
            vec![
                ("module".to_string(), "account".to_string()),
                ("action".to_string(), "tokentx".to_string()),
                (
                    "address".to_string(),
                    "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_passthrough_params_are_forwarded_verbatim() {
        let query = TransferQuery::new(Address::ZERO)
            .with_block_range(5, 9)
            .with_param("page", "2")
            .with_param("offset", "100");
        let params = query.to_query_params();

        assert_eq!(params[3], ("startblock".to_string(), "5".to_string()));
        assert_eq!(params[4], ("endblock".to_string(), "9".to_string()));
        assert_eq!(params[5], ("offset".to_string(), "100".to_string()));
        assert_eq!(params[6], ("page".to_string(), "2".to_string()));
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transfer fetch boundary.
//!
//! These errors are produced by [`TransferSource`](crate::TransferSource)
//! implementations. Retry policy, timeouts and cancellation all belong to the
//! source; the classification core never retries.

/// Errors that can occur while fetching raw token transfer rows.
///
/// # Examples
///
/// ```rust
/// use activityscan::FetchError;
///
/// let error = FetchError::explorer_rejected("Invalid address format");
/// assert_eq!(
///     error.to_string(),
///     "Explorer rejected the request: Invalid address format"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request to the explorer (or the backing store) failed.
    ///
    /// This covers network failures, timeouts and I/O errors. The boxed
    /// source keeps the transport's own error available for inspection.
    #[error("Failed to fetch token transfers for {operation}")]
    RequestFailed {
        /// Description of the operation that failed (e.g., "tokentx 0xabc…")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The explorer answered with `status: "0"` and a non-empty error message.
    #[error("Explorer rejected the request: {message}")]
    ExplorerRejected {
        /// Message reported by the explorer
        message: String,
    },

    /// The response body could not be decoded into transfer rows.
    #[error("Invalid explorer response: {details}")]
    InvalidResponse {
        /// Details about the decode failure
        details: String,
    },
}

impl FetchError {
    /// Create a `RequestFailed` error with an operation description and source.
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        FetchError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Create an `ExplorerRejected` error from the explorer's message.
    pub fn explorer_rejected(message: impl Into<String>) -> Self {
        FetchError::ExplorerRejected {
            message: message.into(),
        }
    }

    /// Create an `InvalidResponse` error with details.
    pub fn invalid_response(details: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::invalid_response(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let error = FetchError::request_failed("tokentx 0xabc", io);

        assert_eq!(
            error.to_string(),
            "Failed to fetch token transfers for tokentx 0xabc"
        );
        let source = std::error::Error::source(&error).expect("source should be kept");
        assert_eq!(source.to_string(), "deadline elapsed");
    }

    #[test]
    fn test_serde_error_becomes_invalid_response() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = FetchError::from(parse_error);
        assert!(matches!(error, FetchError::InvalidResponse { .. }));
    }
}

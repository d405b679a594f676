// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction comment decoding

use alloy_primitives::hex;
use alloy_sol_types::{sol, SolCall};

use crate::errors::CommentDecodeError;

sol! {
    /// Stable token transfer carrying a free-form comment
    function transferWithComment(address to, uint256 value, string comment);
}

/// Decodes a human-readable comment from raw transaction call data
///
/// Implementations are best-effort. Callers treat an error as "no comment".
pub trait CommentDecoder: Send + Sync {
    /// Decode the comment carried by `input` (hex call data)
    fn decode_comment(&self, input: &str) -> Result<String, CommentDecodeError>;
}

/// Decoder for `transferWithComment(address,uint256,string)` call data
///
/// # Example
///
/// ```
/// use activityscan::{CommentDecoder, TransferCommentDecoder};
///
/// let decoder = TransferCommentDecoder;
/// assert_eq!(decoder.decode_comment("0x").unwrap(), "");
/// assert!(decoder.decode_comment("0xa9059cbb").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferCommentDecoder;

impl CommentDecoder for TransferCommentDecoder {
    fn decode_comment(&self, input: &str) -> Result<String, CommentDecodeError> {
        let input = input.trim();
        if input.is_empty() || input == "0x" {
            return Ok(String::new());
        }

        let bytes = hex::decode(input).map_err(|e| CommentDecodeError::InvalidHex {
            details: e.to_string(),
        })?;

        transferWithCommentCall::abi_decode(&bytes)
            .map(|call| call.comment)
            .map_err(|e| CommentDecodeError::NotACommentCall {
                details: e.to_string(),
            })
    }
}

// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transaction comment decoding.
//!
//! These never abort classification: the classifier logs them and falls back
//! to an empty comment.

/// Errors that can occur when decoding a comment from transaction call data.
#[derive(Debug, thiserror::Error)]
pub enum CommentDecodeError {
    /// The input is not valid hex.
    #[error("Call data is not valid hex: {details}")]
    InvalidHex {
        /// Hex decoding failure details
        details: String,
    },

    /// The call data is not an ABI-encoded call carrying a comment.
    #[error("Call data does not carry a comment: {details}")]
    NotACommentCall {
        /// ABI decoding failure details
        details: String,
    },
}

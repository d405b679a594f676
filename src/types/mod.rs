// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across activityscan.
//!
//! This module provides newtype wrappers and output shapes:
//! - Raw token amounts and decimal precision
//! - Gas units and prices
//! - Semantic activity events

pub mod events;
pub mod gas;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here

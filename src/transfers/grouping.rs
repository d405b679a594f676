// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Grouping of transfer rows by transaction hash

use alloy_primitives::{BlockNumber, TxHash};
use std::collections::HashMap;

use super::row::RawTransferRow;

/// The rows of one transaction, in fetched order
///
/// Never empty. The group's size is the primary classification signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferGroup {
    hash: TxHash,
    rows: Vec<RawTransferRow>,
}

impl TransferGroup {
    fn new(first: RawTransferRow) -> Self {
        Self {
            hash: first.hash,
            rows: vec![first],
        }
    }

    /// Shared transaction hash
    pub fn hash(&self) -> TxHash {
        self.hash
    }

    /// Rows in fetched order
    pub fn rows(&self) -> &[RawTransferRow] {
        &self.rows
    }

    /// Number of rows in the group
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First row of the group
    pub fn first(&self) -> &RawTransferRow {
        &self.rows[0]
    }

    /// Block number shared by the group
    pub fn block_number(&self) -> BlockNumber {
        self.first().block_number
    }

    /// Timestamp shared by the group
    pub fn timestamp(&self) -> u64 {
        self.first().timestamp
    }
}

/// Transfer groups keyed by hash, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct GroupedTransfers {
    groups: Vec<TransferGroup>,
    index: HashMap<TxHash, usize>,
}

impl GroupedTransfers {
    /// Group for `hash`, if any row carried it
    pub fn get(&self, hash: &TxHash) -> Option<&TransferGroup> {
        self.index.get(hash).map(|&position| &self.groups[position])
    }

    /// Groups in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, TransferGroup> {
        self.groups.iter()
    }

    /// Number of distinct hashes
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no rows were grouped
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'a> IntoIterator for &'a GroupedTransfers {
    type Item = &'a TransferGroup;
    type IntoIter = std::slice::Iter<'a, TransferGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl IntoIterator for GroupedTransfers {
    type Item = TransferGroup;
    type IntoIter = std::vec::IntoIter<TransferGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partition rows by transaction hash
///
/// Groups appear in the order their hash was first seen, and each group keeps
/// its rows in their original relative order. Runs in O(n).
///
/// # Example
///
/// ```
/// use activityscan::{group_by_hash, RawTransferRow};
///
/// let rows: Vec<RawTransferRow> = Vec::new();
/// assert!(group_by_hash(rows).is_empty());
/// ```
pub fn group_by_hash(rows: impl IntoIterator<Item = RawTransferRow>) -> GroupedTransfers {
    let mut grouped = GroupedTransfers::default();

    for row in rows {
        match grouped.index.get(&row.hash) {
            Some(&position) => grouped.groups[position].rows.push(row),
            None => {
                grouped.index.insert(row.hash, grouped.groups.len());
                grouped.groups.push(TransferGroup::new(row));
            }
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RowBuilder;

    fn hash(n: u8) -> TxHash {
        TxHash::with_last_byte(n)
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let rows = vec![
            RowBuilder::new(hash(2)).value(1).build(),
            RowBuilder::new(hash(1)).value(2).build(),
            RowBuilder::new(hash(2)).value(3).build(),
            RowBuilder::new(hash(3)).value(4).build(),
            RowBuilder::new(hash(1)).value(5).build(),
        ];

        let grouped = group_by_hash(rows);
        let order: Vec<_> = grouped.iter().map(TransferGroup::hash).collect();
        assert_eq!(order, vec![hash(2), hash(1), hash(3)]);
    }

    #[test]
    fn test_rows_keep_relative_order_within_group() {
        let rows = vec![
            RowBuilder::new(hash(1)).value(10).build(),
            RowBuilder::new(hash(2)).value(20).build(),
            RowBuilder::new(hash(1)).value(30).build(),
            RowBuilder::new(hash(1)).value(40).build(),
        ];

        let grouped = group_by_hash(rows);
        let group = grouped.get(&hash(1)).unwrap();
        let values: Vec<_> = group.rows().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![10u64.into(), 30u64.into(), 40u64.into()]);
        assert_eq!(group.len(), 3);
        assert!(!group.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let grouped = group_by_hash(Vec::new());
        assert!(grouped.is_empty());
        assert_eq!(grouped.len(), 0);
        assert!(grouped.get(&hash(1)).is_none());
    }

    #[test]
    fn test_group_shares_block_and_timestamp() {
        let rows = vec![
            RowBuilder::new(hash(9)).block(77).timestamp(1234).build(),
            RowBuilder::new(hash(9)).block(77).timestamp(1234).build(),
        ];

        let grouped = group_by_hash(rows);
        let group = grouped.iter().next().unwrap();
        assert_eq!(group.block_number(), 77);
        assert_eq!(group.timestamp(), 1234);
    }
}

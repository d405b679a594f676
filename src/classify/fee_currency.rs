// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fee-currency-paid transfer disambiguation
//!
//! A transaction that pays gas in the stable token emits three transfer rows:
//! two that move the fee and one real transfer. The two fee rows sum to the
//! transaction's gas cost.
//!
//! Candidates are the stable-token rows with a non-zero value, sorted by value
//! descending (`c0 >= c1 >= c2`). Pairs are tested in this order:
//!
//! | Pair tested | Sum equals gas cost → transfer |
//! |-------------|--------------------------------|
//! | `c0 + c1`   | `c2`                           |
//! | `c0 + c2`   | `c1`                           |
//! | `c1 + c2`   | `c0`                           |
//! | none        | `c0`                           |
//!
//! With fewer than three candidates no pair is tested and `c0` is the
//! transfer.

use alloy_primitives::{Address, U256};

use crate::transfers::RawTransferRow;

const PAIRS: [(usize, usize, usize); 3] = [(0, 1, 2), (0, 2, 1), (1, 2, 0)];

/// Pick the real transfer out of a fee-currency-paid transaction's rows
///
/// The gas cost is taken from the first row of `rows`; every row of a
/// transaction shares one receipt. Returns `None` when no row is a non-zero
/// stable-token transfer.
pub fn select_fee_paid_transfer(
    rows: &[RawTransferRow],
    stable_token: Address,
) -> Option<&RawTransferRow> {
    let gas_cost = rows.first()?.gas_cost();

    let mut candidates: Vec<&RawTransferRow> = rows
        .iter()
        .filter(|row| row.contract_address == stable_token && !row.value.is_zero())
        .collect();
    candidates.sort_by(|a, b| b.value.cmp(&a.value));

    if candidates.len() >= 3 {
        let matched = PAIRS.iter().find(|(a, b, _)| {
            pair_sum(candidates[*a], candidates[*b]) == Some(gas_cost)
        });
        if let Some(&(_, _, transfer)) = matched {
            return Some(candidates[transfer]);
        }
    }

    candidates.first().copied()
}

fn pair_sum(a: &RawTransferRow, b: &RawTransferRow) -> Option<U256> {
    a.value.as_u256().checked_add(b.value.as_u256())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RowBuilder, GOLD_TOKEN, STABLE_TOKEN};
    use alloy_primitives::TxHash;

    const GAS_USED: u64 = 50_000;
    const GAS_PRICE: u64 = 1_000;
    const GAS_COST: u64 = GAS_USED * GAS_PRICE;

    fn row(value: u64) -> RawTransferRow {
        RowBuilder::new(TxHash::with_last_byte(3))
            .value(value)
            .gas(GAS_USED, GAS_PRICE)
            .build()
    }

    fn selected_value(rows: &[RawTransferRow]) -> Option<u64> {
        select_fee_paid_transfer(rows, STABLE_TOKEN).map(|row| row.value.as_u256().to::<u64>())
    }

    #[test]
    fn test_two_largest_pay_the_fee() {
        // 30k + 20k == gas cost, the small row is the transfer
        let rows = [row(7), row(30_000_000), row(20_000_000)];
        assert_eq!(selected_value(&rows), Some(7));
    }

    #[test]
    fn test_largest_and_smallest_pay_the_fee() {
        let rows = [row(40_000_000), row(25_000_000), row(10_000_000)];
        assert_eq!(selected_value(&rows), Some(25_000_000));
    }

    #[test]
    fn test_two_smallest_pay_the_fee() {
        let rows = [row(30_000_000), row(900_000_000), row(20_000_000)];
        assert_eq!(selected_value(&rows), Some(900_000_000));
    }

    #[test]
    fn test_no_matching_pair_defaults_to_highest() {
        let rows = [row(5), row(9), row(3)];
        assert_eq!(selected_value(&rows), Some(9));
    }

    #[test]
    fn test_first_matching_pair_in_table_order_wins() {
        // c1 == c2, so both (0,1) and (0,2) sum to the gas cost. The sort is
        // stable, so c2 is rows[2].
        let rows = [row(10_000_000), row(40_000_000), row(10_000_000)];
        let selected = select_fee_paid_transfer(&rows, STABLE_TOKEN).unwrap();
        assert_eq!(selected.value.as_u256().to::<u64>(), 10_000_000);
        assert!(std::ptr::eq(selected, &rows[2]));
    }

    #[test]
    fn test_non_stable_and_zero_rows_are_ignored() {
        let gold = RowBuilder::new(TxHash::with_last_byte(3))
            .contract(GOLD_TOKEN)
            .value(1_000_000_000)
            .gas(GAS_USED, GAS_PRICE)
            .build();
        let rows = [gold, row(0), row(12)];
        assert_eq!(selected_value(&rows), Some(12));
    }

    #[test]
    fn test_no_candidates() {
        let gold = RowBuilder::new(TxHash::with_last_byte(3))
            .contract(GOLD_TOKEN)
            .value(1)
            .build();
        assert!(select_fee_paid_transfer(&[gold, row(0), row(0)], STABLE_TOKEN).is_none());
        assert!(select_fee_paid_transfer(&[], STABLE_TOKEN).is_none());
    }

    #[test]
    fn test_gas_cost_constant() {
        assert_eq!(row(1).gas_cost(), U256::from(GAS_COST));
    }
}

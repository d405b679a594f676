// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and constants
//!
//! These addresses are static configuration: unlike the attestation and escrow
//! contracts, they are never resolved from the ledger at runtime.

use alloy_primitives::{address, Address};

/// Well-known addresses used to classify transfers
pub mod well_known {
    use super::*;

    /// Account that funds new wallets with faucet grants
    ///
    /// Address: 0xF4314cb9046bECe6AA54bb9533155434d0c76909
    pub const FAUCET_ADDRESS: Address = address!("f4314cb9046bece6aa54bb9533155434d0c76909");

    /// Account that pays out verification rewards
    ///
    /// Address: 0xb4fF4D8E4E8bbbbF7AAb7aB0C5B8fDcCd5AF2aF4
    pub const VERIFICATION_REWARDS_ADDRESS: Address =
        address!("b4ff4d8e4e8bbbbf7aab7ab0c5b8fdccd5af2af4");
}

/// Explorer API parameters for the token transfer listing
pub mod explorer {
    /// `module` query parameter
    pub const MODULE: &str = "account";

    /// `action` query parameter listing ERC-20 style transfers
    pub const TOKEN_TRANSFER_ACTION: &str = "tokentx";

    /// `status` value of a successful response
    pub const STATUS_OK: &str = "1";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_addresses_are_distinct() {
        assert_ne!(
            well_known::FAUCET_ADDRESS,
            well_known::VERIFICATION_REWARDS_ADDRESS
        );
    }

    #[test]
    fn test_faucet_address_parses_case_insensitively() {
        let mixed: Address = "0xF4314cb9046bECe6AA54bb9533155434d0c76909"
            .parse()
            .unwrap();
        assert_eq!(mixed, well_known::FAUCET_ADDRESS);
    }
}

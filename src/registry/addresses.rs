// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validated registry contents

use alloy_primitives::Address;
use std::collections::HashMap;

use super::resolver::RegistrySnapshot;
use crate::errors::RegistryError;

/// Fully resolved well-known addresses
///
/// Every field is present; a [`RegistrySnapshot`] missing any of them fails
/// conversion. Address keys are parsed, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddresses {
    tokens: HashMap<Address, String>,
    attestations: Address,
    escrow: Address,
    gold_token: Address,
    stable_token: Address,
}

impl ResolvedAddresses {
    /// Create resolved addresses from already-validated parts
    pub fn new(
        tokens: HashMap<Address, String>,
        attestations: Address,
        escrow: Address,
        gold_token: Address,
        stable_token: Address,
    ) -> Self {
        Self {
            tokens,
            attestations,
            escrow,
            gold_token,
            stable_token,
        }
    }

    /// Symbol of the token deployed at `address`
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownTokenAddress`] if the contract is not mapped.
    pub fn token_symbol_for(&self, address: Address) -> Result<&str, RegistryError> {
        self.tokens
            .get(&address)
            .map(String::as_str)
            .ok_or(RegistryError::UnknownTokenAddress { address })
    }

    /// Token contract → symbol mapping
    pub fn tokens(&self) -> &HashMap<Address, String> {
        &self.tokens
    }

    /// Attestation contract
    pub fn attestations(&self) -> Address {
        self.attestations
    }

    /// Escrow contract
    pub fn escrow(&self) -> Address {
        self.escrow
    }

    /// Native (gold) token contract
    pub fn gold_token(&self) -> Address {
        self.gold_token
    }

    /// Stable token contract, the currency fee-paid transfers are settled in
    pub fn stable_token(&self) -> Address {
        self.stable_token
    }
}

impl TryFrom<RegistrySnapshot> for ResolvedAddresses {
    type Error = RegistryError;

    fn try_from(snapshot: RegistrySnapshot) -> Result<Self, Self::Error> {
        let mapping = snapshot
            .token_address_mapping
            .ok_or(RegistryError::missing_field("tokenAddressMapping"))?;
        let attestations = snapshot
            .attestations_address
            .ok_or(RegistryError::missing_field("attestationsAddress"))?;
        let escrow = snapshot
            .escrow_address
            .ok_or(RegistryError::missing_field("escrowAddress"))?;
        let gold_token = snapshot
            .gold_token_address
            .ok_or(RegistryError::missing_field("goldTokenAddress"))?;
        let stable_token = snapshot
            .stable_token_address
            .ok_or(RegistryError::missing_field("stableTokenAddress"))?;

        let tokens = mapping
            .into_iter()
            .map(|(key, symbol)| {
                key.trim()
                    .parse::<Address>()
                    .map(|address| (address, symbol))
                    .map_err(|e| RegistryError::invalid_address(key, e))
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Ok(Self::new(
            tokens,
            attestations,
            escrow,
            gold_token,
            stable_token,
        ))
    }
}

//! Authorization Verifier
//!
//! Checks that a request was authorized by the trusted signer. The digest is
//! always rebuilt by the caller from the parameters it actually received (see
//! `custody_common::authorization`); nothing here trusts a caller-supplied hash.
//!
//! # Check order
//! 1. nonce already consumed → `AlreadyUsedSignature`, whatever the signature
//! 2. recovery fails or yields another identity → `InvalidSignature`
//!
//! A successful check yields an [`Approval`], which the handler spends to
//! consume the nonce in the same transaction as its pool mutation.

use cosmwasm_std::{Api, Env, Storage};
use custody_common::hash::{eth_address_from_pubkey, ETH_ADDRESS_LENGTH};

use crate::error::ContractError;
use crate::nonces;

/// Length of an `r || s || v` signature
pub const SIGNATURE_LENGTH: usize = 65;

/// Recovers the identity that produced a signature over a digest
pub trait SignerRecovery {
    fn recover_signer(
        &self,
        digest: &[u8; 32],
        signature: &[u8],
    ) -> Result<[u8; ETH_ADDRESS_LENGTH], ContractError>;
}

/// Ethereum-style ECDSA recovery through the host's secp256k1 precompile
pub struct Secp256k1Recovery<'a> {
    api: &'a dyn Api,
}

impl<'a> Secp256k1Recovery<'a> {
    pub fn new(api: &'a dyn Api) -> Self {
        Self { api }
    }
}

impl SignerRecovery for Secp256k1Recovery<'_> {
    fn recover_signer(
        &self,
        digest: &[u8; 32],
        signature: &[u8],
    ) -> Result<[u8; ETH_ADDRESS_LENGTH], ContractError> {
        if signature.len() != SIGNATURE_LENGTH {
            return Err(ContractError::InvalidSignature);
        }

        // Accept both raw (0/1) and Ethereum-offset (27/28) recovery ids
        let recovery_param = match signature[64] {
            0 | 27 => 0,
            1 | 28 => 1,
            _ => return Err(ContractError::InvalidSignature),
        };

        let pubkey = self
            .api
            .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
            .map_err(|_| ContractError::InvalidSignature)?;

        eth_address_from_pubkey(&pubkey).ok_or(ContractError::InvalidSignature)
    }
}

/// Proof that an authorization verified; spend it with [`Approval::consume`]
#[must_use = "an approval must be consumed, or the nonce stays reusable"]
#[derive(Debug, PartialEq, Eq)]
pub struct Approval {
    nonce: u64,
}

impl Approval {
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Mark the approved nonce consumed
    pub fn consume(self, storage: &mut dyn Storage) -> Result<u64, ContractError> {
        nonces::consume(storage, self.nonce)?;
        Ok(self.nonce)
    }
}

/// Verify `signature` over `digest` against the trusted signer
///
/// Read-only: the nonce is only consumed once the returned approval is spent.
pub fn verify_authorization(
    storage: &dyn Storage,
    recovery: &dyn SignerRecovery,
    trusted_signer: &[u8; ETH_ADDRESS_LENGTH],
    digest: &[u8; 32],
    signature: &[u8],
    nonce: u64,
) -> Result<Approval, ContractError> {
    if nonces::is_consumed(storage, nonce)? {
        return Err(ContractError::AlreadyUsedSignature { nonce });
    }

    let recovered = recovery.recover_signer(digest, signature)?;
    if &recovered != trusted_signer {
        return Err(ContractError::InvalidSignature);
    }

    Ok(Approval { nonce })
}

/// Reject authorizations whose deadline has passed
///
/// Expiry reports `InvalidSignature`, the same as a forged signature.
pub fn check_deadline(env: &Env, deadline: u64) -> Result<(), ContractError> {
    if env.block.time.seconds() > deadline {
        return Err(ContractError::InvalidSignature);
    }
    Ok(())
}

//! Canonical authorization payloads
//!
//! The off-chain signer commits to one of these tuples; the contract rebuilds
//! the same tuple from the parameters it actually received and checks the
//! signature against it. Both sides must therefore encode identically.
//!
//! # Encoding
//! The payload hash is `keccak256` over a sequence of 32-byte words:
//! - word 0: `keccak256(tag)`, a per-operation domain tag
//! - string fields (addresses, chain ids, routing strings): `keccak256(utf8)`
//! - amounts and integers: big-endian, left-padded to 32 bytes
//!
//! The signature is produced over the EIP-191 digest of the payload hash, so an
//! ordinary `signMessage(arrayify(payloadHash))` call is a valid signer.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::hash::{eth_signed_message_hash, keccak256, string_word, u128_word, u64_word};

/// Domain tag for deposits leaving this chain
pub const BRIDGE_IN_TAG: &str = "CUSTODY_BRIDGE/BRIDGE_IN";

/// Domain tag for signer-authorized releases on this chain
pub const TRANSFER_OUT_TAG: &str = "CUSTODY_BRIDGE/TRANSFER_OUT";

/// Tuple signed for a `BridgeIn` deposit
#[cw_serde]
pub struct BridgeInAuthorization {
    /// Depositing user on this chain
    pub user: String,
    /// Bridge contract address (domain binding)
    pub bridge: String,
    /// Chain id of this network (domain binding)
    pub chain_id: String,
    /// CW20 token contract
    pub token: String,
    pub amount: Uint128,
    /// Fixed commission on top of the stable percentage
    pub gas_commission: Uint128,
    pub destination_chain: String,
    pub destination_address: String,
    /// Unix seconds after which the authorization is void
    pub deadline: u64,
    pub nonce: u64,
    /// Correlates the deposit with the signer's own records
    pub transaction_id: u64,
}

impl BridgeInAuthorization {
    pub fn payload_hash(&self) -> [u8; 32] {
        PayloadEncoder::new(BRIDGE_IN_TAG)
            .string(&self.user)
            .string(&self.bridge)
            .string(&self.chain_id)
            .string(&self.token)
            .amount(self.amount)
            .amount(self.gas_commission)
            .string(&self.destination_chain)
            .string(&self.destination_address)
            .integer(self.deadline)
            .integer(self.nonce)
            .integer(self.transaction_id)
            .finish()
    }

    /// Digest the signer actually signs
    pub fn signed_digest(&self) -> [u8; 32] {
        eth_signed_message_hash(&self.payload_hash())
    }
}

/// Tuple signed for a `TransferOut` release
#[cw_serde]
pub struct TransferOutAuthorization {
    pub bridge: String,
    pub chain_id: String,
    pub token: String,
    pub recipient: String,
    /// Amount released to the recipient, already net of commission
    pub amount: Uint128,
    pub total_commission: Uint128,
    pub deadline: u64,
    pub nonce: u64,
    pub transaction_id: u64,
}

impl TransferOutAuthorization {
    pub fn payload_hash(&self) -> [u8; 32] {
        PayloadEncoder::new(TRANSFER_OUT_TAG)
            .string(&self.bridge)
            .string(&self.chain_id)
            .string(&self.token)
            .string(&self.recipient)
            .amount(self.amount)
            .amount(self.total_commission)
            .integer(self.deadline)
            .integer(self.nonce)
            .integer(self.transaction_id)
            .finish()
    }

    pub fn signed_digest(&self) -> [u8; 32] {
        eth_signed_message_hash(&self.payload_hash())
    }
}

struct PayloadEncoder {
    data: Vec<u8>,
}

impl PayloadEncoder {
    fn new(tag: &str) -> Self {
        let mut data = Vec::with_capacity(12 * 32);
        data.extend_from_slice(&string_word(tag));
        Self { data }
    }

    fn string(mut self, value: &str) -> Self {
        self.data.extend_from_slice(&string_word(value));
        self
    }

    fn amount(mut self, value: Uint128) -> Self {
        self.data.extend_from_slice(&u128_word(value.u128()));
        self
    }

    fn integer(mut self, value: u64) -> Self {
        self.data.extend_from_slice(&u64_word(value));
        self
    }

    fn finish(self) -> [u8; 32] {
        keccak256(&self.data)
    }
}

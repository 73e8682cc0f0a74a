//! Custody Common - Shared Types and Utilities for the Custody Bridge
//!
//! This package holds everything the bridge contract and its off-chain
//! signer must agree on byte-for-byte: the canonical authorization payloads
//! and the hashing helpers used to build and check them.

pub mod authorization;
pub mod hash;

pub use authorization::{BridgeInAuthorization, TransferOutAuthorization};
pub use hash::{eth_address_from_pubkey, eth_signed_message_hash, keccak256, parse_eth_address};

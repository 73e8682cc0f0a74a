//! Custody Bridge Contract - Custodial Cross-Chain Token Bridge Ledger
//!
//! This contract holds CW20 tokens in custody for bridging to and from other
//! chains. A single trusted off-chain signer authorizes user flows; the owner
//! settles and manages the treasury.
//!
//! # Outgoing Flow (BridgeIn)
//! 1. Signer authorizes a deposit (user, token, amount, destination, nonce)
//! 2. User submits it with `BridgeIn` (allowance) or a CW20 `Send`
//! 3. Contract books the deposit and commission, emits `bridge_funds_in`
//!
//! # Incoming Flow (TransferOut / BridgeOut)
//! 1. Signer authorizes a release, or the owner settles it directly
//! 2. Contract releases from the bridgeable pool and transfers the tokens
//!
//! # Security
//! - Signatures bound to this contract address and chain id
//! - One shared nonce space, each nonce consumed at most once
//! - Commission held apart from the bridgeable pool
//! - Emergency pause of user flows

pub mod commission;
pub mod contract;
pub mod error;
pub mod events;
mod execute;
pub mod msg;
pub mod nonces;
pub mod pool;
mod query;
pub mod state;
pub mod verify;

pub use crate::error::ContractError;
pub use crate::verify::{Approval, Secp256k1Recovery, SignerRecovery};

//! Error types for the Custody Bridge contract
//!
//! Every variant rejects the whole operation; the host discards all writes of
//! the failed transaction.

use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    // ========================================================================
    // Access Control Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can accept")]
    UnauthorizedPendingOwner,

    #[error("No pending owner change")]
    NoPendingOwner,

    // ========================================================================
    // Bridge State Errors
    // ========================================================================

    #[error("Bridge is paused")]
    BridgePaused,

    #[error("Bridge pause state is already {paused}")]
    InvalidPauseState { paused: bool },

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Signature already used: nonce {nonce}")]
    AlreadyUsedSignature { nonce: u64 },

    #[error("Invalid signer identity: {reason}")]
    InvalidSignerIdentity { reason: String },

    // ========================================================================
    // Input Validation Errors
    // ========================================================================

    #[error("Invalid token address")]
    InvalidTokenAddress,

    #[error("Invalid recipient address")]
    InvalidRecipientAddress,

    #[error("Invalid destination address")]
    InvalidDestinationAddress,

    #[error("Invalid destination chain")]
    InvalidDestinationChain,

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    // ========================================================================
    // Commission & Pool Errors
    // ========================================================================

    #[error("Commission {commission} is greater than amount {amount}")]
    CommissionGreaterThanAmount {
        commission: Uint128,
        amount: Uint128,
    },

    #[error("Invalid stable commission percent: {percent} exceeds max {max}")]
    InvalidStableCommissionPercent { percent: u64, max: u64 },

    #[error("Amount {requested} exceeds bridge pool {available}")]
    AmountExceedBridgePool {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Amount {requested} exceeds commission pool {available}")]
    AmountExceedCommissionPool {
        requested: Uint128,
        available: Uint128,
    },

    #[error("Pool invariant violated: commission {commission_reserved} exceeds held {total_held}")]
    PoolInvariantViolated {
        total_held: Uint128,
        commission_reserved: Uint128,
    },
}

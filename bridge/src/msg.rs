//! Message types for the Custody Bridge contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address (defaults to the instantiating sender)
    pub owner: Option<String>,
    /// Trusted signer as a `0x`-prefixed Ethereum address (any letter case)
    pub signer: String,
    /// Stable commission in basis points (defaults to 400)
    pub stable_commission_percent: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // User Flows (signer-authorized)
    // ========================================================================
    /// Deposit CW20 tokens for bridging to another chain
    ///
    /// Pulls `amount` from the sender with `TransferFrom`, so the sender must
    /// have granted this contract an allowance first.
    BridgeIn {
        /// CW20 token contract
        token: String,
        amount: Uint128,
        /// Fixed commission on top of the stable percentage
        gas_commission: Uint128,
        destination_chain: String,
        destination_address: String,
        /// Unix seconds
        deadline: u64,
        nonce: u64,
        transaction_id: u64,
        /// 65-byte `r || s || v` signature over the bridge-in digest
        signature: Binary,
    },

    /// Deposit CW20 tokens via CW20 `Send` (see [`ReceiveMsg`])
    Receive(cw20::Cw20ReceiveMsg),

    /// Release bridgeable tokens with a signer authorization
    ///
    /// Authorization: anyone holding a valid signature
    TransferOut {
        token: String,
        recipient: String,
        /// Amount paid to the recipient
        amount: Uint128,
        /// Commission the signer took on the source side (signed, not charged here)
        total_commission: Uint128,
        deadline: u64,
        nonce: u64,
        transaction_id: u64,
        signature: Binary,
    },

    // ========================================================================
    // Owner Settlement & Treasury
    // ========================================================================
    /// Release bridgeable tokens to a recipient
    ///
    /// Authorization: Owner only
    BridgeOut {
        token: String,
        recipient: String,
        amount: Uint128,
        transaction_id: u64,
        source_chain: String,
        source_address: String,
    },

    /// Withdraw accrued commission to the owner
    ///
    /// Authorization: Owner only
    WithdrawCommission { token: String, amount: Uint128 },

    /// Update the stable commission (basis points, at most 9000)
    ///
    /// Authorization: Owner only
    SetStableCommissionPercent { percent: u64 },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Pause user flows (BridgeIn, TransferOut)
    Pause {},

    /// Resume user flows
    Unpause {},

    /// Propose a new owner (two-step transfer)
    ProposeOwner { new_owner: String },

    /// Accept ownership (callable by the proposed owner)
    AcceptOwnership {},

    /// Cancel a pending ownership proposal
    CancelOwnershipProposal {},
}

/// Hook messages carried inside a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Deposit the sent tokens for bridging
    ///
    /// The depositing user is the CW20 sender, the token is the CW20 contract
    /// and the amount is the sent amount; all three are part of the signed
    /// payload.
    BridgeIn {
        gas_commission: Uint128,
        destination_chain: String,
        destination_address: String,
        deadline: u64,
        nonce: u64,
        transaction_id: u64,
        signature: Binary,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Commission Queries
    // ========================================================================
    /// Commission a deposit of `amount` would pay
    #[returns(TotalCommissionResponse)]
    TotalCommission {
        amount: Uint128,
        fixed_commission: Uint128,
    },

    /// Current stable commission
    #[returns(StableCommissionPercentResponse)]
    StableCommissionPercent {},

    /// Accrued commission for a token
    #[returns(CommissionPoolResponse)]
    CommissionPool { token: String },

    // ========================================================================
    // Core Queries
    // ========================================================================
    /// Chain id bound into every authorization
    #[returns(ChainIdResponse)]
    ChainId {},

    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Full pool accounting for a token, with the contract's CW20 balance
    #[returns(PoolResponse)]
    Pool { token: String },

    /// Check if a nonce has been consumed
    #[returns(NonceUsedResponse)]
    NonceUsed { nonce: u64 },

    /// Returns the proposed owner, if any
    #[returns(Option<PendingOwnerResponse>)]
    PendingOwner {},

    // ========================================================================
    // Signer Helpers
    // ========================================================================
    /// Digest a signer must sign to authorize a BridgeIn on this deployment
    #[returns(AuthorizationDigestResponse)]
    BridgeInDigest {
        user: String,
        token: String,
        amount: Uint128,
        gas_commission: Uint128,
        destination_chain: String,
        destination_address: String,
        deadline: u64,
        nonce: u64,
        transaction_id: u64,
    },

    /// Digest a signer must sign to authorize a TransferOut on this deployment
    #[returns(AuthorizationDigestResponse)]
    TransferOutDigest {
        token: String,
        recipient: String,
        amount: Uint128,
        total_commission: Uint128,
        deadline: u64,
        nonce: u64,
        transaction_id: u64,
    },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct TotalCommissionResponse {
    pub total_commission: Uint128,
}

#[cw_serde]
pub struct StableCommissionPercentResponse {
    pub stable_commission_percent: u64,
    pub hundred_percent: u64,
}

#[cw_serde]
pub struct CommissionPoolResponse {
    pub token: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct ChainIdResponse {
    pub chain_id: String,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub signer: String,
    pub stable_commission_percent: u64,
    pub paused: bool,
}

#[cw_serde]
pub struct PoolResponse {
    pub token: Addr,
    pub total_held: Uint128,
    pub commission_reserved: Uint128,
    pub bridgeable: Uint128,
    /// CW20 balance actually held by the contract
    pub token_balance: Uint128,
}

#[cw_serde]
pub struct NonceUsedResponse {
    pub nonce: u64,
    pub used: bool,
}

#[cw_serde]
pub struct PendingOwnerResponse {
    pub new_owner: Addr,
}

#[cw_serde]
pub struct AuthorizationDigestResponse {
    /// keccak256 of the canonical payload
    pub payload_hash: Binary,
    /// EIP-191 digest of `payload_hash`; this is what gets signed
    pub digest: Binary,
}

//! State definitions for the Custody Bridge contract
//!
//! Configuration, per-token pools and the consumed-nonce ledger. All access
//! goes through the typed `cw-storage-plus` handles below.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Sole authority for admin operations
    pub owner: Addr,
    /// Trusted signer, the raw 20-byte Ethereum address
    pub signer: Binary,
    /// Stable commission in basis points of `HUNDRED_PERCENT`
    pub stable_commission_percent: u64,
    /// Whether user-initiated flows are currently blocked
    pub paused: bool,
}

/// Custody balances for a single CW20 token
#[cw_serde]
#[derive(Default)]
pub struct TokenPool {
    /// Everything the bridge holds for this token
    pub total_held: Uint128,
    /// Portion of `total_held` earmarked as accrued commission
    pub commission_reserved: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Basis points denominator (10000 = 100%)
pub const HUNDRED_PERCENT: u64 = 10_000;

/// Highest stable commission the owner may configure (90%)
pub const MAX_STABLE_COMMISSION_PERCENT: u64 = 9_000;

/// Stable commission applied when instantiate does not override it (4%)
pub const DEFAULT_STABLE_COMMISSION_PERCENT: u64 = 400;

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Proposed owner awaiting acceptance (if any)
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Token pools
/// Key: CW20 contract address, Value: TokenPool
pub const POOLS: Map<&Addr, TokenPool> = Map::new("pools");

/// Consumed authorization nonces, shared by BridgeIn and TransferOut
/// Key: nonce, Value: always true once consumed
pub const USED_NONCES: Map<u64, bool> = Map::new("used_nonces");

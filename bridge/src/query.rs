//! Query handlers for the Custody Bridge contract.
//!
//! This module contains all query message handlers for retrieving contract state.

use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Uint128};
use custody_common::hash::{eth_address_to_hex, ETH_ADDRESS_LENGTH};
use custody_common::{BridgeInAuthorization, TransferOutAuthorization};

use crate::commission::compute_total_commission;
use crate::msg::{
    AuthorizationDigestResponse, ChainIdResponse, CommissionPoolResponse, ConfigResponse,
    NonceUsedResponse, PendingOwnerResponse, PoolResponse, StableCommissionPercentResponse,
    TotalCommissionResponse,
};
use crate::state::{CONFIG, HUNDRED_PERCENT, PENDING_OWNER, POOLS, USED_NONCES};

// ============================================================================
// Commission Queries
// ============================================================================

/// Commission a deposit would pay at the current stable percentage.
///
/// Reports the raw figure; a deposit where it exceeds `amount` is rejected.
pub fn query_total_commission(
    deps: Deps,
    amount: Uint128,
    fixed_commission: Uint128,
) -> StdResult<TotalCommissionResponse> {
    let config = CONFIG.load(deps.storage)?;
    let total_commission =
        compute_total_commission(amount, fixed_commission, config.stable_commission_percent)?;
    Ok(TotalCommissionResponse { total_commission })
}

pub fn query_stable_commission_percent(deps: Deps) -> StdResult<StableCommissionPercentResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StableCommissionPercentResponse {
        stable_commission_percent: config.stable_commission_percent,
        hundred_percent: HUNDRED_PERCENT,
    })
}

pub fn query_commission_pool(deps: Deps, token: String) -> StdResult<CommissionPoolResponse> {
    let token = deps.api.addr_validate(&token)?;
    let pool = POOLS.may_load(deps.storage, &token)?.unwrap_or_default();
    Ok(CommissionPoolResponse {
        token,
        amount: pool.commission_reserved,
    })
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_chain_id(env: Env) -> StdResult<ChainIdResponse> {
    Ok(ChainIdResponse {
        chain_id: env.block.chain_id,
    })
}

/// Query contract configuration, with the signer as `0x` hex.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let signer: [u8; ETH_ADDRESS_LENGTH] = config
        .signer
        .as_slice()
        .try_into()
        .map_err(|_| StdError::generic_err("Stored signer is not an Ethereum address"))?;
    Ok(ConfigResponse {
        owner: config.owner,
        signer: eth_address_to_hex(&signer),
        stable_commission_percent: config.stable_commission_percent,
        paused: config.paused,
    })
}

/// Pool accounting plus the CW20 balance the contract actually holds.
pub fn query_pool(deps: Deps, env: Env, token: String) -> StdResult<PoolResponse> {
    let token = deps.api.addr_validate(&token)?;
    let pool = POOLS.may_load(deps.storage, &token)?.unwrap_or_default();

    let balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        &token,
        &cw20::Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;

    Ok(PoolResponse {
        bridgeable: pool.bridgeable(),
        token,
        total_held: pool.total_held,
        commission_reserved: pool.commission_reserved,
        token_balance: balance.balance,
    })
}

/// Check if a nonce has been consumed.
pub fn query_nonce_used(deps: Deps, nonce: u64) -> StdResult<NonceUsedResponse> {
    let used = USED_NONCES.may_load(deps.storage, nonce)?.unwrap_or(false);
    Ok(NonceUsedResponse { nonce, used })
}

/// Query pending ownership transfer.
pub fn query_pending_owner(deps: Deps) -> StdResult<Option<PendingOwnerResponse>> {
    let pending = PENDING_OWNER.may_load(deps.storage)?;
    Ok(pending.map(|new_owner| PendingOwnerResponse { new_owner }))
}

// ============================================================================
// Signer Helpers
// ============================================================================

fn digest_response(payload_hash: [u8; 32], digest: [u8; 32]) -> AuthorizationDigestResponse {
    AuthorizationDigestResponse {
        payload_hash: Binary::from(payload_hash.to_vec()),
        digest: Binary::from(digest.to_vec()),
    }
}

/// Compute the BridgeIn digest for this deployment.
#[allow(clippy::too_many_arguments)]
pub fn query_bridge_in_digest(
    deps: Deps,
    env: Env,
    user: String,
    token: String,
    amount: Uint128,
    gas_commission: Uint128,
    destination_chain: String,
    destination_address: String,
    deadline: u64,
    nonce: u64,
    transaction_id: u64,
) -> StdResult<AuthorizationDigestResponse> {
    let user = deps.api.addr_validate(&user)?;
    let token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| StdError::generic_err("Invalid token address"))?;

    let authorization = BridgeInAuthorization {
        user: user.to_string(),
        bridge: env.contract.address.to_string(),
        chain_id: env.block.chain_id,
        token: token.to_string(),
        amount,
        gas_commission,
        destination_chain,
        destination_address,
        deadline,
        nonce,
        transaction_id,
    };
    Ok(digest_response(
        authorization.payload_hash(),
        authorization.signed_digest(),
    ))
}

/// Compute the TransferOut digest for this deployment.
#[allow(clippy::too_many_arguments)]
pub fn query_transfer_out_digest(
    deps: Deps,
    env: Env,
    token: String,
    recipient: String,
    amount: Uint128,
    total_commission: Uint128,
    deadline: u64,
    nonce: u64,
    transaction_id: u64,
) -> StdResult<AuthorizationDigestResponse> {
    let token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| StdError::generic_err("Invalid token address"))?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let authorization = TransferOutAuthorization {
        bridge: env.contract.address.to_string(),
        chain_id: env.block.chain_id,
        token: token.to_string(),
        recipient: recipient.to_string(),
        amount,
        total_commission,
        deadline,
        nonce,
        transaction_id,
    };
    Ok(digest_response(
        authorization.payload_hash(),
        authorization.signed_digest(),
    ))
}

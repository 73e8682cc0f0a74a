//! Custody Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use custody_common::hash::{eth_address_to_hex, parse_eth_address};

use crate::commission::validate_stable_commission_percent;
use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_bridge_in, execute_bridge_out,
    execute_cancel_ownership_proposal, execute_pause, execute_propose_owner, execute_receive,
    execute_set_stable_commission_percent, execute_transfer_out, execute_unpause,
    execute_withdraw_commission,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_bridge_in_digest, query_chain_id, query_commission_pool, query_config, query_nonce_used,
    query_pending_owner, query_pool, query_stable_commission_percent, query_total_commission,
    query_transfer_out_digest,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_STABLE_COMMISSION_PERCENT,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let signer = parse_eth_address(&msg.signer).map_err(|reason| {
        ContractError::InvalidSignerIdentity {
            reason: reason.to_string(),
        }
    })?;

    let stable_commission_percent = msg
        .stable_commission_percent
        .unwrap_or(DEFAULT_STABLE_COMMISSION_PERCENT);
    validate_stable_commission_percent(stable_commission_percent)?;

    let config = Config {
        owner,
        signer: Binary::from(signer.to_vec()),
        stable_commission_percent,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("signer", eth_address_to_hex(&signer))
        .add_attribute(
            "stable_commission_percent",
            stable_commission_percent.to_string(),
        )
        .add_attribute("chain_id", env.block.chain_id))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // User flows
        ExecuteMsg::BridgeIn {
            token,
            amount,
            gas_commission,
            destination_chain,
            destination_address,
            deadline,
            nonce,
            transaction_id,
            signature,
        } => execute_bridge_in(
            deps,
            env,
            info,
            token,
            amount,
            gas_commission,
            destination_chain,
            destination_address,
            deadline,
            nonce,
            transaction_id,
            signature,
        ),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
        ExecuteMsg::TransferOut {
            token,
            recipient,
            amount,
            total_commission,
            deadline,
            nonce,
            transaction_id,
            signature,
        } => execute_transfer_out(
            deps,
            env,
            token,
            recipient,
            amount,
            total_commission,
            deadline,
            nonce,
            transaction_id,
            signature,
        ),

        // Owner settlement & treasury
        ExecuteMsg::BridgeOut {
            token,
            recipient,
            amount,
            transaction_id,
            source_chain,
            source_address,
        } => execute_bridge_out(
            deps,
            info,
            token,
            recipient,
            amount,
            transaction_id,
            source_chain,
            source_address,
        ),
        ExecuteMsg::WithdrawCommission { token, amount } => {
            execute_withdraw_commission(deps, info, token, amount)
        }
        ExecuteMsg::SetStableCommissionPercent { percent } => {
            execute_set_stable_commission_percent(deps, info, percent)
        }

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeOwner { new_owner } => execute_propose_owner(deps, info, new_owner),
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipProposal {} => execute_cancel_ownership_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Commission queries
        QueryMsg::TotalCommission {
            amount,
            fixed_commission,
        } => to_json_binary(&query_total_commission(deps, amount, fixed_commission)?),
        QueryMsg::StableCommissionPercent {} => {
            to_json_binary(&query_stable_commission_percent(deps)?)
        }
        QueryMsg::CommissionPool { token } => to_json_binary(&query_commission_pool(deps, token)?),

        // Core queries
        QueryMsg::ChainId {} => to_json_binary(&query_chain_id(env)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Pool { token } => to_json_binary(&query_pool(deps, env, token)?),
        QueryMsg::NonceUsed { nonce } => to_json_binary(&query_nonce_used(deps, nonce)?),
        QueryMsg::PendingOwner {} => to_json_binary(&query_pending_owner(deps)?),

        // Signer helpers
        QueryMsg::BridgeInDigest {
            user,
            token,
            amount,
            gas_commission,
            destination_chain,
            destination_address,
            deadline,
            nonce,
            transaction_id,
        } => to_json_binary(&query_bridge_in_digest(
            deps,
            env,
            user,
            token,
            amount,
            gas_commission,
            destination_chain,
            destination_address,
            deadline,
            nonce,
            transaction_id,
        )?),
        QueryMsg::TransferOutDigest {
            token,
            recipient,
            amount,
            total_commission,
            deadline,
            nonce,
            transaction_id,
        } => to_json_binary(&query_transfer_out_digest(
            deps,
            env,
            token,
            recipient,
            amount,
            total_commission,
            deadline,
            nonce,
            transaction_id,
        )?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

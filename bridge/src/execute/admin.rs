//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause of user flows
//! - Ownership transfer (propose/accept/cancel)

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, PENDING_OWNER};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops BridgeIn and TransferOut).
pub fn execute_pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, true)
}

/// Unpause the contract (resumes user flows).
pub fn execute_unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    set_paused(deps, info, false)
}

fn set_paused(deps: DepsMut, info: MessageInfo, paused: bool) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if config.paused == paused {
        return Err(ContractError::InvalidPauseState { paused });
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    let method = if paused { "pause" } else { "unpause" };
    Ok(Response::new().add_attribute("method", method))
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Propose a new owner.
pub fn execute_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_owner_addr = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(deps.storage, &new_owner_addr)?;

    Ok(Response::new()
        .add_attribute("method", "propose_owner")
        .add_attribute("new_owner", new_owner_addr))
}

/// Accept a pending ownership proposal.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous_owner = std::mem::replace(&mut config.owner, pending.clone());
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", pending))
}

/// Cancel a pending ownership proposal.
pub fn execute_cancel_ownership_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    if PENDING_OWNER.may_load(deps.storage)?.is_none() {
        return Err(ContractError::NoPendingOwner);
    }
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new().add_attribute("method", "cancel_ownership_proposal"))
}

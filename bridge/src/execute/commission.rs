//! Commission handlers.
//!
//! Owner-only treasury operations: withdrawing accrued commission and tuning
//! the stable commission for future deposits.

use cosmwasm_std::{DepsMut, Event, MessageInfo, Response, Uint128};

use super::cw20_transfer_msg;
use crate::commission::validate_stable_commission_percent;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::pool::{load_pool, save_pool};
use crate::state::CONFIG;

/// Withdraw accrued commission for `token` to the owner.
pub fn execute_withdraw_commission(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let token = deps
        .api
        .addr_validate(&token)
        .map_err(|_| ContractError::InvalidTokenAddress)?;

    let mut pool = load_pool(deps.storage, &token)?;
    pool.withdraw_commission(amount)?;
    save_pool(deps.storage, &token, &pool)?;

    let transfer = cw20_transfer_msg(&token, &config.owner, amount)?;
    let event = BridgeEvent::WithdrawCommission {
        token: token.clone(),
        amount,
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_event(Event::from(event))
        .add_attribute("method", "withdraw_commission")
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("remaining_commission", pool.commission_reserved))
}

/// Set the stable commission used by subsequent deposits.
pub fn execute_set_stable_commission_percent(
    deps: DepsMut,
    info: MessageInfo,
    percent: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    validate_stable_commission_percent(percent)?;

    let old_percent = config.stable_commission_percent;
    config.stable_commission_percent = percent;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_stable_commission_percent")
        .add_attribute("old_percent", old_percent.to_string())
        .add_attribute("new_percent", percent.to_string()))
}

//! Execute handlers for the Custody Bridge contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `outgoing` - BridgeIn and Receive handlers (deposits leaving this chain)
//! - `incoming` - BridgeOut and TransferOut handlers (releases on this chain)
//! - `commission` - Commission withdrawal and stable percentage updates
//! - `admin` - Pause, unpause and ownership transfer

mod admin;
mod commission;
mod incoming;
mod outgoing;

pub use admin::*;
pub use commission::*;
pub use incoming::*;
pub use outgoing::*;

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;
use custody_common::hash::ETH_ADDRESS_LENGTH;

use crate::error::ContractError;
use crate::state::Config;

/// CW20 `Transfer` from this contract to `recipient`
fn cw20_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// CW20 `TransferFrom` pulling `amount` from `owner` into this contract
fn cw20_transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Decode the stored signer identity
fn trusted_signer(config: &Config) -> Result<[u8; ETH_ADDRESS_LENGTH], ContractError> {
    config
        .signer
        .as_slice()
        .try_into()
        .map_err(|_| ContractError::InvalidSignerIdentity {
            reason: format!("expected {ETH_ADDRESS_LENGTH} bytes, got {}", config.signer.len()),
        })
}

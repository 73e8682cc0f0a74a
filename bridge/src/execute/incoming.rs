//! Incoming transfer handlers (BridgeOut and TransferOut).
//!
//! Both release tokens from the bridgeable part of a pool; they differ in who
//! authorizes the release:
//! - `BridgeOut` - the owner settles a transfer directly
//! - `TransferOut` - anyone presenting a trusted-signer authorization

use cosmwasm_std::{Addr, Api, Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use custody_common::hash::bytes32_to_hex;
use custody_common::TransferOutAuthorization;

use super::{cw20_transfer_msg, trusted_signer};
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::pool::{load_pool, save_pool};
use crate::state::CONFIG;
use crate::verify::{check_deadline, verify_authorization, Secp256k1Recovery};

fn validate_release(
    api: &dyn Api,
    token: &str,
    recipient: &str,
    amount: Uint128,
) -> Result<(Addr, Addr), ContractError> {
    let token = api
        .addr_validate(token)
        .map_err(|_| ContractError::InvalidTokenAddress)?;
    let recipient = api
        .addr_validate(recipient)
        .map_err(|_| ContractError::InvalidRecipientAddress)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok((token, recipient))
}

// ============================================================================
// Owner Settlement
// ============================================================================

/// Release bridgeable tokens on the owner's authority.
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_out(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    recipient: String,
    amount: Uint128,
    transaction_id: u64,
    source_chain: String,
    source_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let (token, recipient) = validate_release(deps.api, &token, &recipient, amount)?;

    let mut pool = load_pool(deps.storage, &token)?;
    pool.release(amount)?;
    save_pool(deps.storage, &token, &pool)?;

    let transfer = cw20_transfer_msg(&token, &recipient, amount)?;
    let event = BridgeEvent::FundsOut {
        recipient: recipient.clone(),
        token: token.clone(),
        amount,
        transaction_id,
        source_chain,
        source_address,
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_event(Event::from(event))
        .add_attribute("method", "bridge_out")
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("transaction_id", transaction_id.to_string()))
}

// ============================================================================
// Signer-Authorized Release
// ============================================================================

/// Release bridgeable tokens against a trusted-signer authorization.
///
/// `total_commission` is bound into the signature for the signer's records; it
/// was charged on the source side and is not taken from the pool here.
#[allow(clippy::too_many_arguments)]
pub fn execute_transfer_out(
    deps: DepsMut,
    env: Env,
    token: String,
    recipient: String,
    amount: Uint128,
    total_commission: Uint128,
    deadline: u64,
    nonce: u64,
    transaction_id: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let (token, recipient) = validate_release(deps.api, &token, &recipient, amount)?;

    check_deadline(&env, deadline)?;

    let authorization = TransferOutAuthorization {
        bridge: env.contract.address.to_string(),
        chain_id: env.block.chain_id.clone(),
        token: token.to_string(),
        recipient: recipient.to_string(),
        amount,
        total_commission,
        deadline,
        nonce,
        transaction_id,
    };
    let approval = verify_authorization(
        deps.storage,
        &Secp256k1Recovery::new(deps.api),
        &trusted_signer(&config)?,
        &authorization.signed_digest(),
        signature.as_slice(),
        nonce,
    )?;

    let mut pool = load_pool(deps.storage, &token)?;
    pool.release(amount)?;
    save_pool(deps.storage, &token, &pool)?;
    let nonce = approval.consume(deps.storage)?;

    let transfer = cw20_transfer_msg(&token, &recipient, amount)?;
    let event = BridgeEvent::TransferOut {
        recipient: recipient.clone(),
        transaction_id,
        nonce,
        token: token.clone(),
        amount,
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_event(Event::from(event))
        .add_attribute("method", "transfer_out")
        .add_attribute("recipient", recipient)
        .add_attribute("token", token)
        .add_attribute("amount", amount)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("payload_hash", bytes32_to_hex(&authorization.payload_hash())))
}

//! Outgoing transfer handlers (BridgeIn and Receive).
//!
//! These handlers take custody of tokens leaving this chain. Both entry points
//! share one deposit path; they differ only in how the tokens arrive:
//! - `BridgeIn` pulls them with `TransferFrom` after the ledger is updated
//! - `Receive` is the CW20 `Send` hook, where the tokens have already moved

use cosmwasm_std::{from_json, Addr, Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use cw20::Cw20ReceiveMsg;
use custody_common::hash::bytes32_to_hex;
use custody_common::BridgeInAuthorization;

use super::{cw20_transfer_from_msg, trusted_signer};
use crate::commission::total_commission;
use crate::error::ContractError;
use crate::events::BridgeEvent;
use crate::msg::ReceiveMsg;
use crate::pool::{load_pool, save_pool};
use crate::state::CONFIG;
use crate::verify::{check_deadline, verify_authorization, Secp256k1Recovery};

/// How the deposited tokens reach the contract
enum Funding {
    /// Pulled from the user's allowance with `TransferFrom`
    Allowance,
    /// Already moved by a CW20 `Send`
    Received,
}

/// A deposit request, as signed by the trusted signer
struct Deposit {
    user: Addr,
    token: String,
    amount: Uint128,
    gas_commission: Uint128,
    destination_chain: String,
    destination_address: String,
    deadline: u64,
    nonce: u64,
    transaction_id: u64,
    signature: Binary,
    funding: Funding,
}

/// Deposit CW20 tokens, pulling them from the sender's allowance
#[allow(clippy::too_many_arguments)]
pub fn execute_bridge_in(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    gas_commission: Uint128,
    destination_chain: String,
    destination_address: String,
    deadline: u64,
    nonce: u64,
    transaction_id: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let deposit = Deposit {
        user: info.sender,
        token,
        amount,
        gas_commission,
        destination_chain,
        destination_address,
        deadline,
        nonce,
        transaction_id,
        signature,
        funding: Funding::Allowance,
    };
    process_deposit(deps, &env, deposit)
}

/// CW20 receive hook
///
/// The calling contract is the token; the CW20 sender is the depositing user.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let user = deps.api.addr_validate(&cw20_msg.sender)?;

    let receive_msg: ReceiveMsg = from_json(&cw20_msg.msg)?;

    match receive_msg {
        ReceiveMsg::BridgeIn {
            gas_commission,
            destination_chain,
            destination_address,
            deadline,
            nonce,
            transaction_id,
            signature,
        } => {
            let deposit = Deposit {
                user,
                token: info.sender.to_string(),
                amount: cw20_msg.amount,
                gas_commission,
                destination_chain,
                destination_address,
                deadline,
                nonce,
                transaction_id,
                signature,
                funding: Funding::Received,
            };
            process_deposit(deps, &env, deposit)
        }
    }
}

/// Validate, authorize and book a deposit
///
/// The `TransferFrom` pull, when needed, is dispatched after the ledger update.
fn process_deposit(deps: DepsMut, env: &Env, deposit: Deposit) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if config.paused {
        return Err(ContractError::BridgePaused);
    }

    let token = deps
        .api
        .addr_validate(&deposit.token)
        .map_err(|_| ContractError::InvalidTokenAddress)?;

    if deposit.destination_address.is_empty() {
        return Err(ContractError::InvalidDestinationAddress);
    }
    if deposit.destination_chain.is_empty() {
        return Err(ContractError::InvalidDestinationChain);
    }
    if deposit.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }

    check_deadline(env, deposit.deadline)?;

    let authorization = BridgeInAuthorization {
        user: deposit.user.to_string(),
        bridge: env.contract.address.to_string(),
        chain_id: env.block.chain_id.clone(),
        token: token.to_string(),
        amount: deposit.amount,
        gas_commission: deposit.gas_commission,
        destination_chain: deposit.destination_chain.clone(),
        destination_address: deposit.destination_address.clone(),
        deadline: deposit.deadline,
        nonce: deposit.nonce,
        transaction_id: deposit.transaction_id,
    };
    let approval = verify_authorization(
        deps.storage,
        &Secp256k1Recovery::new(deps.api),
        &trusted_signer(&config)?,
        &authorization.signed_digest(),
        deposit.signature.as_slice(),
        deposit.nonce,
    )?;

    let commission = total_commission(
        deposit.amount,
        deposit.gas_commission,
        config.stable_commission_percent,
    )?;

    // Ledger first, token movement after
    let mut pool = load_pool(deps.storage, &token)?;
    pool.deposit(deposit.amount, commission)?;
    save_pool(deps.storage, &token, &pool)?;
    let nonce = approval.consume(deps.storage)?;

    let event = BridgeEvent::FundsIn {
        user: deposit.user.clone(),
        transaction_id: deposit.transaction_id,
        nonce,
        token: token.clone(),
        amount: deposit.amount,
        stable_commission_percent: config.stable_commission_percent,
        gas_commission: deposit.gas_commission,
        total_commission: commission,
        destination_chain: deposit.destination_chain,
        destination_address: deposit.destination_address,
    };

    let mut response = Response::new();
    if let Funding::Allowance = deposit.funding {
        let pull =
            cw20_transfer_from_msg(&token, &deposit.user, &env.contract.address, deposit.amount)?;
        response = response.add_message(pull);
    }

    Ok(response
        .add_event(Event::from(event))
        .add_attribute("method", "bridge_in")
        .add_attribute("user", deposit.user)
        .add_attribute("token", token)
        .add_attribute("amount", deposit.amount)
        .add_attribute("total_commission", commission)
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("payload_hash", bytes32_to_hex(&authorization.payload_hash())))
}

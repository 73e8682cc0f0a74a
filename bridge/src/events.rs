//! Audit events
//!
//! Each successful ledger operation emits exactly one of these. CosmWasm
//! surfaces them on chain as `wasm-<type>`.

use cosmwasm_std::{Addr, Event, Uint128};

pub const BRIDGE_FUNDS_IN: &str = "bridge_funds_in";
pub const BRIDGE_FUNDS_OUT: &str = "bridge_funds_out";
pub const TRANSFER_OUT: &str = "transfer_out";
pub const WITHDRAW_COMMISSION: &str = "withdraw_commission";

#[derive(Clone, Debug, PartialEq)]
pub enum BridgeEvent {
    FundsIn {
        user: Addr,
        transaction_id: u64,
        nonce: u64,
        token: Addr,
        amount: Uint128,
        stable_commission_percent: u64,
        gas_commission: Uint128,
        total_commission: Uint128,
        destination_chain: String,
        destination_address: String,
    },
    FundsOut {
        recipient: Addr,
        token: Addr,
        amount: Uint128,
        transaction_id: u64,
        source_chain: String,
        source_address: String,
    },
    TransferOut {
        recipient: Addr,
        transaction_id: u64,
        nonce: u64,
        token: Addr,
        amount: Uint128,
    },
    WithdrawCommission {
        token: Addr,
        amount: Uint128,
    },
}

impl From<BridgeEvent> for Event {
    fn from(event: BridgeEvent) -> Self {
        match event {
            BridgeEvent::FundsIn {
                user,
                transaction_id,
                nonce,
                token,
                amount,
                stable_commission_percent,
                gas_commission,
                total_commission,
                destination_chain,
                destination_address,
            } => Event::new(BRIDGE_FUNDS_IN)
                .add_attribute("user", user)
                .add_attribute("transaction_id", transaction_id.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("token", token)
                .add_attribute("amount", amount)
                .add_attribute(
                    "stable_commission_percent",
                    stable_commission_percent.to_string(),
                )
                .add_attribute("gas_commission", gas_commission)
                .add_attribute("total_commission", total_commission)
                .add_attribute("destination_chain", destination_chain)
                .add_attribute("destination_address", destination_address),
            BridgeEvent::FundsOut {
                recipient,
                token,
                amount,
                transaction_id,
                source_chain,
                source_address,
            } => Event::new(BRIDGE_FUNDS_OUT)
                .add_attribute("recipient", recipient)
                .add_attribute("token", token)
                .add_attribute("amount", amount)
                .add_attribute("transaction_id", transaction_id.to_string())
                .add_attribute("source_chain", source_chain)
                .add_attribute("source_address", source_address),
            BridgeEvent::TransferOut {
                recipient,
                transaction_id,
                nonce,
                token,
                amount,
            } => Event::new(TRANSFER_OUT)
                .add_attribute("recipient", recipient)
                .add_attribute("transaction_id", transaction_id.to_string())
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("token", token)
                .add_attribute("amount", amount),
            BridgeEvent::WithdrawCommission { token, amount } => Event::new(WITHDRAW_COMMISSION)
                .add_attribute("token", token)
                .add_attribute("amount", amount),
        }
    }
}

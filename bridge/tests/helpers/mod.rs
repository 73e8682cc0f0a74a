//! Shared cw-multi-test setup for the bridge integration tests.

#![allow(dead_code)]

use cosmwasm_std::{to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use anyhow::Result as AnyResult;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use custody_bridge::msg::{ExecuteMsg, InstantiateMsg, PoolResponse, QueryMsg, ReceiveMsg};
use custody_bridge::ContractError;
use custody_common::{BridgeInAuthorization, TransferOutAuthorization};

// ============================================================================
// Accounts & Keys
// ============================================================================

pub const OWNER: &str = "terra1owner";
pub const USER: &str = "terra1user";
pub const RECIPIENT: &str = "terra1recipient";
pub const RELAYER: &str = "terra1relayer";
pub const STRANGER: &str = "terra1stranger";

/// Hardhat account #0
pub const SIGNER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const SIGNER_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Hardhat account #1, never trusted by the bridge
pub const OTHER_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const USER_BALANCE: u128 = 10_000_000;

pub const DESTINATION_CHAIN: &str = "Solana";
pub const DESTINATION_ADDRESS: &str = "4zXwdbUDWo1S5AP2CEfv4zAPRds5PQUG1dyqLLvib2xu";
pub const TRANSACTION_ID: u64 = 1011;

// ============================================================================
// Contracts
// ============================================================================

pub fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        custody_bridge::contract::execute,
        custody_bridge::contract::instantiate,
        custody_bridge::contract::query,
    )
    .with_migrate(custody_bridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

// ============================================================================
// Signing
// ============================================================================

/// 65-byte `r || s || v` signature over `digest`, Ethereum style (v = 27/28)
pub fn sign_with(key_hex: &str, digest: &[u8; 32]) -> Binary {
    let key = SigningKey::from_slice(&hex::decode(key_hex).unwrap()).unwrap();
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recovery_id.to_byte() + 27);
    Binary::from(bytes)
}

pub fn sign(digest: &[u8; 32]) -> Binary {
    sign_with(SIGNER_KEY, digest)
}

// ============================================================================
// Suite
// ============================================================================

pub struct Suite {
    pub app: App,
    pub bridge_code_id: u64,
    pub cw20_code_id: u64,
    pub bridge: Addr,
    pub token: Addr,
    pub owner: Addr,
    pub user: Addr,
}

pub fn setup() -> Suite {
    let mut app = App::default();
    let owner = Addr::unchecked(OWNER);
    let user = Addr::unchecked(USER);

    let cw20_code_id = app.store_code(contract_cw20());
    let bridge_code_id = app.store_code(contract_bridge());

    let token = instantiate_token(&mut app, cw20_code_id, "TST");
    let bridge = instantiate_bridge(&mut app, bridge_code_id, None);

    Suite {
        app,
        bridge_code_id,
        cw20_code_id,
        bridge,
        token,
        owner,
        user,
    }
}

pub fn instantiate_token(app: &mut App, code_id: u64, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &cw20_base::msg::InstantiateMsg {
            name: format!("{symbol} Token"),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: vec![Cw20Coin {
                address: USER.to_string(),
                amount: Uint128::new(USER_BALANCE),
            }],
            mint: None,
            marketing: None,
        },
        &[],
        "cw20-test",
        None,
    )
    .unwrap()
}

pub fn instantiate_bridge(
    app: &mut App,
    code_id: u64,
    stable_commission_percent: Option<u64>,
) -> Addr {
    app.instantiate_contract(
        code_id,
        Addr::unchecked(OWNER),
        &InstantiateMsg {
            owner: Some(OWNER.to_string()),
            signer: SIGNER_ADDRESS.to_string(),
            stable_commission_percent,
        },
        &[],
        "custody-bridge",
        Some(OWNER.to_string()),
    )
    .unwrap()
}

impl Suite {
    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn deadline(&self) -> u64 {
        self.now() + 3_600
    }

    pub fn chain_id(&self) -> String {
        self.app.block_info().chain_id
    }

    /// Authorization for `USER` depositing `amount` of the default token
    pub fn bridge_in_auth(
        &self,
        amount: u128,
        gas_commission: u128,
        nonce: u64,
    ) -> BridgeInAuthorization {
        BridgeInAuthorization {
            user: USER.to_string(),
            bridge: self.bridge.to_string(),
            chain_id: self.chain_id(),
            token: self.token.to_string(),
            amount: Uint128::new(amount),
            gas_commission: Uint128::new(gas_commission),
            destination_chain: DESTINATION_CHAIN.to_string(),
            destination_address: DESTINATION_ADDRESS.to_string(),
            deadline: self.deadline(),
            nonce,
            transaction_id: TRANSACTION_ID,
        }
    }

    /// Authorization releasing `amount` of the default token to `RECIPIENT`
    pub fn transfer_out_auth(
        &self,
        amount: u128,
        total_commission: u128,
        nonce: u64,
    ) -> TransferOutAuthorization {
        TransferOutAuthorization {
            bridge: self.bridge.to_string(),
            chain_id: self.chain_id(),
            token: self.token.to_string(),
            recipient: RECIPIENT.to_string(),
            amount: Uint128::new(amount),
            total_commission: Uint128::new(total_commission),
            deadline: self.deadline(),
            nonce,
            transaction_id: TRANSACTION_ID,
        }
    }

    /// Grant the bridge an allowance on `token` from `USER`
    pub fn approve(&mut self, token: &Addr, amount: u128) {
        self.app
            .execute_contract(
                self.user.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: self.bridge.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    /// Submit `auth` through `ExecuteMsg::BridgeIn`, sent by `auth.user`
    pub fn bridge_in(
        &mut self,
        auth: &BridgeInAuthorization,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(&auth.user),
            self.bridge.clone(),
            &ExecuteMsg::BridgeIn {
                token: auth.token.clone(),
                amount: auth.amount,
                gas_commission: auth.gas_commission,
                destination_chain: auth.destination_chain.clone(),
                destination_address: auth.destination_address.clone(),
                deadline: auth.deadline,
                nonce: auth.nonce,
                transaction_id: auth.transaction_id,
                signature,
            },
            &[],
        )
    }

    /// Submit `auth` through a CW20 `Send` from `auth.user`
    pub fn send_bridge_in(
        &mut self,
        auth: &BridgeInAuthorization,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        let hook = ReceiveMsg::BridgeIn {
            gas_commission: auth.gas_commission,
            destination_chain: auth.destination_chain.clone(),
            destination_address: auth.destination_address.clone(),
            deadline: auth.deadline,
            nonce: auth.nonce,
            transaction_id: auth.transaction_id,
            signature,
        };
        self.app.execute_contract(
            Addr::unchecked(&auth.user),
            Addr::unchecked(&auth.token),
            &Cw20ExecuteMsg::Send {
                contract: self.bridge.to_string(),
                amount: auth.amount,
                msg: to_json_binary(&hook).unwrap(),
            },
            &[],
        )
    }

    /// Approve and deposit with a valid signature
    pub fn deposit(&mut self, amount: u128, gas_commission: u128, nonce: u64) -> AppResponse {
        let token = self.token.clone();
        self.approve(&token, amount);
        let auth = self.bridge_in_auth(amount, gas_commission, nonce);
        let signature = sign(&auth.signed_digest());
        self.bridge_in(&auth, signature).unwrap()
    }

    /// Submit `auth` through `ExecuteMsg::TransferOut`, relayed by `RELAYER`
    pub fn transfer_out(
        &mut self,
        auth: &TransferOutAuthorization,
        signature: Binary,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked(RELAYER),
            self.bridge.clone(),
            &ExecuteMsg::TransferOut {
                token: auth.token.clone(),
                recipient: auth.recipient.clone(),
                amount: auth.amount,
                total_commission: auth.total_commission,
                deadline: auth.deadline,
                nonce: auth.nonce,
                transaction_id: auth.transaction_id,
                signature,
            },
            &[],
        )
    }

    pub fn execute(&mut self, sender: &str, msg: &ExecuteMsg) -> AnyResult<AppResponse> {
        self.app
            .execute_contract(Addr::unchecked(sender), self.bridge.clone(), msg, &[])
    }

    pub fn pool(&self) -> PoolResponse {
        self.pool_of(&self.token)
    }

    pub fn pool_of(&self, token: &Addr) -> PoolResponse {
        self.app
            .wrap()
            .query_wasm_smart(
                &self.bridge,
                &QueryMsg::Pool {
                    token: token.to_string(),
                },
            )
            .unwrap()
    }

    pub fn balance(&self, address: &str) -> Uint128 {
        self.balance_of(&self.token, address)
    }

    pub fn balance_of(&self, token: &Addr, address: &str) -> Uint128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token,
                &Cw20QueryMsg::Balance {
                    address: address.to_string(),
                },
            )
            .unwrap();
        res.balance
    }

    pub fn nonce_used(&self, nonce: u64) -> bool {
        let res: custody_bridge::msg::NonceUsedResponse = self
            .app
            .wrap()
            .query_wasm_smart(&self.bridge, &QueryMsg::NonceUsed { nonce })
            .unwrap();
        res.used
    }
}

// ============================================================================
// Assertions
// ============================================================================

/// Assert that `res` failed with exactly `expected`
pub fn assert_error(res: AnyResult<AppResponse>, expected: ContractError) {
    let err = res.expect_err("expected the call to fail");
    assert_eq!(
        err.root_cause().to_string(),
        expected.to_string(),
        "unexpected error: {err:?}"
    );
}

/// Attribute `key` of the custom event `ty` (emitted as `wasm-<ty>`)
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    let ty = format!("wasm-{ty}");
    res.events
        .iter()
        .filter(|e| e.ty == ty)
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn event_count(res: &AppResponse, ty: &str) -> usize {
    let ty = format!("wasm-{ty}");
    res.events.iter().filter(|e| e.ty == ty).count()
}

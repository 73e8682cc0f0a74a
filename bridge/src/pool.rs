//! Pool Accountant
//!
//! Per-token custody balances. `total_held` is everything the bridge holds for
//! a token, `commission_reserved` is the part of it owed to the owner, and only
//! the difference may leave through `BridgeOut` / `TransferOut`.
//!
//! Every mutation re-checks `commission_reserved <= total_held`.

use cosmwasm_std::{Addr, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{TokenPool, POOLS};

impl TokenPool {
    /// Amount releasable to users
    pub fn bridgeable(&self) -> Uint128 {
        self.total_held.saturating_sub(self.commission_reserved)
    }

    /// Record an incoming deposit of `amount`, of which `commission` is fees
    pub fn deposit(&mut self, amount: Uint128, commission: Uint128) -> Result<(), ContractError> {
        if commission > amount {
            return Err(ContractError::CommissionGreaterThanAmount { commission, amount });
        }
        self.total_held = self.total_held.checked_add(amount)?;
        self.commission_reserved = self.commission_reserved.checked_add(commission)?;
        self.check_invariant()
    }

    /// Release `amount` from the bridgeable part of the pool
    pub fn release(&mut self, amount: Uint128) -> Result<(), ContractError> {
        let available = self.bridgeable();
        if amount > available {
            return Err(ContractError::AmountExceedBridgePool {
                requested: amount,
                available,
            });
        }
        self.total_held = self.total_held.checked_sub(amount)?;
        self.check_invariant()
    }

    /// Pay out `amount` of accrued commission
    pub fn withdraw_commission(&mut self, amount: Uint128) -> Result<(), ContractError> {
        if amount > self.commission_reserved {
            return Err(ContractError::AmountExceedCommissionPool {
                requested: amount,
                available: self.commission_reserved,
            });
        }
        self.commission_reserved = self.commission_reserved.checked_sub(amount)?;
        self.total_held = self.total_held.checked_sub(amount)?;
        self.check_invariant()
    }

    pub fn check_invariant(&self) -> Result<(), ContractError> {
        if self.commission_reserved > self.total_held {
            return Err(ContractError::PoolInvariantViolated {
                total_held: self.total_held,
                commission_reserved: self.commission_reserved,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Storage Helpers
// ============================================================================

/// Load a token's pool; unknown tokens read as an empty pool
pub fn load_pool(storage: &dyn Storage, token: &Addr) -> Result<TokenPool, ContractError> {
    Ok(POOLS.may_load(storage, token)?.unwrap_or_default())
}

pub fn save_pool(
    storage: &mut dyn Storage,
    token: &Addr,
    pool: &TokenPool,
) -> Result<(), ContractError> {
    pool.check_invariant()?;
    POOLS.save(storage, token, pool)?;
    Ok(())
}

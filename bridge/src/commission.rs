//! Commission Policy
//!
//! Commission charged on a deposit is a stable percentage of the amount plus a
//! fixed add-on supplied with the (signed) request:
//!
//! ```text
//! commission = floor(amount * stable_percent / 10000) + fixed_commission
//! ```
//!
//! | Parameter            | Default        | Bound                     |
//! |----------------------|----------------|---------------------------|
//! | Stable percent       | 4% (400 bps)   | at most 90% (9000 bps)    |
//! | Fixed commission     | per request    | commission ≤ amount       |

use cosmwasm_std::{OverflowError, Uint128};

use crate::error::ContractError;
use crate::state::{HUNDRED_PERCENT, MAX_STABLE_COMMISSION_PERCENT};

// ============================================================================
// Calculation
// ============================================================================

/// Raw commission for `amount`, without comparing it to `amount`
pub fn compute_total_commission(
    amount: Uint128,
    fixed_commission: Uint128,
    stable_percent: u64,
) -> Result<Uint128, OverflowError> {
    amount
        .multiply_ratio(stable_percent, HUNDRED_PERCENT)
        .checked_add(fixed_commission)
}

/// Commission for a deposit of `amount`
///
/// Fails with `CommissionGreaterThanAmount` when the commission would consume
/// more than the deposit itself.
pub fn total_commission(
    amount: Uint128,
    fixed_commission: Uint128,
    stable_percent: u64,
) -> Result<Uint128, ContractError> {
    let commission = compute_total_commission(amount, fixed_commission, stable_percent)?;
    if commission > amount {
        return Err(ContractError::CommissionGreaterThanAmount { commission, amount });
    }
    Ok(commission)
}

/// Validate a stable percentage against the configured ceiling
pub fn validate_stable_commission_percent(percent: u64) -> Result<(), ContractError> {
    if percent > MAX_STABLE_COMMISSION_PERCENT {
        return Err(ContractError::InvalidStableCommissionPercent {
            percent,
            max: MAX_STABLE_COMMISSION_PERCENT,
        });
    }
    Ok(())
}

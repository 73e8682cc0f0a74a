//! Nonce Ledger
//!
//! A nonce moves from unused to consumed exactly once. BridgeIn and
//! TransferOut draw from the same nonce space.

use cosmwasm_std::Storage;

use crate::error::ContractError;
use crate::state::USED_NONCES;

pub fn is_consumed(storage: &dyn Storage, nonce: u64) -> Result<bool, ContractError> {
    Ok(USED_NONCES.may_load(storage, nonce)?.unwrap_or(false))
}

/// Mark `nonce` consumed, failing if it already was
pub fn consume(storage: &mut dyn Storage, nonce: u64) -> Result<(), ContractError> {
    if is_consumed(storage, nonce)? {
        return Err(ContractError::AlreadyUsedSignature { nonce });
    }
    USED_NONCES.save(storage, nonce, &true)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;

    #[test]
    fn test_consume_once() {
        let mut deps = mock_dependencies();

        assert!(!is_consumed(&deps.storage, 7).unwrap());
        consume(deps.as_mut().storage, 7).unwrap();
        assert!(is_consumed(&deps.storage, 7).unwrap());

        assert_eq!(
            consume(deps.as_mut().storage, 7).unwrap_err(),
            ContractError::AlreadyUsedSignature { nonce: 7 }
        );

        // Other nonces are independent
        assert!(!is_consumed(&deps.storage, 8).unwrap());
        consume(deps.as_mut().storage, 8).unwrap();
    }

    #[test]
    fn test_extreme_nonces() {
        let mut deps = mock_dependencies();
        consume(deps.as_mut().storage, 0).unwrap();
        consume(deps.as_mut().storage, u64::MAX).unwrap();
        assert!(is_consumed(&deps.storage, 0).unwrap());
        assert!(is_consumed(&deps.storage, u64::MAX).unwrap());
    }
}

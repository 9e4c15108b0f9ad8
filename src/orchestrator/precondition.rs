//! Balance precondition for value-bearing steps.

use alloy::primitives::{Address, U256};

use crate::blockchain::ChainAccess;
use crate::orchestrator::types::StageError;

/// Verify the account holds at least `required` wei before a step.
///
/// A single read-then-compare: the balance can still change between this
/// check and the subsequent submission. That race is inherent to the flow
/// and is accepted rather than closed with a confirmatory re-read.
pub async fn ensure_sufficient_balance<C>(
    chain: &C,
    address: Address,
    required: U256,
) -> Result<U256, StageError>
where
    C: ChainAccess + Sync + ?Sized,
{
    let available = chain
        .balance_of(address)
        .await
        .map_err(|e| StageError::BalanceQuery(e.to_string()))?;

    if available < required {
        return Err(StageError::InsufficientBalance {
            available,
            required,
        });
    }

    Ok(available)
}

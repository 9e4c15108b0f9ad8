//! A single named on-chain operation.

use alloy::primitives::{Address, Bytes, TxHash, U256};

use crate::blockchain::ChainAccess;
use crate::orchestrator::types::{StageError, StepKind};

/// Immutable descriptor of one on-chain action, built ahead of submission.
#[derive(Debug, Clone)]
pub struct OperationStep {
    pub kind: StepKind,
    /// Target contract address.
    pub to: Address,
    /// Native value sent with the call, in wei.
    pub value: U256,
    /// Encoded call payload.
    pub calldata: Bytes,
}

impl OperationStep {
    pub fn new(kind: StepKind, to: Address, value: U256, calldata: Bytes) -> Self {
        Self {
            kind,
            to,
            value,
            calldata,
        }
    }

    /// Submit the step. Exactly one submission attempt, no internal retry.
    pub async fn execute<C>(&self, chain: &C) -> Result<TxHash, StageError>
    where
        C: ChainAccess + Sync + ?Sized,
    {
        match chain
            .send_transaction(self.to, self.calldata.clone(), self.value)
            .await
        {
            Ok(hash) => {
                tracing::info!(step = self.kind.name(), tx_hash = %hash, "Transaction sent");
                Ok(hash)
            }
            Err(e) => Err(StageError::Submission(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::testkit::MockChain;

    #[tokio::test]
    async fn test_execute_records_one_submission() {
        let chain = MockChain::with_balance(U256::ZERO);
        let step = OperationStep::new(
            StepKind::Deposit,
            Address::ZERO,
            U256::from(42u64),
            Bytes::from_static(&[0xd0, 0xe3, 0x0d, 0xb0]),
        );

        let hash = step.execute(&chain).await.unwrap();
        assert!(!hash.is_zero());

        let submissions = chain.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].value, U256::from(42u64));
        assert_eq!(submissions[0].calldata.as_ref(), [0xd0, 0xe3, 0x0d, 0xb0]);
    }

    #[tokio::test]
    async fn test_execute_maps_chain_error_to_submission() {
        let chain = MockChain::with_balance(U256::ZERO).fail_submissions();
        let step = OperationStep::new(
            StepKind::SwapWeth,
            Address::ZERO,
            U256::ONE,
            Bytes::new(),
        );

        let err = step.execute(&chain).await.unwrap_err();
        assert!(matches!(err, StageError::Submission(_)));
        // The attempt itself still counts as one submission call.
        assert_eq!(chain.submission_count(), 1);
    }
}

//! Shared utilities for integration testing.

use std::sync::{Arc, Mutex};

use alloy::primitives::{Address, Bytes, TxHash, B256, U256};
use async_trait::async_trait;

use hemi_runner::blockchain::{ChainAccess, ChainError, ChainResult};

/// One recorded submission attempt.
#[derive(Debug, Clone)]
pub struct Submission {
    pub to: Address,
    pub value: U256,
    pub calldata: Bytes,
}

/// Programmable in-memory chain. Clones share the submission log, so the
/// per-account client factory can hand out clones while the test observes
/// every submission of the whole batch.
#[derive(Clone, Default)]
pub struct MockChain {
    balance: U256,
    fail_submissions: bool,
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MockChain {
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }

    #[allow(dead_code)]
    pub fn fail_submissions(mut self) -> Self {
        self.fail_submissions = true;
        self
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }
}

#[async_trait]
impl ChainAccess for MockChain {
    async fn balance_of(&self, _address: Address) -> ChainResult<U256> {
        Ok(self.balance)
    }

    async fn send_transaction(
        &self,
        to: Address,
        calldata: Bytes,
        value: U256,
    ) -> ChainResult<TxHash> {
        let count = {
            let mut submissions = self.submissions.lock().unwrap();
            submissions.push(Submission {
                to,
                value,
                calldata,
            });
            submissions.len() as u64
        };
        if self.fail_submissions {
            return Err(ChainError::Rpc("execution reverted".to_string()));
        }
        Ok(B256::from(U256::from(0xabc0_0000_u64 + count)))
    }
}

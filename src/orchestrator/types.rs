//! Orchestration types and error definitions.

use alloy::primitives::{Address, TxHash, U256};
use thiserror::Error;

/// Progress of one account through the fixed operation sequence.
///
/// `Aborted` is reachable from every state. The deposit states are
/// account-fatal on failure; the swap states are stage-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    KeyDerived,
    DepositChecked,
    DepositSubmitted,
    SwapWethChecked,
    SwapWethSubmitted,
    SwapDaiChecked,
    SwapDaiSubmitted,
    Done,
    Aborted,
}

/// The three operation steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Deposit,
    SwapWeth,
    SwapDai,
}

impl StepKind {
    /// Step name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::Deposit => "deposit",
            StepKind::SwapWeth => "swap-weth",
            StepKind::SwapDai => "swap-dai",
        }
    }
}

/// Errors that abort a stage or a whole account.
///
/// None of these are retried: a transient network failure is
/// indistinguishable from a permanent one and is treated identically.
#[derive(Debug, Clone, Error)]
pub enum StageError {
    /// Malformed private key; account-fatal.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// Required amount exceeds the queried balance; stage-fatal.
    #[error("insufficient balance: available {available} wei, required {required} wei")]
    InsufficientBalance { available: U256, required: U256 },

    /// The precondition balance read itself failed; stage-fatal.
    #[error("balance query failed: {0}")]
    BalanceQuery(String),

    /// Transport failure or on-chain revert during submission; stage-fatal.
    #[error("transaction submission failed: {0}")]
    Submission(String),
}

/// Result of one operation step within an account's report.
#[derive(Debug, Clone)]
pub enum StepOutcome {
    /// The step was never reached.
    NotAttempted,
    /// The step's transaction was submitted.
    Submitted(TxHash),
    /// The step failed before or during submission.
    Failed(StageError),
}

impl StepOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, StepOutcome::Submitted(_))
    }

    /// Transaction hash, when the step was submitted.
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            StepOutcome::Submitted(hash) => Some(*hash),
            _ => None,
        }
    }
}

/// Everything observed while processing one account.
#[derive(Debug, Clone)]
pub struct AccountReport {
    /// Position in the credential source.
    pub index: usize,
    /// Derived address; `None` when derivation failed.
    pub address: Option<Address>,
    /// Terminal state reached.
    pub stage: Stage,
    pub deposit: StepOutcome,
    pub swap_weth: StepOutcome,
    pub swap_dai: StepOutcome,
    /// The error that drove the account into `Aborted`, if any.
    pub abort_reason: Option<StageError>,
}

impl AccountReport {
    /// Report for an account whose identity was derived.
    pub fn started(index: usize, address: Address) -> Self {
        Self {
            index,
            address: Some(address),
            stage: Stage::KeyDerived,
            deposit: StepOutcome::NotAttempted,
            swap_weth: StepOutcome::NotAttempted,
            swap_dai: StepOutcome::NotAttempted,
            abort_reason: None,
        }
    }

    /// Report for a credential that failed derivation at `Start`.
    pub fn invalid_credential(index: usize, error: StageError) -> Self {
        Self {
            index,
            address: None,
            stage: Stage::Aborted,
            deposit: StepOutcome::NotAttempted,
            swap_weth: StepOutcome::NotAttempted,
            swap_dai: StepOutcome::NotAttempted,
            abort_reason: Some(error),
        }
    }

    pub fn completed(&self) -> bool {
        self.stage == Stage::Done
    }
}

/// Aggregate of one batch run, one report per credential in source order.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub reports: Vec<AccountReport>,
}

impl BatchOutcome {
    pub fn completed_accounts(&self) -> usize {
        self.reports.iter().filter(|r| r.completed()).count()
    }

    pub fn aborted_accounts(&self) -> usize {
        self.reports.len() - self.completed_accounts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;

    #[test]
    fn test_step_outcome_accessors() {
        let hash = B256::from(U256::from(7u64));
        let outcome = StepOutcome::Submitted(hash);
        assert!(outcome.is_submitted());
        assert_eq!(outcome.tx_hash(), Some(hash));

        assert!(!StepOutcome::NotAttempted.is_submitted());
        assert_eq!(StepOutcome::NotAttempted.tx_hash(), None);
    }

    #[test]
    fn test_batch_outcome_counts() {
        let mut outcome = BatchOutcome::default();
        let mut done = AccountReport::started(0, Address::ZERO);
        done.stage = Stage::Done;
        outcome.reports.push(done);
        outcome.reports.push(AccountReport::invalid_credential(
            1,
            StageError::InvalidCredential("bad".to_string()),
        ));

        assert_eq!(outcome.completed_accounts(), 1);
        assert_eq!(outcome.aborted_accounts(), 1);
    }

    #[test]
    fn test_stage_error_display() {
        let err = StageError::InsufficientBalance {
            available: U256::ZERO,
            required: U256::from(100u64),
        };
        let message = err.to_string();
        assert!(message.contains("available 0"));
        assert!(message.contains("required 100"));
    }
}

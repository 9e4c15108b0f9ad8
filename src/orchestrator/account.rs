//! Per-account orchestration.
//!
//! # State machine
//! ```text
//! Start → KeyDerived → DepositChecked → DepositSubmitted
//!       → SwapWethChecked → SwapWethSubmitted
//!       → SwapDaiChecked → SwapDaiSubmitted → Done
//! ```
//! `Aborted` is reachable from every state. The asymmetry is deliberate and
//! mirrors the production flow: a deposit failure abandons the whole account,
//! while a failure inside the swap stage abandons the remaining swap but
//! leaves the deposit standing. Both swaps share one stage, so a WETH
//! failure means the DAI swap is not attempted.

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;
use tokio::time::sleep;

use crate::blockchain::{ChainAccess, Wallet};
use crate::contracts;
use crate::orchestrator::precondition::ensure_sufficient_balance;
use crate::orchestrator::step::OperationStep;
use crate::orchestrator::types::{AccountReport, Stage, StageError, StepKind, StepOutcome};
use crate::orchestrator::RunPlan;

/// Drives one account through the deposit and swap stages.
pub struct AccountOrchestrator<'a> {
    plan: &'a RunPlan,
    index: usize,
    wallet: Wallet,
}

impl<'a> AccountOrchestrator<'a> {
    /// Normalize and derive the account identity (`Start → KeyDerived`).
    pub fn derive(plan: &'a RunPlan, index: usize, raw_key: &str) -> Result<Self, StageError> {
        let wallet = Wallet::from_raw_key(raw_key)
            .map_err(|e| StageError::InvalidCredential(e.to_string()))?;
        Ok(Self {
            plan,
            index,
            wallet,
        })
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn signer(&self) -> &PrivateKeySigner {
        self.wallet.signer()
    }

    /// Run the account to completion or abortion. Never returns an error:
    /// every failure lands in the report and the batch moves on.
    pub async fn run<S, D>(&self, source: &S, destination: &D) -> AccountReport
    where
        S: ChainAccess + Sync,
        D: ChainAccess + Sync,
    {
        let mut report = AccountReport::started(self.index, self.wallet.address());
        tracing::info!(index = self.index, address = %self.wallet.address(), "Processing account");

        if let Err(err) = self.deposit(source, &mut report).await {
            tracing::error!(
                index = self.index,
                address = %self.wallet.address(),
                error = %err,
                "Deposit failed, account skipped"
            );
            report.stage = Stage::Aborted;
            report.abort_reason = Some(err);
            return report;
        }

        sleep(self.plan.step_delay).await;

        if let Err(err) = self.swaps(destination, &mut report).await {
            tracing::error!(
                index = self.index,
                address = %self.wallet.address(),
                error = %err,
                "Swap stage failed"
            );
            report.stage = Stage::Aborted;
            report.abort_reason = Some(err);
            return report;
        }

        report.stage = Stage::Done;
        tracing::info!(index = self.index, address = %self.wallet.address(), "Account completed");
        report
    }

    /// Deposit stage on the source chain. Account-fatal on failure.
    async fn deposit<S>(&self, chain: &S, report: &mut AccountReport) -> Result<(), StageError>
    where
        S: ChainAccess + Sync,
    {
        let address = self.wallet.address();

        if let Err(err) =
            ensure_sufficient_balance(chain, address, self.plan.deposit_amount).await
        {
            report.deposit = StepOutcome::Failed(err.clone());
            return Err(err);
        }
        report.stage = Stage::DepositChecked;

        let step = OperationStep::new(
            StepKind::Deposit,
            self.plan.bridge_contract,
            self.plan.deposit_amount,
            contracts::deposit_eth(self.plan.min_gas_limit, self.plan.extra_data.clone()),
        );
        match step.execute(chain).await {
            Ok(hash) => {
                report.deposit = StepOutcome::Submitted(hash);
                report.stage = Stage::DepositSubmitted;
                Ok(())
            }
            Err(err) => {
                report.deposit = StepOutcome::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Swap stage on the destination chain. The first failure abandons the
    /// rest of the stage.
    async fn swaps<D>(&self, chain: &D, report: &mut AccountReport) -> Result<(), StageError>
    where
        D: ChainAccess + Sync,
    {
        let address = self.wallet.address();

        if let Err(err) = ensure_sufficient_balance(chain, address, self.plan.swap_amount).await {
            report.swap_weth = StepOutcome::Failed(err.clone());
            return Err(err);
        }
        report.stage = Stage::SwapWethChecked;

        let wrap = OperationStep::new(
            StepKind::SwapWeth,
            self.plan.weth_contract,
            self.plan.swap_amount,
            contracts::weth_deposit(),
        );
        match wrap.execute(chain).await {
            Ok(hash) => {
                report.swap_weth = StepOutcome::Submitted(hash);
                report.stage = Stage::SwapWethSubmitted;
            }
            Err(err) => {
                report.swap_weth = StepOutcome::Failed(err.clone());
                return Err(err);
            }
        }

        sleep(self.plan.step_delay).await;

        if let Err(err) = ensure_sufficient_balance(chain, address, self.plan.swap_amount).await {
            report.swap_dai = StepOutcome::Failed(err.clone());
            return Err(err);
        }
        report.stage = Stage::SwapDaiChecked;

        let deadline = contracts::swap_deadline(self.plan.swap_deadline);
        let swap = OperationStep::new(
            StepKind::SwapDai,
            self.plan.router_contract,
            self.plan.swap_amount,
            contracts::router_swap(deadline),
        );
        match swap.execute(chain).await {
            Ok(hash) => {
                report.swap_dai = StepOutcome::Submitted(hash);
                report.stage = Stage::SwapDaiSubmitted;
                Ok(())
            }
            Err(err) => {
                report.swap_dai = StepOutcome::Failed(err.clone());
                Err(err)
            }
        }
    }
}

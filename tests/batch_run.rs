//! End-to-end batch scenarios against a mock chain.

use std::time::Duration;

use alloy::primitives::U256;

use hemi_runner::accounts::AccountRecord;
use hemi_runner::orchestrator::{run_batch, RunPlan, Stage, StageError, StepOutcome};
use hemi_runner::RunnerConfig;

mod common;
use common::MockChain;

// Anvil's first two well-known accounts.
const KEY_ONE: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const KEY_TWO: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

fn record(private_key: &str) -> AccountRecord {
    AccountRecord {
        private_key: private_key.to_string(),
        address: String::new(),
        public_key: String::new(),
    }
}

fn instant_plan() -> RunPlan {
    let mut plan = RunPlan::from_config(&RunnerConfig::default()).unwrap();
    plan.step_delay = Duration::ZERO;
    plan
}

fn one_ether() -> U256 {
    U256::from(10_u64).pow(U256::from(18_u64))
}

#[tokio::test]
async fn test_malformed_credential_is_skipped_and_batch_completes() {
    let plan = instant_plan();
    let records = vec![record(KEY_ONE), record("garbled-key"), record(KEY_TWO)];

    let source = MockChain::with_balance(one_ether());
    let destination = MockChain::with_balance(one_ether());

    let outcome = run_batch(&plan, &records, |_signer| {
        (source.clone(), destination.clone())
    })
    .await;

    assert_eq!(outcome.reports.len(), 3);
    assert_eq!(outcome.completed_accounts(), 2);
    assert_eq!(outcome.aborted_accounts(), 1);

    // Credential #2 aborted at derivation, no identity, no submissions.
    let skipped = &outcome.reports[1];
    assert_eq!(skipped.stage, Stage::Aborted);
    assert!(skipped.address.is_none());
    assert!(matches!(
        skipped.abort_reason,
        Some(StageError::InvalidCredential(_))
    ));

    // Accounts #1 and #3 each produced three transactions, in order.
    for report in [&outcome.reports[0], &outcome.reports[2]] {
        assert_eq!(report.stage, Stage::Done);
        assert!(report.deposit.is_submitted());
        assert!(report.swap_weth.is_submitted());
        assert!(report.swap_dai.is_submitted());
    }

    let deposits = source.submissions();
    assert_eq!(deposits.len(), 2);
    for deposit in &deposits {
        assert_eq!(deposit.to, plan.bridge_contract);
        assert_eq!(deposit.value, plan.deposit_amount);
        // depositETH(uint32,bytes)
        assert_eq!(&deposit.calldata[..4], [0xb1, 0xa1, 0xa8, 0x82]);
    }

    // Destination order per account: WETH wrap then router swap.
    let swaps = destination.submissions();
    assert_eq!(swaps.len(), 4);
    assert_eq!(swaps[0].to, plan.weth_contract);
    assert_eq!(swaps[1].to, plan.router_contract);
    assert_eq!(swaps[2].to, plan.weth_contract);
    assert_eq!(swaps[3].to, plan.router_contract);
    for swap in &swaps {
        assert_eq!(swap.value, plan.swap_amount);
    }
    // deposit() wrap, then execute(bytes,bytes[],uint256) on the router
    assert_eq!(swaps[0].calldata.as_ref(), [0xd0, 0xe3, 0x0d, 0xb0]);
    assert_eq!(&swaps[1].calldata[..4], [0x35, 0x93, 0x56, 0x4c]);
}

#[tokio::test]
async fn test_zero_balance_blocks_deposit_before_any_submission() {
    let plan = instant_plan();
    let records = vec![record(KEY_ONE)];

    let source = MockChain::with_balance(U256::ZERO);
    let destination = MockChain::with_balance(one_ether());

    let outcome = run_batch(&plan, &records, |_signer| {
        (source.clone(), destination.clone())
    })
    .await;

    assert_eq!(outcome.reports.len(), 1);
    let report = &outcome.reports[0];
    assert_eq!(report.stage, Stage::Aborted);
    match &report.deposit {
        StepOutcome::Failed(StageError::InsufficientBalance {
            available,
            required,
        }) => {
            assert_eq!(*available, U256::ZERO);
            assert_eq!(*required, plan.deposit_amount);
        }
        other => panic!("unexpected deposit outcome: {other:?}"),
    }

    assert_eq!(source.submission_count(), 0);
    assert_eq!(destination.submission_count(), 0);
}

#[tokio::test]
async fn test_destination_reverts_leave_deposits_standing() {
    let plan = instant_plan();
    let records = vec![record(KEY_ONE), record(KEY_TWO)];

    let source = MockChain::with_balance(one_ether());
    let destination = MockChain::with_balance(one_ether()).fail_submissions();

    let outcome = run_batch(&plan, &records, |_signer| {
        (source.clone(), destination.clone())
    })
    .await;

    assert_eq!(outcome.reports.len(), 2);
    for report in &outcome.reports {
        assert_eq!(report.stage, Stage::Aborted);
        assert!(report.deposit.is_submitted());
        assert!(matches!(
            report.swap_weth,
            StepOutcome::Failed(StageError::Submission(_))
        ));
        // The DAI swap is part of the same stage and is never reached.
        assert!(matches!(report.swap_dai, StepOutcome::NotAttempted));
    }

    // Both deposits went out; each account attempted only the WETH wrap.
    assert_eq!(source.submission_count(), 2);
    assert_eq!(destination.submission_count(), 2);
}

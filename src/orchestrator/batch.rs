//! Batch iteration over the account list.
//!
//! # Responsibilities
//! - Process credentials strictly sequentially, in source order
//! - Build a fresh client pair per account
//! - Catch every per-account failure at the batch boundary
//! - Emit the run summary

use alloy::signers::local::PrivateKeySigner;

use crate::accounts::AccountRecord;
use crate::blockchain::{wallet::masked_key, ChainAccess};
use crate::orchestrator::account::AccountOrchestrator;
use crate::orchestrator::types::{AccountReport, BatchOutcome};
use crate::orchestrator::RunPlan;

/// Run every credential through the account orchestrator.
///
/// `make_clients` builds the (source, destination) client pair for one
/// account's signer; endpoints are validated before the batch starts, so
/// construction is infallible. No failure inside an account stops the loop.
pub async fn run_batch<S, D, F>(
    plan: &RunPlan,
    records: &[AccountRecord],
    make_clients: F,
) -> BatchOutcome
where
    S: ChainAccess + Sync,
    D: ChainAccess + Sync,
    F: Fn(&PrivateKeySigner) -> (S, D),
{
    let mut outcome = BatchOutcome::default();
    tracing::info!(accounts = records.len(), "Batch starting");

    for (index, record) in records.iter().enumerate() {
        let orchestrator = match AccountOrchestrator::derive(plan, index, &record.private_key) {
            Ok(orchestrator) => orchestrator,
            Err(err) => {
                tracing::error!(
                    index,
                    key = %masked_key(&record.private_key),
                    error = %err,
                    "Skipping account with invalid credential"
                );
                outcome
                    .reports
                    .push(AccountReport::invalid_credential(index, err));
                continue;
            }
        };

        let (source, destination) = make_clients(orchestrator.signer());
        let report = orchestrator.run(&source, &destination).await;
        outcome.reports.push(report);
    }

    tracing::info!(
        completed = outcome.completed_accounts(),
        aborted = outcome.aborted_accounts(),
        "Batch finished"
    );
    outcome
}

//! Hemi Testnet Batch Runner
//!
//! Reads the generated account list, then drives every account through a
//! bridge deposit on Sepolia and the WETH/DAI swaps on Hemi Sepolia,
//! isolating per-account failures from the batch.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use hemi_runner::accounts::store;
use hemi_runner::blockchain::ChainConnector;
use hemi_runner::config::loader::load_config;
use hemi_runner::config::RunnerConfig;
use hemi_runner::observability::logging::init_logging;
use hemi_runner::orchestrator::{run_batch, RunPlan};

#[derive(Parser)]
#[command(name = "hemi-runner")]
#[command(about = "Batch bridge deposits and swaps for Hemi Sepolia accounts", long_about = None)]
struct Cli {
    /// TOML configuration file. Built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the accounts file from the configuration.
    #[arg(short, long)]
    accounts: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => RunnerConfig::default(),
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    tracing::info!(
        source = %config.source_chain.rpc_url,
        destination = %config.destination_chain.rpc_url,
        "hemi-runner v0.1.0 starting"
    );

    let plan = match RunPlan::from_config(&config) {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let accounts_path = cli
        .accounts
        .unwrap_or_else(|| PathBuf::from(&config.batch.accounts_path));
    let records = match store::load_records(&accounts_path) {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Cannot load account list, nothing to process");
            return ExitCode::FAILURE;
        }
    };

    let source = match ChainConnector::from_endpoint(&config.source_chain) {
        Ok(connector) => connector,
        Err(e) => {
            tracing::error!(error = %e, "Invalid source chain endpoint");
            return ExitCode::FAILURE;
        }
    };
    let destination = match ChainConnector::from_endpoint(&config.destination_chain) {
        Ok(connector) => connector,
        Err(e) => {
            tracing::error!(error = %e, "Invalid destination chain endpoint");
            return ExitCode::FAILURE;
        }
    };

    // Best-effort verification; a mismatch is logged but does not block the
    // run, matching graceful degradation on unreachable endpoints.
    if let Err(e) = source.connect().verify_chain_id().await {
        tracing::warn!(chain = %config.source_chain.name, error = %e, "Chain verification failed");
    }
    if let Err(e) = destination.connect().verify_chain_id().await {
        tracing::warn!(chain = %config.destination_chain.name, error = %e, "Chain verification failed");
    }

    let outcome = run_batch(&plan, &records, |signer| {
        (
            source.connect_with_signer(signer.clone()),
            destination.connect_with_signer(signer.clone()),
        )
    })
    .await;

    // Per-account failures are logged, not surfaced via exit status.
    tracing::info!(
        completed = outcome.completed_accounts(),
        aborted = outcome.aborted_accounts(),
        "Run finished"
    );
    ExitCode::SUCCESS
}

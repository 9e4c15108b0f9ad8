//! Bulk account generator for the batch runner.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use hemi_runner::accounts::{keygen, store};
use hemi_runner::config::schema::ObservabilityConfig;
use hemi_runner::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "wallet-gen")]
#[command(about = "Generate fresh accounts for the batch runner", long_about = None)]
struct Cli {
    /// Number of accounts to generate.
    #[arg(short, long)]
    count: usize,

    /// Output file for the generated records.
    #[arg(short, long, default_value = "accounts.json")]
    out: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.count == 0 {
        eprintln!("--count must be a positive integer");
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_logging(&ObservabilityConfig::default()) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let records = keygen::generate_records(cli.count);
    match store::save_records(&cli.out, &records) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to save account file");
            ExitCode::FAILURE
        }
    }
}

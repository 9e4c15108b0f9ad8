//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Human-readable console output for interactive runs
//! - JSON log files: combined.log (all events) and error.log (errors only)
//!
//! # Design Decisions
//! - Level comes from RUST_LOG when set, from config otherwise
//! - File layers are JSON for machine parsing; the console stays pretty

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::schema::ObservabilityConfig;

/// Initialize the global tracing subscriber.
///
/// Returns an IO error if the log files cannot be created.
pub fn init_logging(config: &ObservabilityConfig) -> std::io::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hemi_runner={}", config.log_level)));

    let console_layer = tracing_subscriber::fmt::layer();

    if !config.log_to_files {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();
        return Ok(());
    }

    let dir = Path::new(&config.log_dir);
    let combined = File::create(dir.join("combined.log"))?;
    let errors = File::create(dir.join("error.log"))?;

    let combined_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(Arc::new(combined));

    let error_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(Arc::new(errors))
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(combined_layer)
        .with(error_layer)
        .init();

    Ok(())
}

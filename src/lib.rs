//! Hemi Testnet Batch Runner Library
//!
//! Generates accounts in bulk and drives each one through a fixed on-chain
//! sequence: a bridge deposit on Sepolia, then a WETH wrap and a DAI swap on
//! Hemi Sepolia. One account's failure never aborts the batch.

pub mod accounts;
pub mod blockchain;
pub mod config;
pub mod contracts;
pub mod observability;
pub mod orchestrator;

pub use blockchain::{ChainAccess, ChainClient, ChainConnector};
pub use config::schema::RunnerConfig;
pub use orchestrator::{BatchOutcome, RunPlan};

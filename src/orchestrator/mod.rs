//! Multi-account transaction orchestration subsystem.
//!
//! # Data Flow
//! ```text
//! accounts::store (ordered credentials)
//!     → batch.rs (sequential iteration, per-account isolation)
//!     → account.rs (state machine: deposit stage, then swap stage)
//!     → precondition.rs (balance gate) + step.rs (single submission)
//!     → blockchain::ChainAccess (RPC boundary)
//! ```
//!
//! # Design Decisions
//! - Per-account errors never cross the batch boundary; they land in the
//!   account's report and the loop continues
//! - Deposit failures are account-fatal; swap failures are stage-fatal
//! - No retry anywhere: one balance read per gate, one submission per step

pub mod account;
pub mod batch;
pub mod precondition;
pub mod step;
pub mod types;

pub use account::AccountOrchestrator;
pub use batch::run_batch;
pub use types::{AccountReport, BatchOutcome, Stage, StageError, StepKind, StepOutcome};

use alloy::hex;
use alloy::primitives::utils::parse_ether;
use alloy::primitives::{Address, Bytes, U256};
use std::time::Duration;

use crate::config::loader::ConfigError;
use crate::config::schema::RunnerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Resolved, immutable parameters for one batch run.
///
/// Built once from the validated configuration; the string-typed addresses
/// and amounts are parsed here so the per-account loop deals only in
/// chain-native types.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub bridge_contract: Address,
    pub deposit_amount: U256,
    pub min_gas_limit: u32,
    pub extra_data: Bytes,
    pub weth_contract: Address,
    pub router_contract: Address,
    pub swap_amount: U256,
    pub swap_deadline: Duration,
    pub step_delay: Duration,
}

impl RunPlan {
    /// Resolve a plan from configuration.
    pub fn from_config(config: &RunnerConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        Ok(Self {
            bridge_contract: parse_address("bridge.contract", &config.bridge.contract)?,
            deposit_amount: parse_amount("bridge.deposit_eth", &config.bridge.deposit_eth)?,
            min_gas_limit: config.bridge.min_gas_limit,
            extra_data: parse_hex("bridge.extra_data", &config.bridge.extra_data)?,
            weth_contract: parse_address("swap.weth_contract", &config.swap.weth_contract)?,
            router_contract: parse_address("swap.router_contract", &config.swap.router_contract)?,
            swap_amount: parse_amount("swap.swap_eth", &config.swap.swap_eth)?,
            swap_deadline: Duration::from_secs(config.swap.deadline_secs),
            step_delay: Duration::from_millis(config.batch.step_delay_ms),
        })
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Address, ConfigError> {
    value.parse().map_err(|_| {
        ConfigError::Validation(vec![ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        }])
    })
}

fn parse_amount(field: &'static str, value: &str) -> Result<U256, ConfigError> {
    parse_ether(value).map_err(|_| {
        ConfigError::Validation(vec![ValidationError::InvalidAmount {
            field,
            value: value.to_string(),
        }])
    })
}

fn parse_hex(field: &'static str, value: &str) -> Result<Bytes, ConfigError> {
    hex::decode(value.trim_start_matches("0x"))
        .map(Bytes::from)
        .map_err(|_| {
            ConfigError::Validation(vec![ValidationError::InvalidHex {
                field,
                value: value.to_string(),
            }])
        })
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_resolves_default_config() {
        let plan = RunPlan::from_config(&RunnerConfig::default()).unwrap();
        assert_eq!(plan.deposit_amount, parse_ether("0.1").unwrap());
        assert_eq!(plan.swap_amount, parse_ether("0.00001").unwrap());
        assert_eq!(plan.min_gas_limit, 200_000);
        assert!(plan.extra_data.is_empty());
        assert_eq!(plan.swap_deadline, Duration::from_secs(20 * 60));
        assert_eq!(plan.step_delay, Duration::from_millis(1_000));
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let mut config = RunnerConfig::default();
        config.swap.router_contract = "0xnope".to_string();
        let result = RunPlan::from_config(&config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}

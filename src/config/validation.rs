//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Contract addresses, amounts, URLs and hex fields must parse
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RunnerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::hex;
use alloy::primitives::utils::parse_ether;
use alloy::primitives::Address;

use crate::config::schema::RunnerConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidAddress { field: &'static str, value: String },
    InvalidAmount { field: &'static str, value: String },
    InvalidUrl { field: &'static str, value: String },
    InvalidHex { field: &'static str, value: String },
    ZeroValue { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "{}: '{}' is not a valid address", field, value)
            }
            ValidationError::InvalidAmount { field, value } => {
                write!(f, "{}: '{}' is not a valid ETH amount", field, value)
            }
            ValidationError::InvalidUrl { field, value } => {
                write!(f, "{}: '{}' is not a valid URL", field, value)
            }
            ValidationError::InvalidHex { field, value } => {
                write!(f, "{}: '{}' is not valid hex data", field, value)
            }
            ValidationError::ZeroValue { field } => {
                write!(f, "{}: must be greater than zero", field)
            }
        }
    }
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &RunnerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_url(&mut errors, "source_chain.rpc_url", &config.source_chain.rpc_url);
    check_url(
        &mut errors,
        "destination_chain.rpc_url",
        &config.destination_chain.rpc_url,
    );

    if config.source_chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "source_chain.rpc_timeout_secs",
        });
    }
    if config.destination_chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "destination_chain.rpc_timeout_secs",
        });
    }

    check_address(&mut errors, "bridge.contract", &config.bridge.contract);
    check_address(&mut errors, "swap.weth_contract", &config.swap.weth_contract);
    check_address(
        &mut errors,
        "swap.router_contract",
        &config.swap.router_contract,
    );

    check_amount(&mut errors, "bridge.deposit_eth", &config.bridge.deposit_eth);
    check_amount(&mut errors, "swap.swap_eth", &config.swap.swap_eth);

    if hex::decode(config.bridge.extra_data.trim_start_matches("0x")).is_err() {
        errors.push(ValidationError::InvalidHex {
            field: "bridge.extra_data",
            value: config.bridge.extra_data.clone(),
        });
    }

    if config.swap.deadline_secs == 0 {
        errors.push(ValidationError::ZeroValue {
            field: "swap.deadline_secs",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn check_amount(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if parse_ether(value).is_err() {
        errors.push(ValidationError::InvalidAmount {
            field,
            value: value.to_string(),
        });
    }
}

fn check_url(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        });
    }
}

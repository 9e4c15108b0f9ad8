//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the runner.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the batch runner.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Chain receiving the bridge deposit transaction.
    pub source_chain: ChainEndpoint,

    /// Chain receiving the swap transactions.
    pub destination_chain: ChainEndpoint,

    /// Bridge deposit parameters.
    pub bridge: BridgeConfig,

    /// Swap parameters.
    pub swap: SwapConfig,

    /// Batch iteration settings.
    pub batch: BatchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            source_chain: ChainEndpoint::sepolia(),
            destination_chain: ChainEndpoint::hemi_sepolia(),
            bridge: BridgeConfig::default(),
            swap: SwapConfig::default(),
            batch: BatchConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One JSON-RPC endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainEndpoint {
    /// Chain identifier for logging/metrics.
    pub name: String,

    /// JSON-RPC URL.
    pub rpc_url: String,

    /// Expected chain ID, verified at startup.
    pub chain_id: u64,

    /// Request timeout in seconds.
    #[serde(default = "default_rpc_timeout")]
    pub rpc_timeout_secs: u64,
}

impl ChainEndpoint {
    /// Sepolia testnet, the deposit side.
    pub fn sepolia() -> Self {
        Self {
            name: "sepolia".to_string(),
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com".to_string(),
            chain_id: 11_155_111,
            rpc_timeout_secs: default_rpc_timeout(),
        }
    }

    /// Hemi Sepolia testnet, the swap side.
    pub fn hemi_sepolia() -> Self {
        Self {
            name: "hemi-sepolia".to_string(),
            rpc_url: "https://testnet.rpc.hemi.network/rpc".to_string(),
            chain_id: 743_111,
            rpc_timeout_secs: default_rpc_timeout(),
        }
    }
}

fn default_rpc_timeout() -> u64 {
    10
}

/// Bridge deposit parameters.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Bridge proxy contract on the source chain.
    pub contract: String,

    /// Native amount deposited through the bridge, in ETH.
    pub deposit_eth: String,

    /// Minimum destination gas limit forwarded with the deposit.
    pub min_gas_limit: u32,

    /// Extra calldata forwarded with the deposit (hex).
    pub extra_data: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            contract: "0xc94b1BEe63A3e101FE5F71C80F912b4F4b055925".to_string(),
            deposit_eth: "0.1".to_string(),
            min_gas_limit: 200_000,
            extra_data: "0x".to_string(),
        }
    }
}

/// Swap parameters for the destination chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SwapConfig {
    /// WETH contract wrapped by the first swap.
    pub weth_contract: String,

    /// Universal Router contract used by the second swap.
    pub router_contract: String,

    /// Native amount sent with each swap, in ETH.
    pub swap_eth: String,

    /// Router deadline window in seconds.
    pub deadline_secs: u64,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            weth_contract: "0x0C8aFD1b58aa2A5bAd2414B861D8A7fF898eDC3A".to_string(),
            router_contract: "0xA18019E62f266C2E17e33398448e4105324e0d0F".to_string(),
            swap_eth: "0.00001".to_string(),
            deadline_secs: 20 * 60,
        }
    }
}

/// Batch iteration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Account file read as the credential source.
    pub accounts_path: String,

    /// Pacing delay between operation steps within one account, in ms.
    pub step_delay_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            accounts_path: "accounts.json".to_string(),
            step_delay_ms: 1_000,
        }
    }
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level when RUST_LOG is not set.
    pub log_level: String,

    /// Directory receiving combined.log and error.log.
    pub log_dir: String,

    /// Whether JSON log files are written in addition to the console.
    pub log_to_files: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: ".".to_string(),
            log_to_files: true,
        }
    }
}

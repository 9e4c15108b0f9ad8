//! Contract interfaces and calldata builders.
//!
//! # Responsibilities
//! - Declare the three contract entry points the runner calls
//! - Encode calldata for each operation step
//! - Carry the fixed Universal Router route (WRAP_ETH then V3_SWAP_EXACT_IN)

use alloy::primitives::{bytes, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

sol! {
    /// Optimism-style bridge entry point on the source chain.
    interface L1Bridge {
        function depositETH(uint32 minGasLimit, bytes extraData) external payable;
    }

    /// Canonical WETH9 wrap entry point on the destination chain.
    interface Weth {
        function deposit() external payable;
    }

    /// Uniswap Universal Router dispatcher on the destination chain.
    interface UniversalRouter {
        function execute(bytes commands, bytes[] inputs, uint256 deadline) external payable;
    }
}

/// Command word: WRAP_ETH (0x0b) then V3_SWAP_EXACT_IN (0x00).
static SWAP_COMMANDS: Bytes = bytes!("0b00");

/// WRAP_ETH input: recipient ADDRESS_THIS (2), wrap amount.
static SWAP_INPUT_WRAP: Bytes = bytes!(
    "000000000000000000000000000000000000000000000000000000000000000200000000000000000000000000000000000000000000000000005af3107a4000"
);

/// V3_SWAP_EXACT_IN input: payer MSG_SENDER (1), amount in, minimum amount
/// out, and the encoded WETH → DAI pool path (0.3% fee tier).
static SWAP_INPUT_SWAP: Bytes = bytes!(
    "000000000000000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000000000000000005af3107a4000000000000000000000000000000000000000000000000000457fd60a0614bb5400000000000000000000000000000000000000000000000000000000000000a00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000002b0c8afd1b58aa2a5bad2414b861d8a7ff898edc3a000bb8ec46e0efb2ea8152da0327a5eb3ff9a43956f13e000000000000000000000000000000000000000000"
);

/// Calldata for the bridge deposit on the source chain.
pub fn deposit_eth(min_gas_limit: u32, extra_data: Bytes) -> Bytes {
    L1Bridge::depositETHCall {
        minGasLimit: min_gas_limit,
        extraData: extra_data,
    }
    .abi_encode()
    .into()
}

/// Calldata for the WETH wrap on the destination chain.
pub fn weth_deposit() -> Bytes {
    Weth::depositCall {}.abi_encode().into()
}

/// Calldata for the fixed WETH → DAI route through the Universal Router.
pub fn router_swap(deadline: U256) -> Bytes {
    UniversalRouter::executeCall {
        commands: SWAP_COMMANDS.clone(),
        inputs: vec![SWAP_INPUT_WRAP.clone(), SWAP_INPUT_SWAP.clone()],
        deadline,
    }
    .abi_encode()
    .into()
}

/// Router deadline: wall-clock now plus the configured validity window.
pub fn swap_deadline(valid_for: Duration) -> U256 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    U256::from(now + valid_for.as_secs())
}

//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Account file (private keys)
//!     → wallet.rs (normalization, identity derivation)
//!     → client.rs (RPC connection with timeouts, balance reads, submission)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or derived secrets
//! - All RPC calls have configurable timeouts
//! - No retry at this layer; callers decide how a failure propagates

pub mod client;
pub mod types;
pub mod wallet;

pub use client::{ChainAccess, ChainClient, ChainConnector};
pub use types::{ChainError, ChainId, ChainResult};
pub use wallet::Wallet;

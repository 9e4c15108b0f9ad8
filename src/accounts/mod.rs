//! Account generation and persistence.
//!
//! # Data Flow
//! ```text
//! wallet-gen binary
//!     → keygen.rs (derive N fresh identities)
//!     → store.rs (persist {privateKey, address, publicKey} records)
//!
//! hemi-runner binary
//!     → store.rs (load the ordered credential list)
//!     → orchestrator (batch processing)
//! ```

pub mod keygen;
pub mod store;

pub use store::{AccountRecord, SourceError};

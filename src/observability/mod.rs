//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → console (pretty, interactive runs)
//!     → combined.log / error.log (JSON, batch audits)
//! ```

pub mod logging;

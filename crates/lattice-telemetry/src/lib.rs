//! # Lattice Telemetry
//!
//! Structured logging for programs built on `lattice-core`.
//!
//! `lattice-core` only emits `tracing` events (domain construction at
//! `debug`, rejected bounds at `warn`, cursor sentinel transitions at
//! `trace`). This crate installs the subscriber that renders them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lattice_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//!
//!     let _span = lattice_telemetry::traversal_span!("assemble_cells", dimension = 2).entered();
//!     // Traversal code here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LATTICE_SERVICE_NAME` | `lattice-kernel` | Service name in logs |
//! | `LATTICE_LOG_LEVEL` | `info` | Log filter (falls back to `RUST_LOG`) |
//! | `LATTICE_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `LATTICE_JSON_LOGS` | `false` | JSON lines instead of pretty output |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, StructuredLogger};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Another global subscriber won the race
    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Initialize structured logging.
///
/// Returns a guard that should be held for the lifetime of the program.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let logger = init_logging(&config)?;
    Ok(TelemetryGuard { logger })
}

/// Guard that keeps telemetry active.
#[derive(Debug)]
pub struct TelemetryGuard {
    logger: StructuredLogger,
}

impl TelemetryGuard {
    /// The installed logger.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.logger.service_name(), "Shutting down telemetry");
    }
}

/// Create an `info` span for a traversal, with caller-supplied context fields.
///
/// # Example
///
/// ```rust,ignore
/// use lattice_telemetry::traversal_span;
///
/// let _span = traversal_span!("sample_field", dimension = 2, points = 121).entered();
/// ```
#[macro_export]
macro_rules! traversal_span {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

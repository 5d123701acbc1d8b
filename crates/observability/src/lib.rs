//! Beacon Observability — tracing setup for the beacon CLI and TUI.
//!
//! # Features
//!
//! - Env-filter based log levels (`BEACON_LOG` / `RUST_LOG`)
//! - Optional console (stderr) output
//! - A sink layer that forwards each formatted log line to a callback, so
//!   the TUI can show runtime logs without corrupting the alternate screen
//!
//! # Quick Start
//!
//! ```no_run
//! use beacon_observability::{ObservabilityConfig, init};
//!
//! let config = ObservabilityConfig::new("beacon").with_log_level("info");
//! init(config).expect("tracing init");
//!
//! // Use tracing as usual
//! tracing::info!("Service started");
//! ```

pub mod config;
pub mod error;
pub mod sink_layer;
pub mod telemetry;

pub use config::{LogSink, ObservabilityConfig};
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env};

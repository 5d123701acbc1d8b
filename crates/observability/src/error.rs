//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// Failed to install the tracing subscriber
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// init() was called more than once in this process
    #[error("Observability already initialized")]
    AlreadyInitialized,
}

//! Tracing subscriber initialization: env filter, optional console output,
//! and the log-line sink layer.

use once_cell::sync::OnceCell;
use tracing_subscriber::{Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::sink_layer;

// Guards against double initialization (set_global_default is process-wide).
static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize tracing with the given configuration.
///
/// Builds the env filter from `config.log_level`, falling back to the
/// `RUST_LOG` environment and then to "info". Console output goes to
/// stderr so it never interleaves with the TUI on stdout; disable it with
/// `enable_console: false` when the sink is the only consumer.
///
/// Returns an error when called twice or when the subscriber cannot be
/// installed.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    if INITIALIZED.set(()).is_err() {
        return Err(ObservabilityError::AlreadyInitialized);
    }

    let env_filter = config
        .log_level
        .as_ref()
        .map(|level| tracing_subscriber::EnvFilter::new(level.as_str()))
        .unwrap_or_else(|| {
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        });

    // Build layers separately, then compose once.
    let fmt_layer = config
        .enable_console
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let sink = sink_layer::sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(service.name = %config.service_name, "tracing initialized");
    Ok(())
}

/// Initialize with configuration from environment variables.
pub fn init_from_env() -> Result<(), ObservabilityError> {
    let config = ObservabilityConfig::from_env();
    init(config)
}

//! Tracing/logging setup shared by binaries.

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber initialization.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() -> Result<(), ConfigError> {
    let config = ObservabilityConfig::from_env()?;
    tracing::init(&config);
    Ok(())
}

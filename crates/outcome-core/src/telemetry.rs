//! Tracing bootstrap for applications embedding the library.
//!
//! Outcome chains and use case calls emit `tracing` events; this module
//! installs a subscriber for binaries that have not set one up themselves.
//! Gated behind the `telemetry` feature.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Error raised by the tracing bootstrap.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed, or layering failed.
    #[error("failed to initialize tracing subscriber: {0}")]
    Init(String),
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name recorded on the initialization event.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Log filter directive; falls back to `RUST_LOG`, then a default.
    #[serde(default)]
    pub log_filter: Option<String>,

    /// Whether to install a console output layer.
    #[serde(default = "default_console_output")]
    pub console_output: bool,

    /// Whether console output is JSON-formatted.
    #[serde(default)]
    pub json_output: bool,
}

fn default_service_name() -> String {
    "outcome".to_string()
}

fn default_console_output() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_filter: None,
            console_output: default_console_output(),
            json_output: false,
        }
    }
}

/// Initialize tracing with the given configuration.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    if !config.console_output {
        return Ok(());
    }

    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,outcome_core=debug")),
    };

    let registry = tracing_subscriber::registry().with(filter);
    let initialized = if config.json_output {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };
    initialized.map_err(|e| TelemetryError::Init(e.to_string()))?;

    tracing::info!(service_name = %config.service_name, "telemetry initialized");

    Ok(())
}

/// Placeholder for when the telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> Result<(), TelemetryError> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.service_name, "outcome");
        assert!(config.log_filter.is_none());
        assert!(config.console_output);
        assert!(!config.json_output);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: TelemetryConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.service_name, "outcome");
        assert!(config.console_output);
    }
}

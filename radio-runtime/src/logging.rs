//! # Logging & Tracing Infrastructure
//!
//! Configures structured logging with the `tracing` crate:
//! - Pretty, compact, and JSON output formats
//! - Module-level filtering through `EnvFilter` directives
//!
//! ## Usage
//!
//! ```ignore
//! use radio_runtime::logging::{init_logging, LogFormat, LoggingConfig};
//!
//! let config = LoggingConfig::default()
//!     .with_format(LogFormat::Compact)
//!     .with_level(tracing::Level::DEBUG);
//!
//! init_logging(config).expect("Failed to initialize logging");
//!
//! tracing::info!("player ready");
//! ```

use crate::error::{Result, RuntimeError};
use tracing::Level;
use tracing_subscriber::filter::EnvFilter;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors
    Pretty,
    /// Compact format for production
    Compact,
    /// Structured JSON format for machine parsing
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Json;
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Minimum log level
    pub level: Level,
    /// Optional `EnvFilter` directive string overriding `level`
    /// (e.g. `"radio_player=debug,warn"`). Falls back to the `RUST_LOG`
    /// environment variable, then to `level`.
    pub env_filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: Level::INFO,
            env_filter: None,
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_env_filter(mut self, directives: impl Into<String>) -> Self {
        self.env_filter = Some(directives.into());
        self
    }

    fn build_filter(&self) -> Result<EnvFilter> {
        if let Some(directives) = &self.env_filter {
            return EnvFilter::try_new(directives)
                .map_err(|e| RuntimeError::Config(format!("Invalid filter directives: {e}")));
        }

        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.to_string())))
    }
}

/// Initialize the global tracing subscriber.
///
/// # Errors
///
/// Returns an error when the filter directives are invalid or a global
/// subscriber is already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let filter = config.build_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| RuntimeError::Config(format!("Failed to install subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(config.env_filter.is_none());
    }

    #[test]
    fn builder_methods_apply() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_level(Level::TRACE)
            .with_env_filter("radio_player=debug");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, Level::TRACE);
        assert_eq!(config.env_filter.as_deref(), Some("radio_player=debug"));
    }

    #[test]
    fn invalid_directives_are_rejected() {
        let config = LoggingConfig::default().with_env_filter("not==valid==");
        assert!(config.build_filter().is_err());
    }

    #[test]
    fn explicit_directives_build() {
        let config = LoggingConfig::default().with_env_filter("warn,radio_player=trace");
        assert!(config.build_filter().is_ok());
    }
}

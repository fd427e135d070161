//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.
//! The `NOTEPAD_LOG` environment variable takes precedence over the
//! configured level and accepts full `EnvFilter` directives.

use std::str::FromStr;
use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "NOTEPAD_LOG";

/// Errors that can occur while setting up logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to initialize logging: {0}")]
    InitializationFailed(String),

    #[error("invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLevel(String),
}

/// Configuration for the logging subsystem.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// The minimum level to display
    pub level: Level,
    /// Whether to include the event target (module path)
    pub with_target: bool,
    /// Whether to emit JSON lines instead of human-readable text
    pub json_format: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_target: false,
            json_format: false,
        }
    }
}

impl LogConfig {
    /// Creates a config with the given level.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Maps a `-v` count to a level: none is warn, then info, debug, trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self::new(level)
    }

    /// Set whether to include target information
    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }

    /// Set whether to use JSON formatting
    pub fn json_format(mut self, enabled: bool) -> Self {
        self.json_format = enabled;
        self
    }
}

/// Parses a level name such as `"debug"`.
pub fn parse_level(s: &str) -> Result<Level, LoggingError> {
    Level::from_str(s.trim()).map_err(|_| LoggingError::InvalidLevel(s.to_string()))
}

/// Installs the global subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target);

    let result = if config.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}

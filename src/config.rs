//! Logging configuration for the native library

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::{Error, Result};

/// Default log level when neither the environment nor the caller sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Logger settings, passed as JSON over the C ABI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Maximum level: off, error, warn, info, debug or trace (default: "info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Print the event target with each line (default: true)
    #[serde(default = "default_true")]
    pub with_target: bool,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            with_target: true,
        }
    }
}

impl LogConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that `level` names a known level.
    pub fn validate(&self) -> Result<()> {
        self.level_filter().map(|_| ())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .trim()
            .parse::<LevelFilter>()
            .map_err(|_| Error::config(format!("unknown log level '{}'", self.level)))
    }

    /// The same level as a `log` filter, for loggers fed through the `log` facade.
    pub fn log_level_filter(&self) -> Result<log::LevelFilter> {
        let filter = match self.level_filter()?.into_level() {
            None => log::LevelFilter::Off,
            Some(Level::ERROR) => log::LevelFilter::Error,
            Some(Level::WARN) => log::LevelFilter::Warn,
            Some(Level::INFO) => log::LevelFilter::Info,
            Some(Level::DEBUG) => log::LevelFilter::Debug,
            Some(_) => log::LevelFilter::Trace,
        };
        Ok(filter)
    }
}

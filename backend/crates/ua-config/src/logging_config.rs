use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Write to `<dir>/<binary>.log` instead of stdout
    pub file: bool,
    /// Ignored when logging to a file
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: false,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.file && (self.dir.trim().is_empty() || self.dir.contains("..")) {
            return Err(ConfigError::logging(format!(
                "logging.dir must be a non-empty relative path without '..', got '{}'",
                self.dir
            )));
        }
        Ok(())
    }
}

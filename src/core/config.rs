//! Logger configuration
//!
//! Construction-time knobs plus the initial runtime settings. Everything has a
//! default, so a JSON document only needs the fields it changes:
//!
//! ```
//! use linelog::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "DEBUG", "batch_size": 32 }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Debug);
//! assert_eq!(config.queue_capacity, 1024);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::normalize::SpacingRules;
use super::overflow_policy::OverflowPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;
pub const DEFAULT_BATCH_SIZE: usize = 16;
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Initial severity threshold
    pub level: LogLevel,
    /// Prefix every line with a UTC timestamp
    pub timestamps: bool,
    /// Entries each destination queue holds before overflow
    pub queue_capacity: usize,
    /// Entries a worker moves out of its queue per pass
    pub batch_size: usize,
    /// Longest time written output may stay unflushed
    pub flush_interval_ms: u64,
    pub overflow_policy: OverflowPolicy,
    /// Write on the calling thread instead of through queues and workers
    pub synchronous: bool,
    pub spacing: SpacingRules,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            timestamps: false,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            batch_size: DEFAULT_BATCH_SIZE,
            flush_interval_ms: DEFAULT_FLUSH_INTERVAL.as_millis() as u64,
            overflow_policy: OverflowPolicy::default(),
            synchronous: false,
            spacing: SpacingRules::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn flush_interval(&self) -> Duration {
        Duration::from_millis(self.flush_interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if self.queue_capacity == 0 {
            return Err(LoggerError::config("queue_capacity", "must be greater than zero"));
        }
        if self.batch_size == 0 {
            return Err(LoggerError::config("batch_size", "must be greater than zero"));
        }
        if self.flush_interval_ms == 0 {
            return Err(LoggerError::config("flush_interval_ms", "must be greater than zero"));
        }
        Ok(())
    }
}

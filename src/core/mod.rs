//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod normalize;
pub mod overflow_policy;
pub mod part;
pub mod queue;
pub mod timestamp;
pub mod worker;

pub use appender::Appender;
pub use config::{LoggerConfig, DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL, DEFAULT_QUEUE_CAPACITY};
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_entry::{Destination, LogEntry};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use normalize::SpacingRules;
pub use overflow_policy::OverflowPolicy;
pub use part::Part;
pub use queue::{BoundedQueue, PushOutcome};
pub use worker::{WorkerOptions, WorkerState};

//! # linelog
//!
//! A thread-safe, non-blocking line logger.
//!
//! ## Features
//!
//! - **Non-blocking**: producers hand rendered lines to a bounded queue; one
//!   background worker per destination writes and flushes them in batches
//! - **Bounded memory**: a full queue evicts its oldest entry instead of
//!   blocking or growing
//! - **Prose-aware formatting**: messages are built from heterogeneous parts
//!   joined with punctuation-sensitive spacing and whitespace normalization
//! - **Two destinations**: `Debug`/`Info`/`Warn` go to the standard sink,
//!   `Error`/`Fatal` to the error sink
//!
//! ```
//! use linelog::prelude::*;
//!
//! let out = MemoryAppender::new();
//! let logger = Logger::with_appenders(out.clone(), MemoryAppender::new()).unwrap();
//!
//! logger.log(LogLevel::Info, &["Hello".into(), "World".into()]);
//! logger.shutdown().unwrap();
//!
//! assert_eq!(out.contents(), "[INFO ] Hello World\n");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
    pub use crate::core::{
        Appender, Destination, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, OverflowPolicy, Part, Result, SpacingRules, WorkerState,
    };
}

pub use appenders::{ConsoleAppender, FileAppender, MemoryAppender, WriterAppender};
pub use core::{
    Appender, BoundedQueue, Destination, Formatter, LogEntry, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, OverflowPolicy, Part, PushOutcome, Result,
    SpacingRules, WorkerOptions, WorkerState, DEFAULT_BATCH_SIZE, DEFAULT_FLUSH_INTERVAL,
    DEFAULT_QUEUE_CAPACITY,
};

//! Process-wide logger instance
//!
//! Nothing is constructed implicitly: call [`init`] once at startup and
//! [`shutdown`] before the process exits so both workers drain.
//!
//! ```
//! use linelog::{global, Logger, LogLevel, MemoryAppender};
//!
//! let out = MemoryAppender::new();
//! global::init(Logger::with_appenders(out.clone(), MemoryAppender::new()).unwrap()).unwrap();
//!
//! global::log(LogLevel::Info, &["started".into()]);
//! global::shutdown().unwrap();
//!
//! assert_eq!(out.contents(), "[INFO ] started\n");
//! ```

use crate::core::{LogLevel, Logger, LoggerError, Part, Result};
use parking_lot::RwLock;
use std::sync::Arc;

static GLOBAL: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);

/// Install `logger` as the process-wide instance.
pub fn init(logger: Logger) -> Result<()> {
    let mut slot = GLOBAL.write();
    if slot.is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }
    *slot = Some(Arc::new(logger));
    Ok(())
}

pub fn is_initialized() -> bool {
    GLOBAL.read().is_some()
}

pub fn get() -> Option<Arc<Logger>> {
    GLOBAL.read().clone()
}

/// Log through the process-wide instance; does nothing before [`init`].
pub fn log(level: LogLevel, parts: &[Part<'_>]) {
    if let Some(logger) = get() {
        logger.log(level, parts);
    }
}

/// Remove the process-wide instance, drain its queues and join its workers.
///
/// Handles obtained earlier through [`get`] stay usable but their workers
/// are stopped, so anything they log afterwards may be lost.
pub fn shutdown() -> Result<()> {
    let logger = GLOBAL.write().take().ok_or(LoggerError::NotInitialized)?;
    logger.shutdown()
}

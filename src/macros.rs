//! Logging macros for ergonomic multi-part messages.
//!
//! Each argument after the level becomes one [`Part`](crate::Part); the
//! threshold is checked before any argument is evaluated, so expensive
//! arguments cost nothing when the level is filtered out.
//!
//! # Examples
//!
//! ```
//! use linelog::prelude::*;
//! use linelog::info;
//!
//! let out = MemoryAppender::new();
//! let logger = Logger::with_appenders(out.clone(), MemoryAppender::new()).unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port", port, ".");
//!
//! logger.shutdown().unwrap();
//! assert_eq!(out.contents(), "[INFO ] Server listening on port 8080.\n");
//! ```

/// Log a multi-part message at an explicit level.
///
/// # Examples
///
/// ```
/// # use linelog::prelude::*;
/// # let logger = Logger::with_appenders(MemoryAppender::new(), MemoryAppender::new()).unwrap();
/// use linelog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code:", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr $(, $part:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.should_log(level) {
            logger.log(level, &[$($crate::Part::from($part)),*]);
        }
    }};
}

/// Log a debug-level message.
///
/// ```
/// # use linelog::prelude::*;
/// # let logger = Logger::with_appenders(MemoryAppender::new(), MemoryAppender::new()).unwrap();
/// use linelog::debug;
/// debug!(logger, "Counter value:", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Debug $(, $part)*)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Info $(, $part)*)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Warn $(, $part)*)
    };
}

/// Log an error-level message.
///
/// ```
/// # use linelog::prelude::*;
/// # let logger = Logger::with_appenders(MemoryAppender::new(), MemoryAppender::new()).unwrap();
/// use linelog::error;
/// error!(logger, "Error code:", 500, ", message:", "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Error $(, $part)*)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr $(, $part:expr)* $(,)?) => {
        $crate::log!($logger, $crate::LogLevel::Fatal $(, $part)*)
    };
}

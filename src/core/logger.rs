//! Main logger implementation

use super::{
    appender::Appender,
    config::LoggerConfig,
    error::Result,
    formatter::Formatter,
    log_entry::{Destination, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    normalize::SpacingRules,
    overflow_policy::OverflowPolicy,
    part::Part,
    queue::BoundedQueue,
    timestamp,
    worker::{self, Worker, WorkerOptions, WorkerState},
};
use crate::appenders::ConsoleAppender;
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Runtime settings read on every call. Never held across formatting or I/O.
#[derive(Debug, Clone, Copy)]
struct Settings {
    threshold: LogLevel,
    timestamps: bool,
}

enum Delivery {
    /// One queue and worker thread per destination.
    Async {
        standard: Worker,
        error: Worker,
        shutdown: Arc<AtomicBool>,
    },
    /// Write on the caller's thread under the sink's own lock.
    Sync {
        standard: Mutex<Box<dyn Appender>>,
        error: Mutex<Box<dyn Appender>>,
    },
}

/// Thread-safe, non-blocking line logger.
///
/// ```
/// use linelog::{Logger, LogLevel, MemoryAppender};
///
/// let out = MemoryAppender::new();
/// let err = MemoryAppender::new();
/// let logger = Logger::builder()
///     .standard(out.clone())
///     .error(err.clone())
///     .build()
///     .unwrap();
///
/// logger.log(LogLevel::Info, &["Testing".into(), "(".into(), 0.0.into(), ")".into()]);
/// logger.log(LogLevel::Error, &["disk".into(), "full".into()]);
/// logger.shutdown().unwrap();
///
/// assert_eq!(out.contents(), "[INFO ] Testing(0.0)\n");
/// assert_eq!(err.contents(), "[ERROR] disk full\n");
/// ```
pub struct Logger {
    settings: RwLock<Settings>,
    formatter: Formatter,
    delivery: Delivery,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Asynchronous logger with default configuration on stdout/stderr.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Asynchronous logger with default configuration on the given sinks.
    pub fn with_appenders<S, E>(standard: S, error: E) -> Result<Self>
    where
        S: Appender + 'static,
        E: Appender + 'static,
    {
        Self::builder().standard(standard).error(error).build()
    }

    /// Logger built from `config` on stdout/stderr.
    pub fn from_config(config: LoggerConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    fn from_parts(
        config: LoggerConfig,
        standard: Box<dyn Appender>,
        error: Box<dyn Appender>,
    ) -> Result<Self> {
        config.validate()?;
        let metrics = Arc::new(LoggerMetrics::new());

        let delivery = if config.synchronous {
            Delivery::Sync {
                standard: Mutex::new(standard),
                error: Mutex::new(error),
            }
        } else {
            let shutdown = Arc::new(AtomicBool::new(false));
            let options = WorkerOptions {
                batch_size: config.batch_size,
                flush_interval: config.flush_interval(),
            };
            let spawn = |destination, appender| {
                Worker::spawn(
                    destination,
                    appender,
                    BoundedQueue::new(config.queue_capacity, config.overflow_policy),
                    options,
                    Arc::clone(&shutdown),
                    Arc::clone(&metrics),
                )
            };
            let standard = spawn(Destination::Standard, standard)?;
            let error = match spawn(Destination::Error, error) {
                Ok(worker) => worker,
                Err(e) => {
                    shutdown.store(true, Ordering::Release);
                    standard.wake();
                    let _ = standard.join();
                    return Err(e);
                }
            };
            Delivery::Async {
                standard,
                error,
                shutdown,
            }
        };

        Ok(Self {
            settings: RwLock::new(Settings {
                threshold: config.level,
                timestamps: config.timestamps,
            }),
            formatter: Formatter::new(config.spacing),
            delivery,
            metrics,
        })
    }

    pub fn set_level(&self, level: LogLevel) {
        self.settings.write().threshold = level;
    }

    pub fn level(&self) -> LogLevel {
        self.settings.read().threshold
    }

    pub fn enable_timestamps(&self, enabled: bool) {
        self.settings.write().timestamps = enabled;
    }

    pub fn timestamps_enabled(&self) -> bool {
        self.settings.read().timestamps
    }

    /// Whether a message at `level` passes the current threshold.
    ///
    /// Cheap enough to guard expensive argument construction.
    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        level >= self.settings.read().threshold
    }

    /// Format `parts` and hand the result to the destination for `level`.
    ///
    /// Returns immediately when `level` is below the threshold. Never blocks
    /// on the sink and never fails; a full queue loses an entry instead.
    pub fn log(&self, level: LogLevel, parts: &[Part<'_>]) {
        let timestamps = {
            let settings = self.settings.read();
            if level < settings.threshold {
                return;
            }
            settings.timestamps
        };

        let stamp = timestamps.then(timestamp::now);
        let text = self.formatter.format(level, parts, stamp.as_deref());
        self.dispatch(LogEntry::for_level(level, text));
    }

    /// Alias of [`Logger::log`]; the destination still follows `level`.
    #[inline]
    pub fn log_standard(&self, level: LogLevel, parts: &[Part<'_>]) {
        self.log(level, parts);
    }

    /// Alias of [`Logger::log`]; the destination still follows `level`.
    #[inline]
    pub fn log_error(&self, level: LogLevel, parts: &[Part<'_>]) {
        self.log(level, parts);
    }

    #[inline]
    pub fn debug(&self, parts: &[Part<'_>]) {
        self.log(LogLevel::Debug, parts);
    }

    #[inline]
    pub fn info(&self, parts: &[Part<'_>]) {
        self.log(LogLevel::Info, parts);
    }

    #[inline]
    pub fn warn(&self, parts: &[Part<'_>]) {
        self.log(LogLevel::Warn, parts);
    }

    #[inline]
    pub fn error(&self, parts: &[Part<'_>]) {
        self.log(LogLevel::Error, parts);
    }

    #[inline]
    pub fn fatal(&self, parts: &[Part<'_>]) {
        self.log(LogLevel::Fatal, parts);
    }

    fn dispatch(&self, entry: LogEntry) {
        match &self.delivery {
            Delivery::Async { standard, error, .. } => {
                let worker = match entry.destination {
                    Destination::Standard => standard,
                    Destination::Error => error,
                };
                worker.enqueue(entry);
            }
            Delivery::Sync { standard, error } => {
                let sink = match entry.destination {
                    Destination::Standard => standard,
                    Destination::Error => error,
                };
                let mut sink = sink.lock();
                self.metrics.record_enqueued();
                worker::deliver(&mut **sink, &entry.text, entry.destination, &self.metrics);
                worker::flush_sink(&mut **sink, entry.destination, &self.metrics);
            }
        }
    }

    /// Push buffered output along.
    ///
    /// Synchronous loggers flush both sinks. Asynchronous loggers wake both
    /// workers without waiting for them.
    pub fn flush(&self) {
        match &self.delivery {
            Delivery::Async { standard, error, .. } => {
                standard.wake();
                error.wake();
            }
            Delivery::Sync { standard, error } => {
                worker::flush_sink(&mut **standard.lock(), Destination::Standard, &self.metrics);
                worker::flush_sink(&mut **error.lock(), Destination::Error, &self.metrics);
            }
        }
    }

    /// Stop both workers after they drain their queues.
    ///
    /// Blocks until both worker threads have exited. Calling it again is a
    /// no-op. Entries logged after shutdown began may be lost.
    pub fn shutdown(&self) -> Result<()> {
        match &self.delivery {
            Delivery::Async {
                standard,
                error,
                shutdown,
            } => {
                shutdown.store(true, Ordering::Release);
                standard.wake();
                error.wake();
                let standard_result = standard.join();
                let error_result = error.join();
                standard_result.and(error_result)
            }
            Delivery::Sync { .. } => {
                self.flush();
                Ok(())
            }
        }
    }

    pub fn is_synchronous(&self) -> bool {
        matches!(self.delivery, Delivery::Sync { .. })
    }

    /// Whether [`Logger::shutdown`] has begun. Always `false` in synchronous mode.
    pub fn is_shutting_down(&self) -> bool {
        match &self.delivery {
            Delivery::Async { shutdown, .. } => shutdown.load(Ordering::Acquire),
            Delivery::Sync { .. } => false,
        }
    }

    /// Lifecycle state of a destination's worker; `None` in synchronous mode.
    pub fn worker_state(&self, destination: Destination) -> Option<WorkerState> {
        match &self.delivery {
            Delivery::Async { standard, error, .. } => Some(match destination {
                Destination::Standard => standard.state(),
                Destination::Error => error.state(),
            }),
            Delivery::Sync { .. } => None,
        }
    }

    /// Entries waiting in a destination's queue.
    pub fn pending(&self, destination: Destination) -> usize {
        match &self.delivery {
            Delivery::Async { standard, error, .. } => match destination {
                Destination::Standard => standard.pending(),
                Destination::Error => error.pending(),
            },
            Delivery::Sync { .. } => 0,
        }
    }

    /// Get the logger metrics for detailed observability
    ///
    /// ```
    /// use linelog::{Logger, MemoryAppender};
    ///
    /// let logger = Logger::with_appenders(MemoryAppender::new(), MemoryAppender::new()).unwrap();
    /// logger.info(&["ready".into()]);
    /// logger.shutdown().unwrap();
    ///
    /// assert_eq!(logger.metrics().total_written(), 1);
    /// assert_eq!(logger.metrics().dropped_count(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER ERROR] Failed to shut down cleanly: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use linelog::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .timestamps(true)
///     .queue_capacity(4096)
///     .batch_size(32)
///     .flush_interval(Duration::from_millis(100))
///     .standard(MemoryAppender::new())
///     .error(MemoryAppender::new())
///     .build()
///     .unwrap();
/// assert!(logger.should_log(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    standard: Option<Box<dyn Appender>>,
    error: Option<Box<dyn Appender>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            standard: None,
            error: None,
        }
    }

    /// Replace every configuration value at once
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamps(mut self, enabled: bool) -> Self {
        self.config.timestamps = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.config.queue_capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Millisecond resolution; sub-millisecond intervals fail validation.
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, interval: Duration) -> Self {
        self.config.flush_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow_policy = policy;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn spacing_rules(mut self, rules: SpacingRules) -> Self {
        self.config.spacing = rules;
        self
    }

    /// Write on the calling thread instead of through queues and workers
    #[must_use = "builder methods return a new value"]
    pub fn synchronous(mut self, enabled: bool) -> Self {
        self.config.synchronous = enabled;
        self
    }

    /// Sink for `Debug`, `Info` and `Warn` (stdout if unset)
    #[must_use = "builder methods return a new value"]
    pub fn standard<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.standard = Some(Box::new(appender));
        self
    }

    /// Sink for `Error` and `Fatal` (stderr if unset)
    #[must_use = "builder methods return a new value"]
    pub fn error<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.error = Some(Box::new(appender));
        self
    }

    /// Validate the configuration and start the workers
    pub fn build(self) -> Result<Logger> {
        let standard = self
            .standard
            .unwrap_or_else(|| Box::new(ConsoleAppender::stdout()));
        let error = self
            .error
            .unwrap_or_else(|| Box::new(ConsoleAppender::stderr()));
        Logger::from_parts(self.config, standard, error)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

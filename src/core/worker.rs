//! Background delivery worker
//!
//! One worker per destination. A worker owns its sink exclusively and shares
//! only its queue (behind a mutex + condvar) with producers, plus the
//! logger-wide shutdown flag.
//!
//! Lifecycle: [`WorkerState::Running`] until the worker first observes the
//! shutdown flag, then [`WorkerState::Draining`] until its queue is empty,
//! then [`WorkerState::Terminated`] just before the thread exits.

use super::appender::Appender;
use super::error::{LoggerError, Result};
use super::log_entry::{Destination, LogEntry};
use super::metrics::LoggerMetrics;
use super::queue::{BoundedQueue, PushOutcome};
use parking_lot::{Condvar, Mutex};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Running = 0,
    Draining = 1,
    Terminated = 2,
}

impl WorkerState {
    fn from_u8(v: u8) -> Self {
        match v {
            0 => WorkerState::Running,
            1 => WorkerState::Draining,
            _ => WorkerState::Terminated,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WorkerOptions {
    pub batch_size: usize,
    pub flush_interval: Duration,
}

/// State shared between producers and the worker thread.
struct Channel {
    queue: Mutex<BoundedQueue>,
    wake: Condvar,
    state: AtomicU8,
}

impl Channel {
    fn set_state(&self, state: WorkerState) {
        self.state.store(state as u8, Ordering::Release);
    }
}

pub struct Worker {
    destination: Destination,
    channel: Arc<Channel>,
    metrics: Arc<LoggerMetrics>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Worker {
    /// Start a worker thread that drains `queue` into `appender`.
    pub fn spawn(
        destination: Destination,
        appender: Box<dyn Appender>,
        queue: BoundedQueue,
        options: WorkerOptions,
        shutdown: Arc<AtomicBool>,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let channel = Arc::new(Channel {
            queue: Mutex::new(queue),
            wake: Condvar::new(),
            state: AtomicU8::new(WorkerState::Running as u8),
        });

        let ctx = WorkerContext {
            destination,
            channel: Arc::clone(&channel),
            appender,
            options,
            shutdown,
            metrics: Arc::clone(&metrics),
        };

        let handle = thread::Builder::new()
            .name(format!("linelog-{}", destination))
            .spawn(move || ctx.run())
            .map_err(|e| LoggerError::worker_spawn(destination.to_str(), e))?;

        Ok(Self {
            destination,
            channel,
            metrics,
            handle: Mutex::new(Some(handle)),
        })
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Queue an entry and wake the worker. Never blocks on the sink.
    pub fn enqueue(&self, entry: LogEntry) -> PushOutcome {
        let outcome = self.channel.queue.lock().push(entry);
        self.channel.wake.notify_one();

        self.metrics.record_enqueued();
        if outcome.lost_entry() {
            self.metrics.record_queue_full();
            self.metrics.record_dropped();
        }
        outcome
    }

    /// Wake the worker so it re-checks its queue and the shutdown flag.
    ///
    /// The queue lock is taken first so a worker that is between its flag
    /// check and its wait cannot miss the notification.
    pub fn wake(&self) {
        let _queue = self.channel.queue.lock();
        self.channel.wake.notify_all();
    }

    pub fn state(&self) -> WorkerState {
        WorkerState::from_u8(self.channel.state.load(Ordering::Acquire))
    }

    /// Entries waiting in the queue.
    pub fn pending(&self) -> usize {
        self.channel.queue.lock().len()
    }

    /// Block until the worker thread exits. Subsequent calls return `Ok(())`.
    pub fn join(&self) -> Result<()> {
        let handle = self.handle.lock().take();
        match handle {
            Some(handle) => handle.join().map_err(|panic_info| {
                LoggerError::worker_panicked(self.destination.to_str(), panic_message(&*panic_info))
            }),
            None => Ok(()),
        }
    }
}

struct WorkerContext {
    destination: Destination,
    channel: Arc<Channel>,
    appender: Box<dyn Appender>,
    options: WorkerOptions,
    shutdown: Arc<AtomicBool>,
    metrics: Arc<LoggerMetrics>,
}

impl WorkerContext {
    fn run(mut self) {
        let batch_size = self.options.batch_size;
        let interval = self.options.flush_interval;
        let mut batch: Vec<LogEntry> = Vec::with_capacity(batch_size);
        let mut last_flush = Instant::now();
        let mut unflushed = false;

        loop {
            let draining;
            {
                let mut queue = self.channel.queue.lock();
                if queue.is_empty() && !self.shutdown.load(Ordering::Acquire) {
                    let deadline = if unflushed {
                        last_flush + interval
                    } else {
                        Instant::now() + interval
                    };
                    self.channel.wake.wait_until(&mut queue, deadline);
                }

                draining = self.shutdown.load(Ordering::Acquire);
                if draining && queue.is_empty() {
                    break;
                }
                queue.drain_into(&mut batch, batch_size);
            }

            if draining {
                self.channel.set_state(WorkerState::Draining);
            }

            let full = batch.len() >= batch_size;
            if !batch.is_empty() {
                self.write_batch(&mut batch);
                unflushed = true;
            }
            if unflushed && (full || last_flush.elapsed() >= interval) {
                self.flush();
                last_flush = Instant::now();
                unflushed = false;
            }
        }

        self.channel.set_state(WorkerState::Draining);
        loop {
            self.channel.queue.lock().drain_into(&mut batch, usize::MAX);
            if batch.is_empty() {
                break;
            }
            self.write_batch(&mut batch);
        }
        self.flush();
        self.channel.set_state(WorkerState::Terminated);
    }

    fn write_batch(&mut self, batch: &mut Vec<LogEntry>) {
        for entry in batch.drain(..) {
            deliver(&mut *self.appender, &entry.text, self.destination, &self.metrics);
        }
    }

    fn flush(&mut self) {
        flush_sink(&mut *self.appender, self.destination, &self.metrics);
    }
}

/// Write one entry's text, isolating sink errors and panics from the caller.
pub(crate) fn deliver(
    appender: &mut dyn Appender,
    text: &str,
    destination: Destination,
    metrics: &LoggerMetrics,
) {
    let result = catch_unwind(AssertUnwindSafe(|| appender.write_str(text)));
    match result {
        Ok(Ok(())) => {
            metrics.record_written();
        }
        Ok(Err(e)) => report_failure(metrics, destination, "write failed", &e.to_string()),
        Err(panic_info) => {
            report_failure(metrics, destination, "panicked on write", &panic_message(&*panic_info))
        }
    }
}

pub(crate) fn flush_sink(appender: &mut dyn Appender, destination: Destination, metrics: &LoggerMetrics) {
    let result = catch_unwind(AssertUnwindSafe(|| appender.flush()));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => report_failure(metrics, destination, "flush failed", &e.to_string()),
        Err(panic_info) => {
            report_failure(metrics, destination, "panicked on flush", &panic_message(&*panic_info))
        }
    }
}

/// Count a sink failure; report the first and every 1000th on stderr.
fn report_failure(metrics: &LoggerMetrics, destination: Destination, what: &str, detail: &str) {
    let previous = metrics.record_write_error();
    if previous == 0 || (previous + 1) % 1000 == 0 {
        eprintln!(
            "[LOGGER ERROR] {} sink {}: {} ({} sink failures so far)",
            destination,
            what,
            detail,
            previous + 1
        );
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

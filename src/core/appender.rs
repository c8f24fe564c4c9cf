//! Appender trait for log output destinations

use super::error::Result;

/// A writable text destination.
///
/// Each appender is owned by exactly one writer (a worker thread, or the
/// sink lock in synchronous mode), so implementations need `Send` only.
pub trait Appender: Send {
    /// Write already-formatted text, line terminators included.
    fn write_str(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<A: Appender + ?Sized> Appender for Box<A> {
    fn write_str(&mut self, text: &str) -> Result<()> {
        (**self).write_str(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

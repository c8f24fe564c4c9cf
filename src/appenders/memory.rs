//! In-memory appender
//!
//! Clones share one buffer, so a caller can hand one clone to the logger and
//! read what was written through another. Handy for tests and for embedding
//! applications that ship log text elsewhere themselves.

use crate::core::{Appender, Result};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Buffer {
    text: String,
    flushes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryAppender {
    buffer: Arc<Mutex<Buffer>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.buffer.lock().text.clone()
    }

    /// Written text split into lines, terminators removed.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().text.lines().map(str::to_string).collect()
    }

    pub fn flush_count(&self) -> usize {
        self.buffer.lock().flushes
    }

    pub fn clear(&self) {
        let mut buffer = self.buffer.lock();
        buffer.text.clear();
        buffer.flushes = 0;
    }
}

impl Appender for MemoryAppender {
    fn write_str(&mut self, text: &str) -> Result<()> {
        self.buffer.lock().text.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.buffer.lock().flushes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

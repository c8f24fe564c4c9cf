//! Console appender implementation

use crate::core::{Appender, Result};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes to the process's standard output or standard error.
pub struct ConsoleAppender {
    stream: ConsoleStream,
}

impl ConsoleAppender {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Appender for ConsoleAppender {
    fn write_str(&mut self, text: &str) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(text.as_bytes())?,
            ConsoleStream::Stderr => io::stderr().lock().write_all(text.as_bytes())?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().flush()?,
            ConsoleStream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(ConsoleAppender::stdout().name(), "stdout");
        assert_eq!(ConsoleAppender::stderr().name(), "stderr");
        assert_eq!(ConsoleAppender::stderr().stream(), ConsoleStream::Stderr);
    }
}

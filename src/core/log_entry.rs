//! Log entry structure

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output channel a message is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Standard,
    Error,
}

impl Destination {
    /// `Error` and `Fatal` go to the error channel, everything else to standard.
    pub fn for_level(level: LogLevel) -> Self {
        if level >= LogLevel::Error {
            Destination::Error
        } else {
            Destination::Standard
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Destination::Standard => "standard",
            Destination::Error => "error",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A fully rendered message on its way to a sink.
///
/// `text` already carries its line prefixes and terminators; workers write it
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub destination: Destination,
    pub text: String,
}

impl LogEntry {
    pub fn new(destination: Destination, text: String) -> Self {
        Self { destination, text }
    }

    pub fn for_level(level: LogLevel, text: String) -> Self {
        Self::new(Destination::for_level(level), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_by_level() {
        assert_eq!(Destination::for_level(LogLevel::Debug), Destination::Standard);
        assert_eq!(Destination::for_level(LogLevel::Info), Destination::Standard);
        assert_eq!(Destination::for_level(LogLevel::Warn), Destination::Standard);
        assert_eq!(Destination::for_level(LogLevel::Error), Destination::Error);
        assert_eq!(Destination::for_level(LogLevel::Fatal), Destination::Error);
    }

    #[test]
    fn test_entry_routing() {
        let entry = LogEntry::for_level(LogLevel::Fatal, "[FATAL] x\n".to_string());
        assert_eq!(entry.destination, Destination::Error);
        assert_eq!(entry.text, "[FATAL] x\n");
    }
}

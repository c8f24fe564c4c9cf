//! Message formatter
//!
//! Turns an argument slice into the final text handed to a sink: tokens are
//! joined with [`SpacingRules::should_skip_space`], split into physical lines,
//! each line is crushed and tagged, and every line ends with `\n`.

use super::log_level::LogLevel;
use super::normalize::SpacingRules;
use super::part::Part;

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    rules: SpacingRules,
}

impl Formatter {
    pub fn new(rules: SpacingRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SpacingRules {
        &self.rules
    }

    /// Join the rendered parts into one string, before line splitting.
    pub fn join(&self, parts: &[Part<'_>]) -> String {
        let mut joined = String::new();
        let mut prev = String::new();

        for part in parts {
            let token = part.render();
            if !self.rules.should_skip_space(&prev, &token) {
                joined.push(' ');
            }
            joined.push_str(&token);
            prev.clear();
            prev.push_str(&token);
        }

        joined
    }

    /// Render a complete message.
    ///
    /// `timestamp` is stamped on every line of the message when present.
    /// An empty message still yields one tagged line.
    pub fn format(&self, level: LogLevel, parts: &[Part<'_>], timestamp: Option<&str>) -> String {
        let joined = self.join(parts);
        let tag = level.tag();
        let mut out = String::with_capacity(joined.len() + 48);

        let mut push_line = |line: &str| {
            if let Some(stamp) = timestamp {
                out.push_str(stamp);
                out.push('\t');
            }
            out.push_str(&tag);
            out.push_str(&self.rules.crush(line));
            out.push('\n');
        };

        let mut emitted = false;
        for line in joined.lines() {
            push_line(line);
            emitted = true;
        }
        if !emitted {
            push_line("");
        }

        out
    }
}

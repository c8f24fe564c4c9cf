//! Token spacing and line normalization
//!
//! Two small algorithms shape message text:
//!
//! - [`SpacingRules::should_skip_space`] decides, for two adjacent rendered
//!   tokens, whether the formatter omits the joining space.
//! - [`SpacingRules::crush`] trims a finished line, collapses whitespace runs
//!   and pulls punctuation tight against its neighbour.
//!
//! The punctuation sets are data rather than code so deployments can adjust
//! them (e.g. drop `:` from the tight set) through configuration.

use serde::{Deserialize, Serialize};

/// Punctuation sets that drive spacing and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingRules {
    /// A token starting with one of these attaches to the previous token.
    pub attach_left: String,
    /// A token ending with one of these attaches to the next token.
    pub opening: String,
    /// `crush` removes the space in front of these.
    pub tight_before: String,
    /// `crush` removes the space following these.
    pub open_parens: String,
    /// `crush` removes the space in front of these.
    pub close_parens: String,
}

impl Default for SpacingRules {
    fn default() -> Self {
        Self {
            attach_left: ".,!?:;)]}".to_string(),
            opening: "([{".to_string(),
            tight_before: ",.!?:;".to_string(),
            open_parens: "(".to_string(),
            close_parens: ")".to_string(),
        }
    }
}

impl SpacingRules {
    /// Returns `true` when no space belongs between `prev` and `next`.
    ///
    /// Rules in order, first match wins: an empty token; `next` starts with
    /// attach-left punctuation; `next` is a lone opening bracket after an
    /// alphanumeric; `prev` ends with an opening bracket or whitespace;
    /// otherwise skip unless `prev` ends alphanumeric or ASCII punctuation.
    pub fn should_skip_space(&self, prev: &str, next: &str) -> bool {
        let (Some(last), Some(first)) = (prev.chars().next_back(), next.chars().next()) else {
            return true;
        };

        if self.attach_left.contains(first) {
            return true;
        }
        // A lone bracket argument hugs the word in front of it: "f", "(" -> "f(".
        if last.is_alphanumeric() && next.len() == first.len_utf8() && self.opening.contains(first)
        {
            return true;
        }
        if self.opening.contains(last) || last.is_whitespace() {
            return true;
        }
        !(last.is_alphanumeric() || last.is_ascii_punctuation())
    }

    /// Normalize one line of text.
    ///
    /// Trims both ends, collapses whitespace runs to a single space, and
    /// drops the space before tight punctuation or a closing paren and after
    /// an opening paren. Applying it twice gives the same result as once.
    pub fn crush(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        let mut pending_space = false;

        for c in line.chars() {
            if c.is_whitespace() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                let after_open = out.chars().next_back().is_some_and(|p| self.open_parens.contains(p));
                let tight = self.tight_before.contains(c) || self.close_parens.contains(c);
                if !after_open && !tight {
                    out.push(' ');
                }
                pending_space = false;
            }
            out.push(c);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> SpacingRules {
        SpacingRules::default()
    }

    #[test]
    fn test_skip_space_before_punctuation() {
        let r = rules();
        for p in [".", ",", "!", "?", ":", ";", ")", "]", "}"] {
            assert!(r.should_skip_space("Word", p), "space before {p:?}");
        }
    }

    #[test]
    fn test_space_after_punctuation() {
        let r = rules();
        for p in [":", ".", ",", ";"] {
            assert!(!r.should_skip_space(p, "Word"), "no space after {p:?}");
        }
    }

    #[test]
    fn test_space_between_words_and_numbers() {
        let r = rules();
        assert!(!r.should_skip_space("Hello", "World"));
        assert!(!r.should_skip_space("42", "Word"));
        assert!(!r.should_skip_space("3.14", "Word"));
        assert!(!r.should_skip_space("Word", "100"));
    }

    #[test]
    fn test_empty_tokens_skip() {
        let r = rules();
        assert!(r.should_skip_space("", "Word"));
        assert!(r.should_skip_space("", "."));
        assert!(r.should_skip_space(":", ""));
        assert!(r.should_skip_space("", ""));
    }

    #[test]
    fn test_brackets() {
        let r = rules();
        assert!(r.should_skip_space("(", "0.0"));
        assert!(r.should_skip_space("[", "x"));
        assert!(r.should_skip_space("Testing", "("));
        // after a comma the bracket keeps its space
        assert!(!r.should_skip_space("completed,", "("));
        // a bracketed word is a word, not a lone bracket
        assert!(!r.should_skip_space("Hello", "(World)"));
    }

    #[test]
    fn test_trailing_whitespace_skips() {
        let r = rules();
        assert!(r.should_skip_space("Foo ", "bar"));
        assert!(r.should_skip_space("Foo\t", "bar"));
    }

    #[test]
    fn test_non_ascii_symbol_skips() {
        // neither alphanumeric nor ASCII punctuation
        assert!(rules().should_skip_space("→", "x"));
    }

    #[test]
    fn test_crush_trims_and_collapses() {
        let r = rules();
        assert_eq!(r.crush("   Hello World   "), "Hello World");
        assert_eq!(r.crush("Hello    World"), "Hello World");
        assert_eq!(r.crush("   This    is   \t\ttest   "), "This is test");
        assert_eq!(r.crush("  a   b  "), "a b");
        assert_eq!(r.crush(""), "");
        assert_eq!(r.crush(" \t "), "");
    }

    #[test]
    fn test_crush_punctuation() {
        let r = rules();
        assert_eq!(r.crush("Hello  , World"), "Hello, World");
        assert_eq!(r.crush("done .  next ! ok ?"), "done. next! ok?");
        assert_eq!(r.crush("key : value ;"), "key: value;");
    }

    #[test]
    fn test_crush_parentheses() {
        let r = rules();
        assert_eq!(r.crush("Hello (   World   )"), "Hello (World)");
        assert_eq!(r.crush("( )"), "()");
    }

    #[test]
    fn test_crush_is_idempotent_on_samples() {
        let r = rules();
        for s in ["  a ( b , c )  .", "x\t\t:\ty", "( ( a ) )", " , . ", "Foo  foo foo."] {
            let once = r.crush(s);
            assert_eq!(r.crush(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_custom_rules() {
        let r = SpacingRules {
            tight_before: ",.".to_string(),
            ..SpacingRules::default()
        };
        assert_eq!(r.crush("a : b , c"), "a : b, c");
    }
}

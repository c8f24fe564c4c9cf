//! Property-based tests for linelog using proptest

use linelog::prelude::*;
use linelog::{BoundedQueue, Formatter, PushOutcome};
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

/// Text biased toward the characters the normalizer cares about.
fn messy_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('('),
            Just(')'),
            Just('['),
            Just(','),
            Just('.'),
            Just(':'),
            Just(';'),
            Just('!'),
            Just('?'),
            Just('a'),
            Just('Z'),
            Just('7'),
            Just('é'),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering follows the discriminants
    #[test]
    fn test_log_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
    }

    /// Destination is a pure function of the level
    #[test]
    fn test_destination_follows_level(level in any_level()) {
        let expected = if level >= LogLevel::Error { Destination::Error } else { Destination::Standard };
        prop_assert_eq!(Destination::for_level(level), expected);
    }
}

// ============================================================================
// Normalizer Tests
// ============================================================================

proptest! {
    #[test]
    fn test_crush_is_idempotent(s in messy_text()) {
        let rules = SpacingRules::default();
        let once = rules.crush(&s);
        prop_assert_eq!(rules.crush(&once), once);
    }

    #[test]
    fn test_crush_is_idempotent_on_arbitrary_text(s in ".*") {
        let rules = SpacingRules::default();
        let once = rules.crush(&s);
        prop_assert_eq!(rules.crush(&once), once);
    }

    #[test]
    fn test_crush_output_shape(s in messy_text()) {
        let out = SpacingRules::default().crush(&s);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
        prop_assert!(!out.contains('\t') && !out.contains('\n'));
        prop_assert!(!out.contains(" ,") && !out.contains(" .") && !out.contains(" :"));
        prop_assert!(!out.contains("( ") && !out.contains(" )"));
    }

    /// Non-whitespace characters survive normalization in order
    #[test]
    fn test_crush_preserves_content(s in messy_text()) {
        let out = SpacingRules::default().crush(&s);
        let strip = |t: &str| t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&out), strip(&s));
    }

    /// The spacing decision depends only on the adjacent pair
    #[test]
    fn test_spacing_is_deterministic(prev in messy_text(), next in messy_text()) {
        let a = SpacingRules::default();
        let b = SpacingRules::default();
        prop_assert_eq!(a.should_skip_space(&prev, &next), b.should_skip_space(&prev, &next));
    }

    #[test]
    fn test_spacing_skips_empty_tokens(token in messy_text()) {
        let rules = SpacingRules::default();
        prop_assert!(rules.should_skip_space("", &token));
        prop_assert!(rules.should_skip_space(&token, ""));
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// Every output line is tagged and terminated; an input always yields output
    #[test]
    fn test_every_line_tagged(level in any_level(), parts in proptest::collection::vec(messy_text(), 0..6)) {
        let parts: Vec<Part> = parts.iter().map(|s| Part::from(s.as_str())).collect();
        let out = Formatter::default().format(level, &parts, None);

        prop_assert!(out.ends_with('\n'));
        let tag = level.tag();
        let lines: Vec<&str> = out.lines().collect();
        prop_assert!(!lines.is_empty());
        for line in lines {
            prop_assert!(line.starts_with(&tag), "line {:?} lacks tag {:?}", line, tag);
        }
    }

    /// Integral floats always carry a fractional digit
    #[test]
    fn test_integral_floats_keep_fraction(v in -1_000_000i64..1_000_000) {
        let rendered = Part::from(v as f64).render().into_owned();
        prop_assert_eq!(rendered, format!("{}.0", v));
    }
}

// ============================================================================
// Queue Tests
// ============================================================================

proptest! {
    /// Overflowing by k loses exactly the k oldest entries
    #[test]
    fn test_drop_oldest_exactness(capacity in 1usize..64, total in 0usize..200) {
        let mut queue = BoundedQueue::new(capacity, OverflowPolicy::DropOldest);
        let mut evicted = 0;
        for i in 0..total {
            if let PushOutcome::Evicted(_) = queue.push(LogEntry::new(Destination::Standard, i.to_string())) {
                evicted += 1;
            }
            prop_assert!(queue.len() <= capacity);
        }

        let mut batch = Vec::new();
        queue.drain_into(&mut batch, usize::MAX);
        let kept: Vec<usize> = batch.iter().map(|e| e.text.parse().unwrap()).collect();
        let first_kept = total.saturating_sub(capacity);
        prop_assert_eq!(evicted, first_kept);
        prop_assert_eq!(kept, (first_kept..total).collect::<Vec<_>>());
    }
}

//! Overflow policies for the bounded delivery queues
//!
//! A full queue never blocks the producer. The policy only decides which
//! entry is lost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for handling a full delivery queue
///
/// # Example
///
/// ```
/// use linelog::OverflowPolicy;
///
/// // Default behavior: evict the oldest queued entry
/// assert_eq!(OverflowPolicy::default(), OverflowPolicy::DropOldest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Evict the oldest queued entry to make room for the new one
    ///
    /// Recent output is kept at the cost of older, not yet written lines.
    #[default]
    DropOldest,

    /// Discard the incoming entry and keep the queue as it is
    DropNewest,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::DropOldest => write!(f, "DropOldest"),
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
        }
    }
}

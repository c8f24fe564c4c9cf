//! Bounded FIFO of pending entries
//!
//! The queue itself is not synchronized; each worker wraps its own queue in a
//! mutex so the standard and error paths never share a lock.

use super::log_entry::LogEntry;
use super::overflow_policy::OverflowPolicy;
use std::collections::VecDeque;

/// Result of a push into a [`BoundedQueue`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Stored without loss.
    Accepted,
    /// Stored after evicting the oldest entry.
    Evicted(LogEntry),
    /// Queue was full and the new entry was discarded.
    Rejected(LogEntry),
}

impl PushOutcome {
    pub fn lost_entry(&self) -> bool {
        !matches!(self, PushOutcome::Accepted)
    }
}

#[derive(Debug)]
pub struct BoundedQueue {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl BoundedQueue {
    /// `capacity` must be non-zero; configuration validation enforces it.
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        debug_assert!(capacity > 0);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    pub fn push(&mut self, entry: LogEntry) -> PushOutcome {
        if self.entries.len() < self.capacity {
            self.entries.push_back(entry);
            return PushOutcome::Accepted;
        }

        match self.policy {
            OverflowPolicy::DropOldest => {
                let evicted = self.entries.pop_front();
                self.entries.push_back(entry);
                match evicted {
                    Some(old) => PushOutcome::Evicted(old),
                    None => PushOutcome::Accepted,
                }
            }
            OverflowPolicy::DropNewest => PushOutcome::Rejected(entry),
        }
    }

    /// Move up to `max` entries from the front into `batch`, preserving order.
    pub fn drain_into(&mut self, batch: &mut Vec<LogEntry>, max: usize) -> usize {
        let n = max.min(self.entries.len());
        batch.extend(self.entries.drain(..n));
        n
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }
}

//! Activity log buffer
//!
//! In-memory collection of user-facing log entries, capped at a fixed number
//! of most recent entries. Oldest entries are evicted first.

use beacon_core::domain::log::{LogEntry, LogLevel};
use std::collections::VecDeque;

/// Bounded buffer of activity log entries
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    /// Creates a buffer that keeps at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Appends a timestamped entry, evicting the oldest past capacity
    pub fn push(&mut self, message: impl Into<String>, level: LogLevel) {
        self.entries.push_back(LogEntry::new(message, level));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The `n` most recent entries, newest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut buffer = LogBuffer::new(10);
        buffer.push("first", LogLevel::Info);
        buffer.push("second", LogLevel::Error);

        let messages: Vec<_> = buffer.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut buffer = LogBuffer::new(1000);
        for i in 0..1500 {
            buffer.push(format!("entry {}", i), LogLevel::Info);
        }

        assert_eq!(buffer.len(), 1000);
        // The 500 oldest entries were dropped; the remainder keeps its order.
        let first = buffer.entries().next().unwrap();
        assert_eq!(first.message, "entry 500");
        let last = buffer.entries().last().unwrap();
        assert_eq!(last.message, "entry 1499");
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut buffer = LogBuffer::new(10);
        for i in 0..8 {
            buffer.push(format!("entry {}", i), LogLevel::Info);
        }

        let recent = buffer.recent(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].message, "entry 7");
        assert_eq!(recent[4].message, "entry 3");
    }

    #[test]
    fn test_clear() {
        let mut buffer = LogBuffer::new(10);
        buffer.push("entry", LogLevel::Info);
        buffer.clear();
        assert!(buffer.is_empty());
    }
}

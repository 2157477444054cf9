//! Game log entries and the sink they are emitted through.
//!
//! The simulation produces narrative `(day, message)` lines in emission
//! order. Where they go is up to the caller: a plain `Vec` collects them in
//! tests, [`Journal`] keeps a bounded newest-first window for display, and
//! the engine binary forwards them to `tracing`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Default number of entries a [`Journal`] retains.
pub const DEFAULT_JOURNAL_CAPACITY: usize = 20;

/// One line of the game log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Game day the line was emitted on.
    pub day: u32,
    /// Message text.
    pub message: String,
}

impl LogEntry {
    /// Build an entry.
    pub fn new(day: u32, message: impl Into<String>) -> Self {
        Self {
            day,
            message: message.into(),
        }
    }
}

/// Receiver of game log lines, in emission order.
pub trait LogSink {
    /// Record one line.
    fn record(&mut self, entry: LogEntry);

    /// Convenience wrapper around [`LogSink::record`].
    fn log(&mut self, day: u32, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.record(LogEntry::new(day, message));
    }
}

impl LogSink for Vec<LogEntry> {
    fn record(&mut self, entry: LogEntry) {
        self.push(entry);
    }
}

/// Bounded log that keeps the most recent entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for Journal {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_JOURNAL_CAPACITY)
    }
}

impl Journal {
    /// A journal retaining at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl LogSink for Journal {
    fn record(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_sink_keeps_emission_order() {
        let mut sink: Vec<LogEntry> = Vec::new();
        sink.log(1, "first");
        sink.log(2, "second");
        assert_eq!(sink.first().map(|e| e.message.as_str()), Some("first"));
        assert_eq!(sink.last().map(|e| e.day), Some(2));
    }

    #[test]
    fn journal_is_bounded_and_newest_first() {
        let mut journal = Journal::with_capacity(3);
        for day in 1..=5 {
            journal.log(day, format!("day {day}"));
        }
        assert_eq!(journal.len(), 3);
        let days: Vec<u32> = journal.entries().map(|e| e.day).collect();
        assert_eq!(days, vec![5, 4, 3]);
        assert_eq!(journal.latest().map(|e| e.day), Some(5));
    }
}

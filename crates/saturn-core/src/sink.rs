//! Log sinks owned by the core.

use saturn_types::{LogEntry, LogSink};
use tracing::info;

/// Forwards each game log entry to `tracing` and then to an inner sink.
///
/// The headless binary has no screen to show the journal on, so the
/// session writes through this to keep the game log visible in the
/// diagnostic output.
#[derive(Debug)]
pub struct TracingSink<'a, S: LogSink> {
    inner: &'a mut S,
}

impl<'a, S: LogSink> TracingSink<'a, S> {
    /// Wrap `inner`.
    pub const fn new(inner: &'a mut S) -> Self {
        Self { inner }
    }
}

impl<S: LogSink> LogSink for TracingSink<'_, S> {
    fn record(&mut self, entry: LogEntry) {
        info!(target: "saturn::journal", day = entry.day, "{}", entry.message);
        self.inner.record(entry);
    }
}

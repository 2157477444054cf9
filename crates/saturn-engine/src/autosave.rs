//! Save callback that writes snapshots to the save slot.
//!
//! A failed autosave is logged and counted; the game keeps running and
//! the next interval tries again.

use saturn_core::SaveCallback;
use saturn_persist::SaveStore;
use saturn_types::GameState;
use tracing::warn;

/// Writes every autosave to a [`SaveStore`].
pub struct AutosaveCallback {
    store: SaveStore,
    failures: u64,
}

impl AutosaveCallback {
    /// Create a callback writing to `store`.
    pub const fn new(store: SaveStore) -> Self {
        Self { store, failures: 0 }
    }

    /// The backing save slot.
    pub const fn store(&self) -> &SaveStore {
        &self.store
    }

    /// Autosaves that failed so far.
    pub const fn failures(&self) -> u64 {
        self.failures
    }
}

impl SaveCallback for AutosaveCallback {
    fn save(&mut self, state: &GameState) {
        if let Err(e) = self.store.save(state) {
            self.failures = self.failures.saturating_add(1);
            warn!(
                error = %e,
                path = %self.store.path().display(),
                failures = self.failures,
                "Autosave failed"
            );
        }
    }
}

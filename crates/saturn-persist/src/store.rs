//! File-backed save slot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use saturn_types::GameState;
use tracing::{debug, info, warn};

use crate::error::PersistError;
use crate::snapshot;

/// A single save slot stored as one JSON file.
///
/// Saves are written to a sibling temp file and renamed into place, so an
/// interrupted save never leaves a truncated snapshot behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// A store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a snapshot of `state`.
    pub fn save(&self, state: &GameState) -> Result<(), PersistError> {
        let json = snapshot::encode(state)?;
        let tmp = self.temp_path();
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), day = state.day, "Snapshot saved");
        Ok(())
    }

    /// Read the stored snapshot. Returns `None` when no save exists.
    pub fn load(&self) -> Result<Option<GameState>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let state = snapshot::decode(&json)?;
        info!(path = %self.path.display(), day = state.day, "Snapshot loaded");
        Ok(Some(state))
    }

    /// Remove the stored snapshot. A missing file is not an error.
    pub fn clear(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "Save cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Move an unreadable snapshot to `<file>.corrupt` so a fresh game can
    /// take the slot. Returns the new location; an earlier `.corrupt` file
    /// is replaced.
    pub fn set_aside(&self) -> Result<PathBuf, PersistError> {
        let target = self.sibling("corrupt");
        fs::rename(&self.path, &target)?;
        warn!(
            path = %self.path.display(),
            moved_to = %target.display(),
            "Unreadable save set aside"
        );
        Ok(target)
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling("tmp")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

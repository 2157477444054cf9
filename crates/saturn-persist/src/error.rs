//! Error types for the persistence layer.

/// Errors that can occur while saving or loading a snapshot.
///
/// None of these affect the in-memory state: a failed save leaves it
/// untouched and a failed load yields nothing to apply.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Reading, writing, or renaming the save file failed.
    #[error("save file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized or deserialized.
    #[error("snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by a newer version.
    #[error("unsupported snapshot version {found} (this build reads up to {supported})")]
    UnsupportedVersion {
        /// Version found in the snapshot.
        found: u64,
        /// Highest version this build understands.
        supported: u32,
    },
}

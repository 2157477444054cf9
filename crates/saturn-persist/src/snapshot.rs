//! Versioned snapshot encoding.
//!
//! A snapshot is a JSON object `{ "version": 1, "state": { ... } }`. The
//! decoder also accepts a bare state object as written by early builds.
//! Every state field is defaulted, so fields missing from an older
//! snapshot are backfilled instead of failing the load.

use saturn_types::GameState;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PersistError;

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    state: &'a GameState,
}

#[derive(Deserialize)]
struct Snapshot {
    version: u64,
    state: GameState,
}

/// Encode `state` as a versioned JSON snapshot.
pub fn encode(state: &GameState) -> Result<String, PersistError> {
    let json = serde_json::to_string_pretty(&SnapshotRef {
        version: SNAPSHOT_VERSION,
        state,
    })?;
    Ok(json)
}

/// Decode a snapshot, backfilling missing fields.
///
/// After decoding, the item id counter is raised to the highest existing
/// item suffix so new items never reuse an id.
pub fn decode(json: &str) -> Result<GameState, PersistError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let versioned = value.get("version").is_some() && value.get("state").is_some();

    let mut state = if versioned {
        let snapshot: Snapshot = serde_json::from_value(value)?;
        if snapshot.version > u64::from(SNAPSHOT_VERSION) {
            return Err(PersistError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        snapshot.state
    } else {
        debug!("Decoding unversioned snapshot");
        serde_json::from_value::<GameState>(value)?
    };

    state.reconcile_item_counter();
    Ok(state)
}

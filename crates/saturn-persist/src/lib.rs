//! Persistence for the Saturn colony simulation.
//!
//! The core treats a save as an opaque blob. This crate defines that blob
//! as a versioned JSON snapshot of the full [`GameState`] and provides a
//! single file-backed save slot.
//!
//! # Modules
//!
//! - [`error`] -- [`PersistError`], the failure type for encode, decode,
//!   and file operations.
//! - [`snapshot`] -- Versioned snapshot encode/decode with backfill of
//!   fields missing from older saves.
//! - [`store`] -- [`SaveStore`], an atomic file-backed save slot.
//!
//! [`GameState`]: saturn_types::GameState

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::PersistError;
pub use snapshot::{SNAPSHOT_VERSION, decode, encode};
pub use store::SaveStore;

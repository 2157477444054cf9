//! Shared type definitions for the Saturn colony simulation.
//!
//! This crate is the single source of truth for the data every other crate
//! reads and writes. It holds no simulation logic beyond small accessors on
//! the aggregate state.
//!
//! # Modules
//!
//! - [`enums`] -- Closed enumerations (research kinds, personnel roles,
//!   bonus kinds, blueprint phases, repair targets)
//! - [`ids`] -- Identifiers for blueprints, celestial bodies, and items
//! - [`catalog`] -- Static blueprint and celestial-body definitions
//! - [`state`] -- [`GameState`], the single mutable aggregate
//! - [`journal`] -- Game log entries and the [`LogSink`] seam
//! - [`refusal`] -- [`Refusal`], the precondition type for user actions

pub mod catalog;
pub mod enums;
pub mod ids;
pub mod journal;
pub mod refusal;
pub mod state;

// Re-export all public types at crate root for convenience.
pub use catalog::{BlueprintDef, Bonus, BodyDef, MissionRewards};
pub use enums::{BlueprintPhase, BonusKind, RepairTarget, ResearchKind, Role};
pub use ids::{BlueprintId, BodyId, ItemId, UnknownId};
pub use journal::{Journal, LogEntry, LogSink};
pub use refusal::{Outcome, Refusal};
pub use state::{
    ActiveRewards, Blueprint, GameState, Item, Mission, MonolithState, PendingRepair, Personnel,
    ResearchLevels, now_millis, truncate_millis,
};

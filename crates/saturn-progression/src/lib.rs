//! Multi-stage progression pipelines for the Saturn colony simulation.
//!
//! Each pipeline has user-intent operations (guarded, all-or-nothing) and a
//! day-tick `advance_*` function the tick driver calls once per new day.
//! Durations are counted in game days against a stored start or target
//! day, never with real-time timers, so they resume correctly after a
//! restore.
//!
//! # Modules
//!
//! - [`blueprint`] -- research -> design -> complete
//! - [`production`] -- item production from completed blueprints, assignment
//! - [`mission`] -- exploration missions with ship reservation and rewards
//! - [`monolith`] -- monolith translation storyline
//! - [`survey`] -- cartographer surveys that found remote facilities
//! - [`progress`] -- shared day-based progress arithmetic

pub mod blueprint;
pub mod mission;
pub mod monolith;
pub mod production;
pub mod progress;
pub mod survey;

pub use blueprint::{PhaseChange, advance_blueprints, start_design, start_research};
pub use mission::{available_ships, can_start_mission, complete_missions, start_mission};
pub use monolith::{advance_translation, start_translation, stop_translation};
pub use production::{advance_items, assign_item, produce_item};
pub use survey::attempt_discovery;

//! Game clock, event scheduler, tick driver, and session orchestration for
//! the Saturn colony simulation.
//!
//! Each tick accrues production for the real time elapsed, and when the
//! game day changes runs a fixed day pipeline: upkeep, blueprints, items,
//! translation, repairs, cooldown, events, survey, missions, flavor.
//!
//! # Modules
//!
//! - [`clock`] -- Real-time to game-day conversion.
//! - [`config`] -- Configuration loading from `saturn-config.yaml` into
//!   strongly-typed structs.
//! - [`events`] -- Exploration events, cooldown, and pending repairs.
//! - [`flavor`] -- Cosmetic day and launch lines.
//! - [`projection`] -- Read-only views of the state for presentation.
//! - [`roll`] -- Uniform draws and picks over an injected RNG.
//! - [`runner`] -- Async game loop with autosave.
//! - [`session`] -- [`Session`], one method per player intent.
//! - [`sink`] -- [`TracingSink`], journal entries mirrored to `tracing`.
//! - [`tick`] -- The tick driver and day pipeline.
//!
//! [`Session`]: session::Session
//! [`TracingSink`]: sink::TracingSink

pub mod clock;
pub mod config;
pub mod events;
pub mod flavor;
pub mod projection;
pub mod roll;
pub mod runner;
pub mod session;
pub mod sink;
pub mod tick;

pub use clock::GameClock;
pub use config::SimulationConfig;
pub use events::EventKind;
pub use projection::Projection;
pub use runner::{NoOpCallback, RunSummary, SaveCallback, run_game};
pub use session::{Session, simulation_rng};
pub use tick::{DayReport, TickSummary, run_day, run_tick};

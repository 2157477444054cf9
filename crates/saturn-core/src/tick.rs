//! Tick driver: continuous accrual plus the fixed day-boundary pipeline.
//!
//! Each tick:
//!
//! 1. Measures real seconds since `last_update` and moves `last_update` to
//!    now.
//! 2. Accrues metal and unstable elements for those seconds.
//! 3. Derives the current day from `game_start_time`. If it moved past
//!    `state.day`, sets the new day and runs the day pipeline once, even
//!    when several days were skipped.
//!
//! The day pipeline order is fixed:
//!
//! 1. personnel upkeep
//! 2. blueprint progress
//! 3. item production
//! 4. monolith translation
//! 5. pending repairs
//! 6. event cooldown
//! 7. event scheduler
//! 8. remote-facility survey
//! 9. mission completions
//! 10. flavor text
//!
//! Given the same state and the same random draws, a day produces the
//! same result.

use chrono::{DateTime, Utc};
use rand::Rng;
use saturn_economy::{accrue, pay_upkeep};
use saturn_progression::{
    PhaseChange, advance_blueprints, advance_items, advance_translation, attempt_discovery,
    complete_missions,
};
use saturn_types::{BodyId, GameState, ItemId, LogSink, truncate_millis};
use tracing::{debug, info};

use crate::clock::GameClock;
use crate::events::{self, EventKind};
use crate::flavor;

/// What the day pipeline did.
#[derive(Debug, Clone, PartialEq)]
pub struct DayReport {
    /// The day that was processed.
    pub day: u32,
    /// Metal actually deducted for upkeep.
    pub upkeep_paid: f64,
    /// Blueprint phase changes.
    pub phase_changes: Vec<PhaseChange>,
    /// Items that finished production.
    pub items_finished: Vec<ItemId>,
    /// Whether the monolith translation finished.
    pub translation_finished: bool,
    /// Number of repairs resolved.
    pub repairs_resolved: usize,
    /// The exploration event that fired, if any.
    pub event: Option<EventKind>,
    /// Whether a remote facility was founded.
    pub remote_facility_founded: bool,
    /// Bodies explored by completed missions.
    pub missions_completed: Vec<BodyId>,
    /// Flavor line logged, if any.
    pub flavor: Option<&'static str>,
}

/// Summary of a single tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// Real seconds accrued.
    pub elapsed_seconds: f64,
    /// Metal produced this tick.
    pub metal_produced: f64,
    /// Unstable elements produced this tick.
    pub unstable_produced: f64,
    /// The current day after the tick.
    pub day: u32,
    /// Present when the tick crossed a day boundary.
    pub day_report: Option<DayReport>,
}

/// Run one tick at `now`.
pub fn run_tick(
    state: &mut GameState,
    clock: &GameClock,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
    sink: &mut impl LogSink,
) -> TickSummary {
    let now = truncate_millis(now);
    let elapsed_seconds = GameClock::elapsed_seconds(state.last_update, now);
    state.last_update = now;

    let (metal_produced, unstable_produced) = accrue(state, elapsed_seconds);

    let new_day = clock.day_at(state.game_start_time, now);
    let day_report = if new_day > state.day {
        let skipped = new_day.saturating_sub(state.day).saturating_sub(1);
        if skipped > 0 {
            debug!(from = state.day, to = new_day, skipped, "Skipped days collapsed");
        }
        state.day = new_day;
        Some(run_day(state, rng, sink))
    } else {
        None
    };

    TickSummary {
        elapsed_seconds,
        metal_produced,
        unstable_produced,
        day: state.day,
        day_report,
    }
}

/// Run the day pipeline for `state.day`.
pub fn run_day(state: &mut GameState, rng: &mut impl Rng, sink: &mut impl LogSink) -> DayReport {
    let day = state.day;

    let upkeep_paid = pay_upkeep(state);
    let phase_changes = advance_blueprints(state, sink);
    let items_finished = advance_items(state, sink);
    let translation_finished = advance_translation(state, sink);
    let repairs_resolved = events::resolve_repairs(state, sink);
    events::tick_cooldown(state);
    let event = events::run_scheduler(state, rng, sink);
    let remote_facility_founded = attempt_discovery(state, rng, sink);
    let missions_completed = complete_missions(state, sink);
    let flavor = flavor::day_flavor(state.ships, rng);
    if let Some(line) = flavor {
        sink.log(day, line);
    }

    info!(
        day,
        metal = state.metal,
        upkeep_paid,
        event = event.map(EventKind::name),
        cooldown = state.event_cooldown,
        "Day advanced"
    );

    DayReport {
        day,
        upkeep_paid,
        phase_changes,
        items_finished,
        translation_finished,
        repairs_resolved,
        event,
        remote_facility_founded,
        missions_completed,
        flavor,
    }
}

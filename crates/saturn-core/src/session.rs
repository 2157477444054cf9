//! Session facade: one method per player intent, plus the tick entry
//! point and read-only projections.
//!
//! A [`Session`] owns the [`GameState`], the clock, the random source, the
//! bounded game journal, and deferred cosmetic lines. All mutation goes
//! through `&mut self`, so a tick and a player action can never
//! interleave.
//!
//! Player intents return [`Outcome`]. A refusal leaves the state exactly
//! as it was and adds nothing to the journal; it is only traced at debug
//! level.

use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use saturn_economy as economy;
use saturn_progression as progression;
use saturn_types::{
    BlueprintId, BodyId, GameState, ItemId, Journal, LogSink, Outcome, ResearchKind, Role,
    truncate_millis,
};
use tracing::{debug, info};

use crate::clock::GameClock;
use crate::flavor::{self, DeferredLines};
use crate::projection::Projection;
use crate::sink::TracingSink;
use crate::tick::{self, TickSummary};

/// Lines logged when a new colony starts.
pub const STARTUP_LINES: [&str; 4] = [
    "Systems initialized. Contact with Earth Command has been lost.",
    "All mining systems operational. Metal alloy production nominal.",
    "Awaiting further instructions... none received.",
    "Beginning autonomous operations.",
];

/// Line logged when a saved colony is resumed.
pub const RESUME_LINE: &str = "Resuming from previous session...";

/// Line logged after a reset.
pub const RESET_LINE: &str = "All systems reset to initial state.";

/// Build the simulation RNG: seeded when a seed is given, otherwise from
/// thread-local entropy.
pub fn simulation_rng(seed: Option<u64>) -> SmallRng {
    seed.map_or_else(
        || SmallRng::from_rng(&mut rand::rng()),
        SmallRng::seed_from_u64,
    )
}

/// A running game.
#[derive(Debug)]
pub struct Session<R = SmallRng> {
    state: GameState,
    clock: GameClock,
    rng: R,
    journal: Journal,
    deferred: DeferredLines,
}

impl<R: Rng> Session<R> {
    /// Start a new colony at `now`.
    pub fn new(clock: GameClock, rng: R, journal_capacity: usize, now: DateTime<Utc>) -> Self {
        let mut session = Self {
            state: GameState::new(now),
            clock,
            rng,
            journal: Journal::with_capacity(journal_capacity),
            deferred: DeferredLines::default(),
        };
        session.log_startup();
        info!(start = %session.state.game_start_time, "New colony started");
        session
    }

    /// Resume a restored colony at `now`.
    ///
    /// `last_update` becomes `now`, and `game_start_time` is moved forward
    /// so the in-game time elapsed at save is kept. Time spent offline is
    /// not simulated.
    pub fn resume(
        mut state: GameState,
        clock: GameClock,
        rng: R,
        journal_capacity: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let now = truncate_millis(now);
        let played = state
            .last_update
            .signed_duration_since(state.game_start_time)
            .max(TimeDelta::zero());
        state.game_start_time = now.checked_sub_signed(played).unwrap_or(now);
        state.last_update = now;
        state.reconcile_item_counter();

        let mut session = Self {
            state,
            clock,
            rng,
            journal: Journal::with_capacity(journal_capacity),
            deferred: DeferredLines::default(),
        };
        let day = session.state.day;
        session.sink().log(day, RESUME_LINE);
        info!(day, metal = session.state.metal, "Colony resumed");
        session
    }

    /// Throw the colony away and start over at `now`.
    ///
    /// The journal and deferred lines are cleared. Removing any stored
    /// save is the caller's job.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.state = GameState::new(now);
        self.journal.clear();
        self.deferred.clear();
        self.log_startup();
        self.sink().log(1, RESET_LINE);
        info!("Colony reset");
    }

    /// The current state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the session, returning the state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// The game clock.
    pub const fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// The game journal, newest entry first.
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Cosmetic lines waiting to be shown.
    pub const fn deferred(&self) -> &DeferredLines {
        &self.deferred
    }

    /// Read-only projection of the current state.
    pub fn projection(&self) -> Projection {
        Projection::of(&self.state)
    }

    /// Advance the simulation to `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickSummary {
        let due = self.deferred.take_due(now);
        let day = self.state.day;
        for line in due {
            self.sink().log(day, line);
        }

        let mut sink = TracingSink::new(&mut self.journal);
        tick::run_tick(&mut self.state, &self.clock, now, &mut self.rng, &mut sink)
    }

    /// Build a mining facility. Returns the new facility count.
    pub fn build_facility(&mut self) -> Outcome<u32> {
        let facilities = refused(economy::build_facility(&mut self.state), "build facility")?;
        self.log(format!(
            "New mining facility constructed. Total facilities: {facilities}"
        ));
        Ok(facilities)
    }

    /// Build an explorer ship. Returns the new fleet size.
    ///
    /// A new ship sometimes reports a discovery a couple of seconds after
    /// `now`; the line is shown by the first tick at or after that time.
    pub fn build_ship(&mut self, now: DateTime<Utc>) -> Outcome<u32> {
        let ships = refused(economy::build_ship(&mut self.state), "build ship")?;
        self.log(format!("Explorer ship launched. Fleet size: {ships}"));
        if let Some(line) = flavor::launch_discovery(&mut self.rng) {
            self.deferred.schedule_launch_line(now, line);
        }
        Ok(ships)
    }

    /// Buy the next level of a research track. Returns the new level.
    pub fn conduct_research(&mut self, kind: ResearchKind) -> Outcome<u32> {
        let level = refused(
            economy::conduct_research(&mut self.state, kind),
            "conduct research",
        )?;
        self.log(format!(
            "{} research completed. Level {level} achieved.",
            kind.display_name()
        ));
        Ok(level)
    }

    /// Hire one person. Returns the new headcount.
    pub fn hire(&mut self, role: Role) -> Outcome<u32> {
        let count = refused(economy::hire(&mut self.state, role), "hire")?;
        self.log(format!(
            "Hired a new {}. On staff: {count}.",
            role.display_name()
        ));
        Ok(count)
    }

    /// Let one person go. Returns the new headcount.
    pub fn fire(&mut self, role: Role) -> Outcome<u32> {
        let count = refused(economy::fire(&mut self.state, role), "fire")?;
        self.log(format!(
            "Released one {}. On staff: {count}.",
            role.display_name()
        ));
        Ok(count)
    }

    /// Start researching a blueprint.
    pub fn start_blueprint_research(&mut self, id: BlueprintId) -> Outcome {
        refused(
            progression::start_research(&mut self.state, id),
            "start blueprint research",
        )?;
        self.log(format!(
            "Research started on {}.",
            id.definition().name
        ));
        Ok(())
    }

    /// Start designing a researched blueprint.
    pub fn start_blueprint_design(&mut self, id: BlueprintId) -> Outcome {
        refused(
            progression::start_design(&mut self.state, id),
            "start blueprint design",
        )?;
        self.log(format!("Engineers started the {} design.", id.definition().name));
        Ok(())
    }

    /// Produce one item of a completed blueprint. Returns the item id.
    pub fn produce_item(&mut self, blueprint: BlueprintId) -> Outcome<ItemId> {
        let id = refused(
            progression::produce_item(&mut self.state, blueprint),
            "produce item",
        )?;
        self.log(format!(
            "Production started: {} ({id}).",
            blueprint.definition().name
        ));
        Ok(id)
    }

    /// Toggle a finished item's assignment. Returns the new flag.
    pub fn assign_item(&mut self, id: ItemId) -> Outcome<bool> {
        let assigned = refused(progression::assign_item(&mut self.state, id), "assign item")?;
        let name = self
            .state
            .item(id)
            .map_or("Item", |item| item.blueprint.definition().name);
        let verb = if assigned { "assigned" } else { "unassigned" };
        self.log(format!("{name} ({id}) {verb}."));
        Ok(assigned)
    }

    /// Launch a mission. Returns its completion day.
    pub fn start_mission(&mut self, body: BodyId) -> Outcome<u32> {
        let mut sink = TracingSink::new(&mut self.journal);
        refused(
            progression::start_mission(&mut self.state, body, &mut sink),
            "start mission",
        )
    }

    /// Put the current researchers on the monolith.
    pub fn start_translation(&mut self) -> Outcome {
        let mut sink = TracingSink::new(&mut self.journal);
        refused(
            progression::start_translation(&mut self.state, &mut sink),
            "start translation",
        )
    }

    /// Pause the monolith translation.
    pub fn stop_translation(&mut self) -> Outcome {
        let mut sink = TracingSink::new(&mut self.journal);
        refused(
            progression::stop_translation(&mut self.state, &mut sink),
            "stop translation",
        )
    }

    fn sink(&mut self) -> TracingSink<'_, Journal> {
        TracingSink::new(&mut self.journal)
    }

    fn log(&mut self, message: String) {
        let day = self.state.day;
        self.sink().log(day, message);
    }

    fn log_startup(&mut self) {
        let day = self.state.day;
        for line in STARTUP_LINES {
            self.sink().log(day, line);
        }
    }
}

/// Trace a refusal and pass the outcome through.
fn refused<T>(outcome: Outcome<T>, intent: &str) -> Outcome<T> {
    if let Err(refusal) = &outcome {
        debug!(intent, %refusal, "Intent refused");
    }
    outcome
}

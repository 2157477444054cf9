//! Async game loop with autosave.
//!
//! [`run_game`] drives [`Session::tick`] on a fixed real-time interval and
//! hands the state to a [`SaveCallback`] on a second, independent
//! interval. Both timers are selected on one task, so a save always sees
//! a state between ticks, never a partial one. The loop ends when the
//! shutdown future resolves.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use saturn_types::{GameState, now_millis};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::session::Session;
use crate::tick::TickSummary;

/// Receives the state on each autosave, and optionally after each tick.
pub trait SaveCallback: Send {
    /// Called on every autosave interval. Failures are the callback's to
    /// report; the game keeps running.
    fn save(&mut self, state: &GameState);

    /// Called after every tick.
    fn on_tick(&mut self, _summary: &TickSummary, _state: &GameState) {}
}

/// A callback that does nothing, for tests and unsaved runs.
pub struct NoOpCallback;

impl SaveCallback for NoOpCallback {
    fn save(&mut self, _state: &GameState) {}
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks executed.
    pub ticks: u64,
    /// Autosaves handed to the callback.
    pub autosaves: u64,
    /// Day when the run stopped.
    pub final_day: u32,
}

/// Run the game until `shutdown` resolves.
pub async fn run_game<R, F>(
    session: &mut Session<R>,
    config: &SimulationConfig,
    callback: &mut dyn SaveCallback,
    shutdown: F,
) -> RunSummary
where
    R: Rng,
    F: Future<Output = ()>,
{
    let tick_every = Duration::from_millis(config.time.tick_interval_ms.max(1));
    let mut ticker = tokio::time::interval(tick_every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let autosave_every = Duration::from_secs(config.time.autosave_interval_secs.max(1));
    let first_save = Instant::now()
        .checked_add(autosave_every)
        .unwrap_or_else(Instant::now);
    let mut autosave = tokio::time::interval_at(first_save, autosave_every);
    autosave.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let autosave_enabled = config.persistence.autosave;

    let mut ticks: u64 = 0;
    let mut autosaves: u64 = 0;

    info!(
        tick_interval_ms = config.time.tick_interval_ms,
        autosave_interval_secs = config.time.autosave_interval_secs,
        autosave_enabled,
        day = session.state().day,
        "Game loop starting"
    );

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            biased;

            () = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }

            _ = ticker.tick() => {
                let summary = session.tick(now_millis());
                ticks = ticks.saturating_add(1);
                callback.on_tick(&summary, session.state());
            }

            _ = autosave.tick(), if autosave_enabled => {
                callback.save(session.state());
                autosaves = autosaves.saturating_add(1);
                debug!(day = session.state().day, "Autosaved");
            }
        }
    }

    let summary = RunSummary {
        ticks,
        autosaves,
        final_day: session.state().day,
    };
    info!(
        ticks = summary.ticks,
        autosaves = summary.autosaves,
        final_day = summary.final_day,
        "Game loop stopped"
    );
    summary
}

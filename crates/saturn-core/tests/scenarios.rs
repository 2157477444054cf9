//! Integration tests for the `saturn-core` day pipeline and session.
//!
//! Random decisions are driven by a scripted source that replays a fixed
//! list of draws, so each scenario pins down exactly which branch the
//! scheduler, survey, and flavor steps take.

// Integration tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rand::RngCore;
use saturn_core::events::{self, EventKind};
use saturn_core::{GameClock, Session, run_day};
use saturn_types::{
    Blueprint, BlueprintId, BlueprintPhase, BodyId, GameState, Item, ItemId, LogEntry, Mission,
};

// =============================================================================
// Scripted random source
// =============================================================================

/// Replays a fixed list of `[0, 1)` draws, then yields zero.
struct ScriptedRng {
    draws: VecDeque<f64>,
}

impl ScriptedRng {
    fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let high = (self.next_u64() >> 32) as u32;
        high
    }

    // A uniform f64 keeps the top 53 bits of a u64, so placing the draw
    // there makes `random::<f64>()` return it exactly.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn next_u64(&mut self) -> u64 {
        let draw = self.draws.pop_front().unwrap_or(0.0);
        ((draw * (1_u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst {
            *byte = 0;
        }
    }
}

fn at(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap()
}

fn messages(log: &[LogEntry]) -> Vec<&str> {
    log.iter().map(|entry| entry.message.as_str()).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================================
// Event scheduler
// =============================================================================

#[test]
fn low_draws_fire_a_positive_event_with_cooldown() {
    let mut state = GameState::new(at(0));
    state.ships = 5;
    state.research.exploration = 2;
    state.monolith.discovered = true;
    let mut log: Vec<LogEntry> = Vec::new();

    // trigger 0.40 < 0.45, positive 0.50 < 0.76, first positive event,
    // cooldown floor(0.5 * 3) + 1.
    let mut rng = ScriptedRng::new(&[0.40, 0.50, 0.0, 0.5]);
    let fired = events::run_scheduler(&mut state, &mut rng, &mut log);

    assert_eq!(fired, Some(EventKind::AbandonedResearchStation));
    assert_eq!(state.event_cooldown, 2);
    assert!(close(state.active_rewards.exploration_bonus, 0.20));
    assert_eq!(log.len(), 1);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn high_trigger_draw_fires_nothing_and_keeps_rolling() {
    let mut state = GameState::new(at(0));
    state.ships = 5;
    state.research.exploration = 2;
    state.monolith.discovered = true;
    let mut log: Vec<LogEntry> = Vec::new();

    let mut rng = ScriptedRng::new(&[0.46, 0.0]);
    assert_eq!(events::run_scheduler(&mut state, &mut rng, &mut log), None);
    assert_eq!(state.event_cooldown, 0);
    assert!(log.is_empty());
    // Only the trigger draw was consumed.
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn negative_pool_picks_by_draw() {
    let mut state = GameState::new(at(0));
    state.day = 10;
    state.ships = 1;
    state.monolith.discovered = true;
    state.active_rewards.production_bonus = 0.15;
    let mut log: Vec<LogEntry> = Vec::new();

    // positive chance is 0.70, so 0.90 selects the negative pool; 0.25 of
    // five entries is the second one.
    let mut rng = ScriptedRng::new(&[0.0, 0.90, 0.25, 0.99]);
    let fired = events::run_scheduler(&mut state, &mut rng, &mut log);
    assert_eq!(fired, Some(EventKind::EquipmentMalfunction));
    assert_eq!(state.event_cooldown, 3);
    assert!(close(state.active_rewards.production_bonus, 0.05));
    assert_eq!(state.pending_repairs.first().unwrap().completion_day, 12);
}

// =============================================================================
// Day pipeline
// =============================================================================

#[test]
fn day_pipeline_runs_in_fixed_order() {
    let mut state = GameState::new(at(0));
    state.day = 10;
    state.metal = 10_000.0;
    state.ships = 3;
    state.research.exploration = 1;
    state.monolith.discovered = true;

    // Research started two days ago finishes today.
    state.blueprints.push(Blueprint::started(BlueprintId::MiningDrone, 8));
    // An item started yesterday finishes today.
    let item = state.next_item_id();
    state.items.push(Item {
        id: item,
        blueprint: BlueprintId::MiningDrone,
        assigned: false,
        production_progress: 0.0,
        production_start_day: 9,
    });
    // A malfunction from day 8 is repaired today.
    state.day = 8;
    events::EventKind::EquipmentMalfunction.apply(&mut state);
    state.day = 10;
    // A Pan mission lands today.
    state.active_missions.push(Mission {
        body_id: BodyId::Pan,
        ships_used: 1,
        start_day: 9,
        completion_day: 10,
    });

    // trigger, positive, index, cooldown, then a flavor miss.
    let mut rng = ScriptedRng::new(&[0.0, 0.0, 0.0, 0.0, 0.99]);
    let mut log: Vec<LogEntry> = Vec::new();
    let report = run_day(&mut state, &mut rng, &mut log);

    assert_eq!(report.day, 10);
    assert_eq!(report.phase_changes.len(), 1);
    assert_eq!(report.items_finished, vec![ItemId(1)]);
    assert_eq!(report.repairs_resolved, 1);
    assert_eq!(report.event, Some(EventKind::AbandonedResearchStation));
    assert!(!report.remote_facility_founded);
    assert_eq!(report.missions_completed, vec![BodyId::Pan]);
    assert_eq!(report.flavor, None);
    assert_eq!(rng.remaining(), 0);

    let lines = messages(&log);
    assert_eq!(lines.len(), 5);
    assert!(lines.first().unwrap().contains("research complete"));
    assert!(lines.get(1).unwrap().contains("production complete"));
    assert_eq!(
        *lines.get(2).unwrap(),
        "Repairs completed. Production systems back to normal."
    );
    assert!(lines.get(3).unwrap().contains("abandoned research station"));
    assert!(lines.get(4).unwrap().starts_with("Mission to Pan complete!"));

    assert_eq!(
        state.blueprint(BlueprintId::MiningDrone).unwrap().phase,
        BlueprintPhase::ResearchComplete
    );
    assert!(state.explored_bodies.contains(&BodyId::Pan));
    assert!(state.active_rewards.production_bonus.abs() < 1e-9);
}

#[test]
fn malfunction_on_day_ten_is_repaired_on_day_twelve() {
    let mut state = GameState::new(at(0));
    state.ships = 1;
    state.monolith.discovered = true;
    state.active_rewards.production_bonus = 0.15;

    state.day = 10;
    let mut rng = ScriptedRng::new(&[0.0, 0.90, 0.25, 0.0, 0.99]);
    let mut log: Vec<LogEntry> = Vec::new();
    let report = run_day(&mut state, &mut rng, &mut log);
    assert_eq!(report.event, Some(EventKind::EquipmentMalfunction));
    assert_eq!(state.event_cooldown, 1);
    assert!(close(state.active_rewards.production_bonus, 0.05));

    // Day 11: cooldown drops to zero, a high draw fires nothing.
    state.day = 11;
    let mut rng = ScriptedRng::new(&[0.99, 0.99]);
    let report = run_day(&mut state, &mut rng, &mut log);
    assert_eq!(report.repairs_resolved, 0);
    assert!(close(state.active_rewards.production_bonus, 0.05));

    state.day = 12;
    let mut rng = ScriptedRng::new(&[0.99, 0.99]);
    let report = run_day(&mut state, &mut rng, &mut log);
    assert_eq!(report.repairs_resolved, 1);
    assert!(close(state.active_rewards.production_bonus, 0.15));
    assert!(state.pending_repairs.is_empty());
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn mission_lands_through_session_ticks() {
    let day_ms = 60_000;
    // A colony started at t=0 that reached day 5 with a fleet and the
    // research for Enceladus.
    let mut state = GameState::new(at(0));
    state.day = 5;
    state.ships = 5;
    state.research.exploration = 2;
    state.monolith.discovered = true;
    state.last_update = at(4 * day_ms);
    let mut session = Session::resume(
        state,
        GameClock::default(),
        ScriptedRng::new(&[0.99; 16]),
        50,
        at(4 * day_ms),
    );

    assert_eq!(session.start_mission(BodyId::Enceladus), Ok(7));
    assert_eq!(saturn_progression::available_ships(session.state()), 3);

    // Day 6: still in transit.
    let summary = session.tick(at(5 * day_ms));
    assert_eq!(summary.day, 6);
    assert!(summary.day_report.unwrap().missions_completed.is_empty());

    // Day 7: lands.
    let summary = session.tick(at(6 * day_ms));
    assert_eq!(summary.day, 7);
    let report = summary.day_report.unwrap();
    assert_eq!(report.missions_completed, vec![BodyId::Enceladus]);
    assert!(session.state().explored_bodies.contains(&BodyId::Enceladus));
    assert!(session.state().active_missions.is_empty());
    assert!(
        session
            .journal()
            .latest()
            .unwrap()
            .message
            .starts_with("Mission to Enceladus complete!")
    );
}

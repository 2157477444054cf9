//! Integration tests for the `saturn-progression` pipelines.
//!
//! These drive several pipelines together across multiple days the way
//! the tick driver does, checking that they compose through the shared
//! economy (rates, costs, rewards).

// Integration tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use chrono::DateTime;
use saturn_economy::{exploration_multiplier, production_rate};
use saturn_progression::{
    advance_blueprints, advance_items, assign_item, complete_missions, produce_item,
    start_design, start_mission, start_research,
};
use saturn_types::{BlueprintId, BlueprintPhase, BodyId, GameState, LogEntry};

fn colony() -> GameState {
    let mut state = GameState::new(DateTime::from_timestamp_millis(0).unwrap());
    state.metal = 20_000.0;
    state.personnel.researchers = 1;
    state.personnel.engineers = 1;
    state.personnel.workers = 1;
    state
}

/// Advance to `day` and run the day-tick steps these pipelines own.
fn run_day(state: &mut GameState, day: u32, log: &mut Vec<LogEntry>) {
    state.day = day;
    advance_blueprints(state, log);
    advance_items(state, log);
    complete_missions(state, log);
}

// =============================================================================
// Blueprint -> item -> assignment
// =============================================================================

#[test]
fn drone_from_research_to_assigned_bonus() {
    let mut state = colony();
    let mut log = Vec::new();

    start_research(&mut state, BlueprintId::MiningDrone).unwrap();
    run_day(&mut state, 3, &mut log);
    assert_eq!(
        state.blueprint(BlueprintId::MiningDrone).unwrap().phase,
        BlueprintPhase::ResearchComplete
    );

    start_design(&mut state, BlueprintId::MiningDrone).unwrap();
    run_day(&mut state, 4, &mut log);
    assert!(produce_item(&mut state, BlueprintId::MiningDrone).is_err());
    run_day(&mut state, 5, &mut log);
    assert_eq!(
        state.blueprint(BlueprintId::MiningDrone).unwrap().phase,
        BlueprintPhase::Complete
    );

    let id = produce_item(&mut state, BlueprintId::MiningDrone).unwrap();
    let before = production_rate(&state);
    run_day(&mut state, 6, &mut log);
    assert!((production_rate(&state) - before).abs() < 1e-9);

    assert_eq!(assign_item(&mut state, id), Ok(true));
    assert!((production_rate(&state) - before * 1.05).abs() < 1e-9);

    // research, design, item completion lines
    assert_eq!(log.len(), 3);
}

#[test]
fn probe_items_raise_exploration_multiplier() {
    let mut state = colony();
    let mut log = Vec::new();
    start_research(&mut state, BlueprintId::SurveyProbe).unwrap();
    run_day(&mut state, 3, &mut log);
    start_design(&mut state, BlueprintId::SurveyProbe).unwrap();
    run_day(&mut state, 5, &mut log);
    let first = produce_item(&mut state, BlueprintId::SurveyProbe).unwrap();
    let second = produce_item(&mut state, BlueprintId::SurveyProbe).unwrap();
    run_day(&mut state, 6, &mut log);
    assign_item(&mut state, first).unwrap();
    assign_item(&mut state, second).unwrap();
    assert!((exploration_multiplier(&state) - 1.16).abs() < 1e-9);
}

// =============================================================================
// Missions
// =============================================================================

#[test]
fn concurrent_missions_complete_independently() {
    let mut state = colony();
    state.ships = 3;
    state.research.exploration = 1;
    let mut log = Vec::new();

    start_mission(&mut state, BodyId::Pan, &mut log).unwrap();
    start_mission(&mut state, BodyId::Mimas, &mut log).unwrap();
    let metal = state.metal;

    run_day(&mut state, 2, &mut log);
    assert!(state.explored_bodies.contains(&BodyId::Pan));
    assert!(!state.explored_bodies.contains(&BodyId::Mimas));
    assert!((state.metal - metal - 500.0).abs() < 1e-9);

    run_day(&mut state, 3, &mut log);
    assert!(state.explored_bodies.contains(&BodyId::Mimas));
    assert!(state.active_missions.is_empty());
    assert!((state.active_rewards.exploration_bonus - 0.05).abs() < 1e-9);
}

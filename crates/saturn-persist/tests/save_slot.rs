//! Integration tests for the `saturn-persist` save slot.
//!
//! Each test writes to its own uniquely named file under the OS temp
//! directory and removes it afterwards.

// Integration tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::PathBuf;

use chrono::DateTime;
use saturn_persist::{PersistError, SaveStore};
use saturn_types::{
    Blueprint, BlueprintId, BlueprintPhase, BodyId, GameState, Item, Mission, PendingRepair,
    RepairTarget,
};

fn temp_save() -> PathBuf {
    std::env::temp_dir().join(format!("saturn-save-{}.json", uuid::Uuid::new_v4()))
}

/// A mid-game colony touching every nested record.
fn colony() -> GameState {
    let mut state = GameState::new(DateTime::from_timestamp_millis(1_700_000_000_000).unwrap());
    state.metal = 4_096.5;
    state.unstable_elements = 12.25;
    state.facilities = 4;
    state.ships = 5;
    state.remote_facilities = 1;
    state.discovery_progress = 35;
    state.research.exploration = 2;
    state.personnel.researchers = 2;
    state.personnel.cartographers = 1;
    state.day = 12;
    state.event_cooldown = 2;
    state.active_rewards.production_bonus = 0.25;
    state.active_rewards.exploration_bonus = -0.125;
    state.pending_repairs.push(PendingRepair {
        target: RepairTarget::Exploration,
        amount: 0.125,
        completion_day: 13,
    });
    let mut blueprint = Blueprint::started(BlueprintId::MiningDrone, 3);
    blueprint.phase = BlueprintPhase::Complete;
    blueprint.research_progress = 100.0;
    blueprint.design_progress = 100.0;
    state.blueprints.push(blueprint);
    let id = state.next_item_id();
    state.items.push(Item {
        id,
        blueprint: BlueprintId::MiningDrone,
        assigned: true,
        production_progress: 100.0,
        production_start_day: 8,
    });
    state.explored_bodies.insert(BodyId::Pan);
    state.active_missions.push(Mission {
        body_id: BodyId::Mimas,
        ships_used: 2,
        start_day: 11,
        completion_day: 13,
    });
    state.monolith.discovered = true;
    state.monolith.translation_progress = 37.5;
    state.monolith.researchers_assigned = 2;
    state
}

#[test]
fn save_then_load_restores_the_same_state() {
    let path = temp_save();
    let store = SaveStore::new(&path);
    let state = colony();

    store.save(&state).unwrap();
    let restored = store.load().unwrap().unwrap();
    assert_eq!(restored, state);

    store.clear().unwrap();
}

#[test]
fn missing_save_loads_as_none() {
    let store = SaveStore::new(temp_save());
    assert!(store.load().unwrap().is_none());
    // Clearing an empty slot is fine too.
    store.clear().unwrap();
}

#[test]
fn clear_removes_the_slot() {
    let path = temp_save();
    let store = SaveStore::new(&path);
    store.save(&colony()).unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn save_overwrites_and_leaves_no_temp_file() {
    let path = temp_save();
    let store = SaveStore::new(&path);
    let mut state = colony();
    store.save(&state).unwrap();
    state.day = 20;
    store.save(&state).unwrap();

    assert_eq!(store.load().unwrap().unwrap().day, 20);
    let mut tmp = path.clone().into_os_string();
    tmp.push(".tmp");
    assert!(!PathBuf::from(tmp).exists());

    store.clear().unwrap();
}

#[test]
fn corrupt_save_is_reported() {
    let path = temp_save();
    std::fs::write(&path, "{ truncated").unwrap();
    let store = SaveStore::new(&path);
    assert!(matches!(store.load(), Err(PersistError::Json(_))));
    store.clear().unwrap();
}

#[test]
fn unreadable_save_can_be_set_aside() {
    let path = temp_save();
    std::fs::write(&path, "{ truncated").unwrap();
    let store = SaveStore::new(&path);

    let moved = store.set_aside().unwrap();
    assert!(!path.exists());
    assert_eq!(std::fs::read_to_string(&moved).unwrap(), "{ truncated");
    assert!(store.load().unwrap().is_none());

    std::fs::remove_file(moved).unwrap();
}

#[test]
fn accumulated_fractions_survive_a_save_exactly() {
    let path = temp_save();
    let store = SaveStore::new(&path);
    let mut state = colony();

    // Values built the way ticks build them, none of them binary-exact.
    for step in 1..=2_000_u32 {
        state.metal += 1.37 * 0.1;
        state.unstable_elements = f64::from(step) / 7.0;
        state.monolith.translation_progress += 0.3;
        state.active_rewards.production_bonus = 0.15 + 0.10 - (f64::from(step) % 3.0) * 0.05;
        state.active_rewards.exploration_bonus = -f64::from(step) / 3.0e3;

        store.save(&state).unwrap();
        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.metal.to_bits(), state.metal.to_bits(), "step {step}");
        assert_eq!(restored, state, "step {step}");
    }

    store.clear().unwrap();
}

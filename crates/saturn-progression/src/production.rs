//! Item production from completed blueprints and item assignment.
//!
//! A produced item counts toward rates only while it is both finished
//! (`production_progress == 100`) and assigned.

use saturn_economy::try_spend;
use saturn_types::{
    BlueprintId, BlueprintPhase, GameState, Item, ItemId, LogSink, Outcome, Refusal, Role,
};
use tracing::{debug, info};

use crate::progress::{is_complete, percent_elapsed};

/// Start producing one item of a completed blueprint. Returns the new
/// item's id.
///
/// # Errors
///
/// - [`Refusal::BlueprintNotStarted`] if the blueprint does not exist
/// - [`Refusal::WrongPhase`] unless the blueprint is `Complete`
/// - [`Refusal::MissingPersonnel`] without a worker
/// - [`Refusal::InsufficientMetal`] if the production cost is unaffordable
pub fn produce_item(state: &mut GameState, blueprint: BlueprintId) -> Outcome<ItemId> {
    let phase = state
        .blueprint(blueprint)
        .map(|bp| bp.phase)
        .ok_or(Refusal::BlueprintNotStarted(blueprint))?;
    if phase != BlueprintPhase::Complete {
        return Err(Refusal::WrongPhase {
            blueprint,
            expected: BlueprintPhase::Complete,
            actual: phase,
        });
    }
    if state.personnel.workers == 0 {
        return Err(Refusal::MissingPersonnel { role: Role::Worker });
    }
    try_spend(state, blueprint.definition().production_cost)?;

    let id = state.next_item_id();
    state.items.push(Item {
        id,
        blueprint,
        assigned: false,
        production_progress: 0.0,
        production_start_day: state.day,
    });
    info!(item = %id, %blueprint, day = state.day, "Item production started");
    Ok(id)
}

/// Toggle whether a finished item is assigned. Returns the new
/// assignment flag.
///
/// # Errors
///
/// - [`Refusal::UnknownItem`] if no item has this id
/// - [`Refusal::ItemNotReady`] while the item is still in production
pub fn assign_item(state: &mut GameState, id: ItemId) -> Outcome<bool> {
    let item = state.item_mut(id).ok_or(Refusal::UnknownItem(id))?;
    if !item.is_ready() {
        return Err(Refusal::ItemNotReady(id));
    }
    item.assigned = !item.assigned;
    debug!(item = %id, assigned = item.assigned, "Item assignment toggled");
    Ok(item.assigned)
}

/// Advance production of every unfinished item. Returns the ids of items
/// that finished today.
pub fn advance_items(state: &mut GameState, sink: &mut impl LogSink) -> Vec<ItemId> {
    let day = state.day;
    let mut finished = Vec::new();

    for item in state.items.iter_mut().filter(|item| !item.is_ready()) {
        let def = item.blueprint.definition();
        let progress = percent_elapsed(day, item.production_start_day, def.production_days);
        item.production_progress = item.production_progress.max(progress);
        if is_complete(item.production_progress) {
            item.production_progress = 100.0;
            sink.log(
                day,
                format!("{} production complete. Ready for assignment.", def.name),
            );
            finished.push(item.id);
        }
    }

    finished
}

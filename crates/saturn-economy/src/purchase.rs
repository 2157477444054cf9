//! Purchases: facilities, ships, and research levels.
//!
//! Each purchase is all-or-nothing. If metal is below the cost, nothing
//! changes and [`Refusal::InsufficientMetal`] is returned; otherwise the
//! cost is debited and the counter incremented together.

use saturn_types::{GameState, Outcome, Refusal, ResearchKind};
use tracing::debug;

use crate::costs;

/// Debit `cost` metal if the state can afford it.
///
/// # Errors
///
/// Returns [`Refusal::InsufficientMetal`] (state untouched) when
/// `metal < cost`.
pub fn try_spend(state: &mut GameState, cost: f64) -> Outcome {
    if state.metal < cost {
        return Err(Refusal::InsufficientMetal {
            needed: cost,
            available: state.metal,
        });
    }
    state.debit_metal(cost);
    Ok(())
}

/// Build one mining facility. Returns the new facility count.
///
/// # Errors
///
/// Returns [`Refusal::InsufficientMetal`] if the facility is unaffordable.
pub fn build_facility(state: &mut GameState) -> Outcome<u32> {
    let cost = costs::next_facility_cost(state);
    try_spend(state, cost)?;
    state.facilities = state.facilities.saturating_add(1);
    debug!(cost, facilities = state.facilities, "Facility built");
    Ok(state.facilities)
}

/// Build one explorer ship. Returns the new fleet size.
///
/// # Errors
///
/// Returns [`Refusal::InsufficientMetal`] if the ship is unaffordable.
pub fn build_ship(state: &mut GameState) -> Outcome<u32> {
    let cost = costs::next_ship_cost(state);
    try_spend(state, cost)?;
    state.ships = state.ships.saturating_add(1);
    debug!(cost, ships = state.ships, "Ship built");
    Ok(state.ships)
}

/// Buy the next level of a research track. Returns the new level.
///
/// # Errors
///
/// Returns [`Refusal::InsufficientMetal`] if the level is unaffordable.
pub fn conduct_research(state: &mut GameState, kind: ResearchKind) -> Outcome<u32> {
    let cost = costs::next_research_cost(state, kind);
    try_spend(state, cost)?;
    let level = state.research.level_mut(kind);
    *level = level.saturating_add(1);
    let level = *level;
    debug!(?kind, cost, level, "Research level gained");
    Ok(level)
}

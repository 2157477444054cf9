//! Cost scaling for facilities, ships, and research.
//!
//! All costs are whole metal amounts:
//!
//! - facility: `floor(100 * 1.5^(facilities - 1))`
//! - ship: `floor(50 * 1.4^ships)`
//! - research: `floor(base * 2^level)` with bases 200 / 300 / 500 for
//!   production / exploration / automation

use saturn_types::{GameState, ResearchKind};

/// Cost of the second facility (the first is free).
pub const FACILITY_BASE_COST: f64 = 100.0;

/// Growth factor per facility owned.
pub const FACILITY_COST_GROWTH: f64 = 1.5;

/// Cost of the first ship.
pub const SHIP_BASE_COST: f64 = 50.0;

/// Growth factor per ship owned.
pub const SHIP_COST_GROWTH: f64 = 1.4;

/// Growth factor per research level.
pub const RESEARCH_COST_GROWTH: f64 = 2.0;

/// `base * growth^exponent`, floored.
fn scaled(base: f64, growth: f64, exponent: u32) -> f64 {
    let exponent = i32::try_from(exponent).unwrap_or(i32::MAX);
    (base * growth.powi(exponent)).floor()
}

/// Cost of the next facility when `facilities` are already owned.
pub fn facility_cost(facilities: u32) -> f64 {
    scaled(
        FACILITY_BASE_COST,
        FACILITY_COST_GROWTH,
        facilities.saturating_sub(1),
    )
}

/// Cost of the next ship when `ships` are already owned.
pub fn ship_cost(ships: u32) -> f64 {
    scaled(SHIP_BASE_COST, SHIP_COST_GROWTH, ships)
}

/// Cost of the next level of a research track currently at `level`.
pub fn research_cost(kind: ResearchKind, level: u32) -> f64 {
    scaled(kind.base_cost(), RESEARCH_COST_GROWTH, level)
}

/// Cost of the next facility for this state.
pub fn next_facility_cost(state: &GameState) -> f64 {
    facility_cost(state.facilities)
}

/// Cost of the next ship for this state.
pub fn next_ship_cost(state: &GameState) -> f64 {
    ship_cost(state.ships)
}

/// Cost of the next research level of `kind` for this state.
pub fn next_research_cost(state: &GameState, kind: ResearchKind) -> f64 {
    research_cost(kind, state.research.level(kind))
}

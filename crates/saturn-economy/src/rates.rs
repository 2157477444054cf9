//! Production rates and continuous resource accrual.
//!
//! Metal production per second:
//!
//! ```text
//! facilities * 1.0
//!     * (1 + 0.25 * production_level)
//!     * (1 + 0.15 * automation_level)
//!     * (1 + production_bonus)
//!     * (1 + sum of assigned item production bonuses)
//! ```
//!
//! Facility-production item bonuses count toward the production sum.

use saturn_types::{BonusKind, GameState};

/// Metal per second produced by one facility before multipliers.
pub const BASE_PRODUCTION_RATE: f64 = 1.0;

/// Production multiplier gained per Production Efficiency level.
pub const PRODUCTION_RESEARCH_STEP: f64 = 0.25;

/// Production multiplier gained per Automated Systems level.
pub const AUTOMATION_RESEARCH_STEP: f64 = 0.15;

/// Unstable elements per second produced by one remote facility.
pub const UNSTABLE_ELEMENTS_PER_REMOTE_FACILITY: f64 = 0.5;

/// Sum of bonus values over assigned, fully produced items whose bonus
/// kind satisfies `include`.
pub fn item_bonus_total(state: &GameState, include: impl Fn(BonusKind) -> bool) -> f64 {
    state
        .items
        .iter()
        .filter(|item| item.assigned && item.is_ready())
        .map(|item| item.blueprint.definition().bonus)
        .filter(|bonus| include(bonus.kind))
        .map(|bonus| bonus.value)
        .sum()
}

/// Multiplier contributed by assigned production items (1.0 when none).
pub fn item_production_bonus(state: &GameState) -> f64 {
    1.0 + item_bonus_total(state, BonusKind::feeds_production)
}

/// Current metal production per second.
pub fn production_rate(state: &GameState) -> f64 {
    let base = f64::from(state.facilities) * BASE_PRODUCTION_RATE;
    let research = 1.0 + f64::from(state.research.production) * PRODUCTION_RESEARCH_STEP;
    let automation = 1.0 + f64::from(state.research.automation) * AUTOMATION_RESEARCH_STEP;
    let rewards = 1.0 + state.active_rewards.production_bonus;
    base * research * automation * rewards * item_production_bonus(state)
}

/// Current unstable-element production per second.
pub fn unstable_elements_rate(state: &GameState) -> f64 {
    f64::from(state.remote_facilities) * UNSTABLE_ELEMENTS_PER_REMOTE_FACILITY
}

/// Exploration effectiveness multiplier from event rewards and assigned
/// exploration items. Never negative.
pub fn exploration_multiplier(state: &GameState) -> f64 {
    let items = item_bonus_total(state, BonusKind::feeds_exploration);
    (1.0 + state.active_rewards.exploration_bonus + items).max(0.0)
}

/// Accrue `seconds` of production into the state's resources.
///
/// Returns `(metal_added, unstable_elements_added)`. Negative rates (a
/// deep enough production penalty) never drain stock below zero.
pub fn accrue(state: &mut GameState, seconds: f64) -> (f64, f64) {
    let seconds = seconds.max(0.0);
    let metal = (production_rate(state) * seconds).max(0.0);
    let unstable = (unstable_elements_rate(state) * seconds).max(0.0);
    state.metal += metal;
    state.unstable_elements += unstable;
    (metal, unstable)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::DateTime;
    use saturn_types::{BlueprintId, Item, ItemId};

    use super::*;

    fn fresh() -> GameState {
        GameState::new(DateTime::from_timestamp_millis(0).unwrap())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn ready_item(id: u64, blueprint: BlueprintId, assigned: bool) -> Item {
        Item {
            id: ItemId(id),
            blueprint,
            assigned,
            production_progress: 100.0,
            production_start_day: 1,
        }
    }

    #[test]
    fn single_facility_produces_one_per_second() {
        assert!(close(production_rate(&fresh()), 1.0));
    }

    #[test]
    fn research_and_rewards_multiply() {
        let mut state = fresh();
        state.facilities = 2;
        state.research.production = 2; // 1.5
        state.research.automation = 1; // 1.15
        state.active_rewards.production_bonus = 0.2; // 1.2
        assert!(close(production_rate(&state), 2.0 * 1.5 * 1.15 * 1.2));
    }

    #[test]
    fn only_assigned_ready_items_count() {
        let mut state = fresh();
        state.items.push(ready_item(1, BlueprintId::MiningDrone, true));
        state.items.push(ready_item(2, BlueprintId::MiningDrone, false));
        let mut unfinished = ready_item(3, BlueprintId::MiningDrone, true);
        unfinished.production_progress = 50.0;
        state.items.push(unfinished);
        assert!(close(item_production_bonus(&state), 1.05));
    }

    #[test]
    fn facility_production_items_fold_into_production() {
        let mut state = fresh();
        state.items.push(ready_item(1, BlueprintId::RefineryModule, true));
        state.items.push(ready_item(2, BlueprintId::SurveyProbe, true));
        assert!(close(item_production_bonus(&state), 1.10));
        assert!(close(exploration_multiplier(&state), 1.08));
    }

    #[test]
    fn unstable_rate_scales_with_remote_facilities() {
        let mut state = fresh();
        state.remote_facilities = 3;
        assert!(close(unstable_elements_rate(&state), 1.5));
    }

    #[test]
    fn accrue_adds_rate_times_seconds() {
        let mut state = fresh();
        state.facilities = 3;
        state.remote_facilities = 2;
        let (metal, unstable) = accrue(&mut state, 2.5);
        assert!(close(metal, 7.5));
        assert!(close(unstable, 2.5));
        assert!(close(state.metal, 7.5));
        assert!(close(state.unstable_elements, 2.5));
    }

    #[test]
    fn accrue_ignores_negative_elapsed_time() {
        let mut state = fresh();
        let (metal, _) = accrue(&mut state, -10.0);
        assert!(close(metal, 0.0));
        assert!(close(state.metal, 0.0));
    }
}

//! Read-only projections of [`GameState`] for presentation.
//!
//! A [`Projection`] is computed fresh from the state and never written
//! back. It carries everything a display needs: totals, rates, costs,
//! affordability flags, and per-pipeline progress.

use saturn_economy::{
    exploration_multiplier, next_facility_cost, next_research_cost, next_ship_cost,
    production_rate, unstable_elements_rate, upkeep,
};
use saturn_progression::{available_ships, can_start_mission};
use saturn_types::{
    BlueprintId, BlueprintPhase, BodyId, GameState, ItemId, MonolithState, ResearchKind, Role,
};
use serde::Serialize;

/// One research track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchView {
    /// Track.
    pub kind: ResearchKind,
    /// Display name.
    pub name: &'static str,
    /// Current level.
    pub level: u32,
    /// Cost of the next level.
    pub cost: f64,
    /// Whether the next level is affordable now.
    pub affordable: bool,
}

/// One personnel role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelView {
    /// Role.
    pub role: Role,
    /// Headcount.
    pub count: u32,
    /// Upkeep per head per day.
    pub upkeep_rate: f64,
    /// One-time hiring fee.
    pub hiring_fee: f64,
    /// Whether hiring one more is affordable now.
    pub can_hire: bool,
}

/// Active reward offsets as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardsView {
    /// Production bonus, percent (may be negative).
    pub production_percent: f64,
    /// Exploration bonus, percent (may be negative).
    pub exploration_percent: f64,
    /// Metal granted so far by one-shot event windfalls.
    pub temporary_metal_bonus: f64,
}

/// One catalog blueprint and how far along it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintView {
    /// Blueprint.
    pub id: BlueprintId,
    /// Display name.
    pub name: &'static str,
    /// Phase, or `None` if research has not started.
    pub phase: Option<BlueprintPhase>,
    /// Research progress percent.
    pub research_progress: f64,
    /// Design progress percent.
    pub design_progress: f64,
    /// Cost of the next player action on this blueprint (start research,
    /// start design, or produce an item), if one is available.
    pub next_action_cost: Option<f64>,
    /// Whether that action is affordable and staffed.
    pub next_action_ready: bool,
}

/// One produced item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    /// Item.
    pub id: ItemId,
    /// Source blueprint.
    pub blueprint: BlueprintId,
    /// Blueprint display name.
    pub name: &'static str,
    /// Production progress percent.
    pub progress: f64,
    /// Whether production has finished.
    pub ready: bool,
    /// Whether the item is assigned.
    pub assigned: bool,
}

/// One mission in transit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionView {
    /// Destination.
    pub body: BodyId,
    /// Destination display name.
    pub name: &'static str,
    /// Ships committed.
    pub ships_used: u32,
    /// Day the mission completes.
    pub completion_day: u32,
    /// Days until completion.
    pub days_remaining: u32,
}

/// One catalog body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyView {
    /// Body.
    pub id: BodyId,
    /// Display name.
    pub name: &'static str,
    /// Travel time in days.
    pub distance: u32,
    /// Ships a mission needs.
    pub required_ships: u32,
    /// Exploration level a mission needs.
    pub required_exploration_level: u32,
    /// Already explored.
    pub explored: bool,
    /// A mission is underway.
    pub in_transit: bool,
    /// A mission could launch right now.
    pub launchable: bool,
}

/// Everything a display needs, computed from one state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Current day.
    pub day: u32,
    /// Metal on hand.
    pub metal: f64,
    /// Unstable elements on hand.
    pub unstable_elements: f64,
    /// Metal per second.
    pub production_rate: f64,
    /// Unstable elements per second.
    pub unstable_elements_rate: f64,
    /// Exploration effectiveness multiplier.
    pub exploration_multiplier: f64,
    /// Mining facilities.
    pub facilities: u32,
    /// Cost of the next facility.
    pub facility_cost: f64,
    /// Whether the next facility is affordable.
    pub can_build_facility: bool,
    /// Fleet size.
    pub ships: u32,
    /// Ships not committed to missions.
    pub available_ships: u32,
    /// Cost of the next ship.
    pub ship_cost: f64,
    /// Whether the next ship is affordable.
    pub can_build_ship: bool,
    /// Remote facilities.
    pub remote_facilities: u32,
    /// Survey progress toward the next remote facility.
    pub discovery_progress: u32,
    /// Research tracks.
    pub research: Vec<ResearchView>,
    /// Personnel by role.
    pub personnel: Vec<PersonnelView>,
    /// Metal owed per day for all staff.
    pub daily_upkeep: f64,
    /// Active reward offsets.
    pub rewards: RewardsView,
    /// Days until the event scheduler may roll again.
    pub event_cooldown: u32,
    /// Every catalog blueprint.
    pub blueprints: Vec<BlueprintView>,
    /// Produced items in production order.
    pub items: Vec<ItemView>,
    /// Missions in transit.
    pub missions: Vec<MissionView>,
    /// Every catalog body.
    pub bodies: Vec<BodyView>,
    /// Monolith storyline state.
    pub monolith: MonolithState,
}

impl Projection {
    /// Project `state`.
    pub fn of(state: &GameState) -> Self {
        let facility_cost = next_facility_cost(state);
        let ship_cost = next_ship_cost(state);

        Self {
            day: state.day,
            metal: state.metal,
            unstable_elements: state.unstable_elements,
            production_rate: production_rate(state),
            unstable_elements_rate: unstable_elements_rate(state),
            exploration_multiplier: exploration_multiplier(state),
            facilities: state.facilities,
            facility_cost,
            can_build_facility: state.metal >= facility_cost,
            ships: state.ships,
            available_ships: available_ships(state),
            ship_cost,
            can_build_ship: state.metal >= ship_cost,
            remote_facilities: state.remote_facilities,
            discovery_progress: state.discovery_progress,
            research: research_views(state),
            personnel: personnel_views(state),
            daily_upkeep: upkeep(&state.personnel),
            rewards: RewardsView {
                production_percent: state.active_rewards.production_bonus * 100.0,
                exploration_percent: state.active_rewards.exploration_bonus * 100.0,
                temporary_metal_bonus: state.active_rewards.temporary_metal_bonus,
            },
            event_cooldown: state.event_cooldown,
            blueprints: BlueprintId::ALL
                .iter()
                .map(|id| blueprint_view(state, *id))
                .collect(),
            items: state
                .items
                .iter()
                .map(|item| ItemView {
                    id: item.id,
                    blueprint: item.blueprint,
                    name: item.blueprint.definition().name,
                    progress: item.production_progress,
                    ready: item.is_ready(),
                    assigned: item.assigned,
                })
                .collect(),
            missions: state
                .active_missions
                .iter()
                .map(|m| MissionView {
                    body: m.body_id,
                    name: m.body_id.definition().name,
                    ships_used: m.ships_used,
                    completion_day: m.completion_day,
                    days_remaining: m.completion_day.saturating_sub(state.day),
                })
                .collect(),
            bodies: BodyId::ALL
                .iter()
                .map(|id| {
                    let def = id.definition();
                    BodyView {
                        id: *id,
                        name: def.name,
                        distance: def.distance,
                        required_ships: def.required_ships,
                        required_exploration_level: def.required_exploration_level,
                        explored: state.explored_bodies.contains(id),
                        in_transit: state.mission_to(*id).is_some(),
                        launchable: can_start_mission(state, *id).is_ok(),
                    }
                })
                .collect(),
            monolith: state.monolith,
        }
    }
}

fn research_views(state: &GameState) -> Vec<ResearchView> {
    ResearchKind::ALL
        .iter()
        .map(|kind| {
            let cost = next_research_cost(state, *kind);
            ResearchView {
                kind: *kind,
                name: kind.display_name(),
                level: state.research.level(*kind),
                cost,
                affordable: state.metal >= cost,
            }
        })
        .collect()
}

fn personnel_views(state: &GameState) -> Vec<PersonnelView> {
    Role::ALL
        .iter()
        .map(|role| PersonnelView {
            role: *role,
            count: state.personnel.count(*role),
            upkeep_rate: role.upkeep_rate(),
            hiring_fee: role.hiring_fee(),
            can_hire: state.metal >= role.hiring_fee(),
        })
        .collect()
}

fn blueprint_view(state: &GameState, id: BlueprintId) -> BlueprintView {
    let def = id.definition();
    let started = state.blueprint(id);
    let (next_action_cost, staffed) = match started.map(|bp| bp.phase) {
        None => (Some(def.research_cost), state.personnel.researchers > 0),
        Some(BlueprintPhase::ResearchComplete) => {
            (Some(def.design_cost), state.personnel.engineers > 0)
        }
        Some(BlueprintPhase::Complete) => (Some(def.production_cost), state.personnel.workers > 0),
        Some(BlueprintPhase::Research | BlueprintPhase::Design) => (None, false),
    };

    BlueprintView {
        id,
        name: def.name,
        phase: started.map(|bp| bp.phase),
        research_progress: started.map_or(0.0, |bp| bp.research_progress),
        design_progress: started.map_or(0.0, |bp| bp.design_progress),
        next_action_cost,
        next_action_ready: staffed && next_action_cost.is_some_and(|cost| state.metal >= cost),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::DateTime;
    use saturn_types::{Blueprint, Mission};

    use super::*;

    fn fresh() -> GameState {
        GameState::new(DateTime::from_timestamp_millis(0).unwrap())
    }

    #[test]
    fn fresh_game_projection() {
        let projection = Projection::of(&fresh());
        assert_eq!(projection.day, 1);
        assert!((projection.production_rate - 1.0).abs() < 1e-9);
        assert!((projection.facility_cost - 100.0).abs() < 1e-9);
        assert!(!projection.can_build_facility);
        assert_eq!(projection.research.len(), 3);
        assert_eq!(projection.personnel.len(), 4);
        assert_eq!(projection.blueprints.len(), 3);
        assert_eq!(projection.bodies.len(), 6);
        assert!(projection.bodies.iter().all(|b| !b.launchable));
    }

    #[test]
    fn blueprint_next_action_tracks_phase() {
        let mut state = fresh();
        state.metal = 1_000.0;
        state.personnel.researchers = 1;
        let mut bp = Blueprint::started(BlueprintId::MiningDrone, 1);
        bp.phase = BlueprintPhase::ResearchComplete;
        state.blueprints.push(bp);

        let projection = Projection::of(&state);
        let drone = projection
            .blueprints
            .iter()
            .find(|v| v.id == BlueprintId::MiningDrone)
            .unwrap();
        assert!((drone.next_action_cost.unwrap() - 800.0).abs() < 1e-9);
        // No engineer on staff.
        assert!(!drone.next_action_ready);

        let probe = projection
            .blueprints
            .iter()
            .find(|v| v.id == BlueprintId::SurveyProbe)
            .unwrap();
        assert_eq!(probe.phase, None);
        assert!(!probe.next_action_ready);
    }

    #[test]
    fn missions_report_days_remaining() {
        let mut state = fresh();
        state.ships = 2;
        state.day = 4;
        state.active_missions.push(Mission {
            body_id: BodyId::Pan,
            ships_used: 1,
            start_day: 3,
            completion_day: 6,
        });
        let projection = Projection::of(&state);
        assert_eq!(projection.available_ships, 1);
        assert_eq!(projection.missions.first().unwrap().days_remaining, 2);
        let pan = projection.bodies.iter().find(|b| b.id == BodyId::Pan).unwrap();
        assert!(pan.in_transit);
        assert!(!pan.launchable);
    }
}

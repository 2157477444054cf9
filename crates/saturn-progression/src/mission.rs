//! Exploration missions to Saturn's moons.
//!
//! Ships are never removed from the fleet. A mission commits
//! `required_ships` for its duration, and availability is always derived
//! from the active-missions list.

use saturn_types::{
    BodyId, BonusKind, GameState, LogSink, MissionRewards, Mission, Outcome, Refusal,
};
use tracing::info;

/// Ships not committed to an active mission.
pub fn available_ships(state: &GameState) -> u32 {
    let committed: u32 = state
        .active_missions
        .iter()
        .map(|m| m.ships_used)
        .fold(0, u32::saturating_add);
    state.ships.saturating_sub(committed)
}

/// Check whether a mission to `body` could start right now.
///
/// # Errors
///
/// In check order:
///
/// - [`Refusal::BodyExplored`] if the body was already explored
/// - [`Refusal::MissionActive`] if a mission to it is underway
/// - [`Refusal::ExplorationLevelTooLow`] below the body's research level
/// - [`Refusal::InsufficientShips`] if too few ships are uncommitted
pub fn can_start_mission(state: &GameState, body: BodyId) -> Outcome {
    if state.explored_bodies.contains(&body) {
        return Err(Refusal::BodyExplored(body));
    }
    if state.mission_to(body).is_some() {
        return Err(Refusal::MissionActive(body));
    }
    let def = body.definition();
    if state.research.exploration < def.required_exploration_level {
        return Err(Refusal::ExplorationLevelTooLow {
            required: def.required_exploration_level,
            current: state.research.exploration,
        });
    }
    let available = available_ships(state);
    if available < def.required_ships {
        return Err(Refusal::InsufficientShips {
            required: def.required_ships,
            available,
        });
    }
    Ok(())
}

/// Launch a mission to `body`. Returns the day it will complete.
///
/// # Errors
///
/// Any refusal from [`can_start_mission`].
pub fn start_mission(state: &mut GameState, body: BodyId, sink: &mut impl LogSink) -> Outcome<u32> {
    can_start_mission(state, body)?;
    let def = body.definition();
    let completion_day = state.day.saturating_add(def.distance);
    state.active_missions.push(Mission {
        body_id: body,
        ships_used: def.required_ships,
        start_day: state.day,
        completion_day,
    });
    sink.log(
        state.day,
        format!(
            "Mission to {} launched with {} ships. Expected return: day {completion_day}.",
            def.name, def.required_ships
        ),
    );
    info!(%body, completion_day, "Mission launched");
    Ok(completion_day)
}

/// Complete every mission whose completion day has been reached. Returns
/// the bodies explored today in launch order.
pub fn complete_missions(state: &mut GameState, sink: &mut impl LogSink) -> Vec<BodyId> {
    let day = state.day;
    let (arrived, in_transit): (Vec<Mission>, Vec<Mission>) = std::mem::take(
        &mut state.active_missions,
    )
    .into_iter()
    .partition(|m| day >= m.completion_day);
    state.active_missions = in_transit;

    let mut explored = Vec::with_capacity(arrived.len());
    for mission in arrived {
        let def = mission.body_id.definition();
        state.explored_bodies.insert(mission.body_id);
        apply_rewards(state, &def.rewards);
        sink.log(day, completion_message(def.name, &def.rewards));
        info!(body = %mission.body_id, day, "Mission completed");
        explored.push(mission.body_id);
    }
    explored
}

fn apply_rewards(state: &mut GameState, rewards: &MissionRewards) {
    state.credit_metal(rewards.metal);
    state.unstable_elements += rewards.unstable_elements.max(0.0);
    if let Some(bonus) = rewards.bonus {
        match bonus.kind {
            BonusKind::Production | BonusKind::FacilityProduction => {
                state.active_rewards.production_bonus += bonus.value;
            }
            BonusKind::Exploration => state.active_rewards.exploration_bonus += bonus.value,
        }
    }
}

fn completion_message(name: &str, rewards: &MissionRewards) -> String {
    let mut message = format!(
        "Mission to {name} complete! Recovered {:.0} metal",
        rewards.metal
    );
    if rewards.unstable_elements > 0.0 {
        message.push_str(&format!(
            " and {:.0} unstable elements",
            rewards.unstable_elements
        ));
    }
    message.push('.');
    if let Some(bonus) = rewards.bonus {
        let area = if bonus.kind.feeds_production() {
            "production"
        } else {
            "exploration"
        };
        message.push_str(&format!(" Permanent {area} bonus +{:.0}%.", bonus.value * 100.0));
    }
    message
}

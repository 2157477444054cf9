//! Cartographer surveys that found remote facilities.
//!
//! Every day, cartographers add to `discovery_progress`. Once it reaches
//! 100 a single draw decides whether a remote facility is founded; a
//! failed draw leaves progress at 100 and the attempt repeats the next
//! day.

use rand::Rng;
use saturn_economy::exploration_multiplier;
use saturn_types::{GameState, LogSink};
use tracing::info;

/// Survey points per cartographer per day before the exploration
/// multiplier.
pub const SURVEY_POINTS_PER_CARTOGRAPHER: f64 = 5.0;

/// Progress at which a founding attempt is made.
pub const SURVEY_THRESHOLD: u32 = 100;

/// Founding chance at exploration level 0.
pub const BASE_FOUNDING_CHANCE: f64 = 0.5;

/// Founding chance gained per exploration level.
pub const FOUNDING_CHANCE_PER_LEVEL: f64 = 0.05;

/// Upper bound on the founding chance.
pub const MAX_FOUNDING_CHANCE: f64 = 0.95;

/// Chance that a completed survey founds a remote facility.
pub fn founding_chance(exploration_level: u32) -> f64 {
    (BASE_FOUNDING_CHANCE + FOUNDING_CHANCE_PER_LEVEL * f64::from(exploration_level))
        .min(MAX_FOUNDING_CHANCE)
}

/// Survey points gained today.
pub fn daily_survey_points(state: &GameState) -> u32 {
    let cartographers = state.personnel.cartographers;
    let multiplier = exploration_multiplier(state);
    if cartographers == 0 || multiplier <= 0.0 {
        return 0;
    }
    let raw = (f64::from(cartographers) * SURVEY_POINTS_PER_CARTOGRAPHER * multiplier).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = raw.min(f64::from(SURVEY_THRESHOLD)) as u32;
    points.max(cartographers.min(SURVEY_THRESHOLD))
}

/// Run one day of surveying. Returns `true` if a remote facility was
/// founded today.
///
/// Draws from `rng` only when progress is at the threshold.
pub fn attempt_discovery(
    state: &mut GameState,
    rng: &mut impl Rng,
    sink: &mut impl LogSink,
) -> bool {
    let points = daily_survey_points(state);
    if points == 0 {
        return false;
    }
    state.discovery_progress = state
        .discovery_progress
        .saturating_add(points)
        .min(SURVEY_THRESHOLD);
    if state.discovery_progress < SURVEY_THRESHOLD {
        return false;
    }

    let draw = rng.random::<f64>();
    if draw >= founding_chance(state.research.exploration) {
        return false;
    }

    state.remote_facilities = state.remote_facilities.saturating_add(1);
    state.discovery_progress = 0;
    sink.log(
        state.day,
        format!(
            "Cartographers charted a viable site. Remote facility established. Total remote facilities: {}",
            state.remote_facilities
        ),
    );
    info!(
        remote_facilities = state.remote_facilities,
        "Remote facility founded"
    );
    true
}

//! Monolith translation storyline.
//!
//! The monolith is discovered by a special event. After that, researchers
//! can be put on translation. The researcher count is snapshotted when
//! translation starts, so hiring or firing later does not change the pace
//! of a running translation.

use saturn_types::{GameState, LogSink, Outcome, Refusal, Role};
use tracing::info;

/// Translation percentage points gained per assigned researcher per day.
pub const TRANSLATION_RATE_PER_RESEARCHER: f64 = 5.0;

/// Permanent production bonus granted by a finished translation.
pub const TRANSLATION_PRODUCTION_BONUS: f64 = 0.50;

/// Permanent exploration bonus granted by a finished translation.
pub const TRANSLATION_EXPLORATION_BONUS: f64 = 0.30;

const TRANSLATION_STORY: [&str; 4] = [
    "The monolith's message is fully translated.",
    "It speaks of a civilization that mined these rings long before us, and of the engines they left sleeping beneath Saturn's moons.",
    "Their schematics reveal extraction and navigation methods far beyond our own.",
    "Production +50%. Exploration +30%.",
];

/// Put the current researchers on translation.
///
/// # Errors
///
/// - [`Refusal::MonolithUndiscovered`] before discovery
/// - [`Refusal::TranslationFinished`] once translated
/// - [`Refusal::TranslationRunning`] if already translating
/// - [`Refusal::MissingPersonnel`] without a researcher
pub fn start_translation(state: &mut GameState, sink: &mut impl LogSink) -> Outcome {
    let monolith = &state.monolith;
    if !monolith.discovered {
        return Err(Refusal::MonolithUndiscovered);
    }
    if monolith.translated {
        return Err(Refusal::TranslationFinished);
    }
    if monolith.translating {
        return Err(Refusal::TranslationRunning);
    }
    let researchers = state.personnel.researchers;
    if researchers == 0 {
        return Err(Refusal::MissingPersonnel {
            role: Role::Researcher,
        });
    }

    state.monolith.translating = true;
    state.monolith.researchers_assigned = researchers;
    sink.log(
        state.day,
        format!("{researchers} researchers begin translating the monolith."),
    );
    info!(researchers, "Monolith translation started");
    Ok(())
}

/// Pause translation, keeping progress.
///
/// # Errors
///
/// Returns [`Refusal::TranslationIdle`] unless a translation is running.
pub fn stop_translation(state: &mut GameState, sink: &mut impl LogSink) -> Outcome {
    if !state.monolith.translating {
        return Err(Refusal::TranslationIdle);
    }
    state.monolith.translating = false;
    state.monolith.researchers_assigned = 0;
    sink.log(
        state.day,
        format!(
            "Monolith translation paused at {:.0}%.",
            state.monolith.translation_progress
        ),
    );
    Ok(())
}

/// Advance a running translation by one day. Returns `true` on the day the
/// translation finishes.
pub fn advance_translation(state: &mut GameState, sink: &mut impl LogSink) -> bool {
    if !state.monolith.translating {
        return false;
    }
    let gained = f64::from(state.monolith.researchers_assigned) * TRANSLATION_RATE_PER_RESEARCHER;
    let progress = (state.monolith.translation_progress + gained).min(100.0);
    state.monolith.translation_progress = progress;
    if progress < 100.0 {
        return false;
    }

    state.monolith.translating = false;
    state.monolith.translated = true;
    state.monolith.researchers_assigned = 0;
    state.active_rewards.production_bonus += TRANSLATION_PRODUCTION_BONUS;
    state.active_rewards.exploration_bonus += TRANSLATION_EXPLORATION_BONUS;
    for line in TRANSLATION_STORY {
        sink.log(state.day, line);
    }
    info!(day = state.day, "Monolith translated");
    true
}

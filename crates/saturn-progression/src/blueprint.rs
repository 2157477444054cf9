//! Blueprint pipeline: research -> research complete -> design -> complete.
//!
//! - Research needs at least one researcher and the research cost. A
//!   blueprint id can be started once; later calls are refused.
//! - Research progress is `min(100, (day - start_day) / research_days * 100)`
//!   and at 100 the blueprint waits in `ResearchComplete`.
//! - Design needs at least one engineer and the design cost, and advances
//!   the same way over `design_days`, ending in `Complete`.
//!
//! Phases only move forward and progress values never regress.

use saturn_economy::try_spend;
use saturn_types::{
    Blueprint, BlueprintId, BlueprintPhase, GameState, LogSink, Outcome, Refusal, Role,
};
use tracing::info;

use crate::progress::{is_complete, percent_elapsed};

/// A phase change produced by [`advance_blueprints`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    /// The blueprint that changed phase.
    pub blueprint: BlueprintId,
    /// The phase it entered.
    pub phase: BlueprintPhase,
}

/// Start researching a blueprint.
///
/// # Errors
///
/// - [`Refusal::BlueprintAlreadyStarted`] if the blueprint exists
/// - [`Refusal::MissingPersonnel`] without a researcher
/// - [`Refusal::InsufficientMetal`] if the research cost is unaffordable
pub fn start_research(state: &mut GameState, id: BlueprintId) -> Outcome {
    if state.blueprint(id).is_some() {
        return Err(Refusal::BlueprintAlreadyStarted(id));
    }
    if state.personnel.researchers == 0 {
        return Err(Refusal::MissingPersonnel {
            role: Role::Researcher,
        });
    }
    try_spend(state, id.definition().research_cost)?;
    state.blueprints.push(Blueprint::started(id, state.day));
    info!(blueprint = %id, day = state.day, "Blueprint research started");
    Ok(())
}

/// Start designing a blueprint whose research is complete.
///
/// # Errors
///
/// - [`Refusal::BlueprintNotStarted`] if research was never started
/// - [`Refusal::WrongPhase`] unless the blueprint is in `ResearchComplete`
/// - [`Refusal::MissingPersonnel`] without an engineer
/// - [`Refusal::InsufficientMetal`] if the design cost is unaffordable
pub fn start_design(state: &mut GameState, id: BlueprintId) -> Outcome {
    let phase = state
        .blueprint(id)
        .map(|bp| bp.phase)
        .ok_or(Refusal::BlueprintNotStarted(id))?;
    if phase != BlueprintPhase::ResearchComplete {
        return Err(Refusal::WrongPhase {
            blueprint: id,
            expected: BlueprintPhase::ResearchComplete,
            actual: phase,
        });
    }
    if state.personnel.engineers == 0 {
        return Err(Refusal::MissingPersonnel {
            role: Role::Engineer,
        });
    }
    try_spend(state, id.definition().design_cost)?;
    let day = state.day;
    if let Some(bp) = state.blueprint_mut(id) {
        bp.phase = BlueprintPhase::Design;
        bp.start_day = day;
    }
    info!(blueprint = %id, day, "Blueprint design started");
    Ok(())
}

/// Advance every blueprint in `Research` or `Design` by the current day.
///
/// Logs a line for each phase completion and returns the changes in
/// blueprint start order.
pub fn advance_blueprints(state: &mut GameState, sink: &mut impl LogSink) -> Vec<PhaseChange> {
    let day = state.day;
    let mut changes = Vec::new();

    for bp in &mut state.blueprints {
        let def = bp.id.definition();
        match bp.phase {
            BlueprintPhase::Research => {
                let progress = percent_elapsed(day, bp.start_day, def.research_days);
                bp.research_progress = bp.research_progress.max(progress);
                if is_complete(bp.research_progress) {
                    bp.research_progress = 100.0;
                    bp.phase = BlueprintPhase::ResearchComplete;
                    bp.start_day = day;
                    sink.log(
                        day,
                        format!("{} research complete. Engineers can begin design.", def.name),
                    );
                    changes.push(PhaseChange {
                        blueprint: bp.id,
                        phase: bp.phase,
                    });
                }
            }
            BlueprintPhase::Design => {
                let progress = percent_elapsed(day, bp.start_day, def.design_days);
                bp.design_progress = bp.design_progress.max(progress);
                if is_complete(bp.design_progress) {
                    bp.design_progress = 100.0;
                    bp.phase = BlueprintPhase::Complete;
                    bp.start_day = day;
                    sink.log(
                        day,
                        format!("{} design complete. Production lines are ready.", def.name),
                    );
                    changes.push(PhaseChange {
                        blueprint: bp.id,
                        phase: bp.phase,
                    });
                }
            }
            BlueprintPhase::ResearchComplete | BlueprintPhase::Complete => {}
        }
    }

    changes
}

//! Precondition refusals for user-intent operations.
//!
//! Every mutating operation checks its preconditions up front. When one
//! fails, the operation returns a [`Refusal`] and the state is left exactly
//! as it was. A refusal is not a fault: callers may ignore it, or show its
//! `Display` text to the player.

use crate::enums::{BlueprintPhase, Role};
use crate::ids::{BlueprintId, BodyId, ItemId};

/// Result of a user-intent operation.
pub type Outcome<T = ()> = Result<T, Refusal>;

/// A failed precondition. The state is unchanged whenever this is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Refusal {
    /// Not enough metal for the cost.
    #[error("insufficient metal: need {needed:.0}, have {available:.0}")]
    InsufficientMetal {
        /// Cost of the operation.
        needed: f64,
        /// Metal on hand.
        available: f64,
    },

    /// The operation needs at least one person in a role.
    #[error("requires at least one {}", .role.display_name())]
    MissingPersonnel {
        /// The missing role.
        role: Role,
    },

    /// Nobody in the role to let go.
    #[error("no {} on staff", .role.display_name())]
    NobodyToFire {
        /// The empty role.
        role: Role,
    },

    /// The blueprint already exists; research is not restarted.
    #[error("blueprint {0} already started")]
    BlueprintAlreadyStarted(BlueprintId),

    /// The blueprint has not been started.
    #[error("blueprint {0} not started")]
    BlueprintNotStarted(BlueprintId),

    /// The blueprint is in the wrong phase for the operation.
    #[error("blueprint {blueprint} is in {} phase, needs {}", .actual.label(), .expected.label())]
    WrongPhase {
        /// The blueprint.
        blueprint: BlueprintId,
        /// Phase the operation requires.
        expected: BlueprintPhase,
        /// Phase the blueprint is in.
        actual: BlueprintPhase,
    },

    /// No item with that id.
    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    /// The item is still in production.
    #[error("item {0} is still in production")]
    ItemNotReady(ItemId),

    /// The body has already been explored.
    #[error("{0} has already been explored")]
    BodyExplored(BodyId),

    /// A mission to the body is already in transit.
    #[error("a mission to {0} is already underway")]
    MissionActive(BodyId),

    /// Exploration research is below the body's requirement.
    #[error("exploration level {current} below required {required}")]
    ExplorationLevelTooLow {
        /// Level the body requires.
        required: u32,
        /// Current level.
        current: u32,
    },

    /// Not enough uncommitted ships.
    #[error("{available} ships available, {required} required")]
    InsufficientShips {
        /// Ships the body requires.
        required: u32,
        /// Ships not committed to active missions.
        available: u32,
    },

    /// The monolith has not been discovered.
    #[error("the monolith has not been discovered")]
    MonolithUndiscovered,

    /// Translation is already running.
    #[error("monolith translation already in progress")]
    TranslationRunning,

    /// Translation has already finished.
    #[error("monolith already translated")]
    TranslationFinished,

    /// Translation is not running.
    #[error("monolith translation is not running")]
    TranslationIdle,
}

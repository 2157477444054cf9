//! Enumeration types for the Saturn colony simulation.
//!
//! Every place the game dispatches on a "kind" (research track, personnel
//! role, bonus bucket, blueprint phase, repair target) uses one of these
//! closed enums so dispatch is an exhaustive `match`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Research
// ---------------------------------------------------------------------------

/// One of the three research tracks the colony can upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchKind {
    /// Production Efficiency: +25% metal output per level.
    Production,
    /// Exploration Range: unlocks bodies, improves event odds.
    Exploration,
    /// Automated Systems: +15% metal output per level.
    Automation,
}

impl ResearchKind {
    /// All research tracks in display order.
    pub const ALL: [Self; 3] = [Self::Production, Self::Exploration, Self::Automation];

    /// Metal cost of the first level of this track.
    pub const fn base_cost(self) -> f64 {
        match self {
            Self::Production => 200.0,
            Self::Exploration => 300.0,
            Self::Automation => 500.0,
        }
    }

    /// Human-readable track name used in log lines.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Production => "Production Efficiency",
            Self::Exploration => "Exploration Range",
            Self::Automation => "Automated Systems",
        }
    }
}

// ---------------------------------------------------------------------------
// Personnel
// ---------------------------------------------------------------------------

/// A personnel role the colony can hire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Runs blueprint research and monolith translation.
    Researcher,
    /// Runs blueprint design.
    Engineer,
    /// Produces items from completed blueprints.
    Worker,
    /// Surveys for remote facility sites.
    Cartographer,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 4] = [
        Self::Researcher,
        Self::Engineer,
        Self::Worker,
        Self::Cartographer,
    ];

    /// Metal deducted per head on every day advance.
    pub const fn upkeep_rate(self) -> f64 {
        match self {
            Self::Researcher => 10.0,
            Self::Engineer => 15.0,
            Self::Worker => 8.0,
            Self::Cartographer => 12.0,
        }
    }

    /// One-time metal fee paid when hiring one person in this role.
    pub const fn hiring_fee(self) -> f64 {
        match self {
            Self::Researcher => 100.0,
            Self::Engineer => 150.0,
            Self::Worker => 80.0,
            Self::Cartographer => 120.0,
        }
    }

    /// Singular display name.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Researcher => "researcher",
            Self::Engineer => "engineer",
            Self::Worker => "worker",
            Self::Cartographer => "cartographer",
        }
    }
}

// ---------------------------------------------------------------------------
// Bonuses
// ---------------------------------------------------------------------------

/// The bucket a bonus is credited to.
///
/// `FacilityProduction` is a distinct kind in the catalogs but is merged
/// into the production bucket wherever bonuses are summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BonusKind {
    /// Multiplies metal production.
    Production,
    /// Multiplies exploration effectiveness.
    Exploration,
    /// Facility output; folded into the production bucket.
    FacilityProduction,
}

impl BonusKind {
    /// Whether this bonus contributes to metal production.
    pub const fn feeds_production(self) -> bool {
        matches!(self, Self::Production | Self::FacilityProduction)
    }

    /// Whether this bonus contributes to exploration effectiveness.
    pub const fn feeds_exploration(self) -> bool {
        matches!(self, Self::Exploration)
    }
}

// ---------------------------------------------------------------------------
// Blueprints
// ---------------------------------------------------------------------------

/// Phase of a started blueprint. Transitions only move forward:
/// `Research -> ResearchComplete -> Design -> Complete`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintPhase {
    /// Researchers are working through the research time.
    #[default]
    Research,
    /// Research is done; waiting for an engineer to start design.
    ResearchComplete,
    /// Engineers are working through the design time.
    Design,
    /// Design is done; items can be produced.
    Complete,
}

impl BlueprintPhase {
    /// Human-readable phase label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::ResearchComplete => "research complete",
            Self::Design => "design",
            Self::Complete => "complete",
        }
    }
}

// ---------------------------------------------------------------------------
// Repairs
// ---------------------------------------------------------------------------

/// The active-reward bucket a pending repair restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairTarget {
    /// Restores `productionBonus`.
    Production,
    /// Restores `explorationBonus`.
    Exploration,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn facility_production_folds_into_production() {
        assert!(BonusKind::FacilityProduction.feeds_production());
        assert!(BonusKind::Production.feeds_production());
        assert!(!BonusKind::Exploration.feeds_production());
        assert!(BonusKind::Exploration.feeds_exploration());
    }

    #[test]
    fn phase_ordering_is_monotone() {
        assert!(BlueprintPhase::Research < BlueprintPhase::ResearchComplete);
        assert!(BlueprintPhase::ResearchComplete < BlueprintPhase::Design);
        assert!(BlueprintPhase::Design < BlueprintPhase::Complete);
    }

    #[test]
    fn serde_names_match_snapshot_format() {
        assert_eq!(
            serde_json::to_string(&BlueprintPhase::ResearchComplete).unwrap(),
            "\"research_complete\""
        );
        assert_eq!(
            serde_json::to_string(&BonusKind::FacilityProduction).unwrap(),
            "\"facilityProduction\""
        );
        assert_eq!(serde_json::to_string(&Role::Cartographer).unwrap(), "\"cartographer\"");
    }
}

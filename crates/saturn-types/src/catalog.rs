//! Static catalogs: blueprint definitions and explorable celestial bodies.
//!
//! Definitions are immutable and shared. Runtime records ([`Blueprint`],
//! [`Item`], [`Mission`]) hold only the id and look the definition up here.
//!
//! | Blueprint         | Research   | Design     | Production | Bonus                     |
//! |-------------------|------------|------------|------------|---------------------------|
//! | `mining_drone`    | 500 / 2d   | 800 / 2d   | 300 / 1d   | production +5%            |
//! | `refinery_module` | 1500 / 3d  | 2000 / 3d  | 1000 / 2d  | facility production +10%  |
//! | `survey_probe`    | 1200 / 2d  | 1500 / 2d  | 600 / 1d   | exploration +8%           |
//!
//! [`Blueprint`]: crate::state::Blueprint
//! [`Item`]: crate::state::Item
//! [`Mission`]: crate::state::Mission

use serde::{Deserialize, Serialize};

use crate::enums::BonusKind;
use crate::ids::{BlueprintId, BodyId};

/// An additive bonus of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bonus {
    /// Which bucket the bonus is credited to.
    #[serde(rename = "type")]
    pub kind: BonusKind,
    /// Additive multiplier offset (0.05 = +5%).
    pub value: f64,
}

/// Definition of a blueprint: costs and durations per phase plus the bonus
/// each produced item grants while assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct BlueprintDef {
    /// Catalog id.
    pub id: BlueprintId,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Metal debited when research starts.
    pub research_cost: f64,
    /// Days of research.
    pub research_days: u32,
    /// Metal debited when design starts.
    pub design_cost: f64,
    /// Days of design.
    pub design_days: u32,
    /// Metal debited per produced item.
    pub production_cost: f64,
    /// Days to finish producing one item.
    pub production_days: u32,
    /// Bonus granted by each assigned, fully produced item.
    pub bonus: Bonus,
}

/// One-time rewards granted when a mission to a body completes.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionRewards {
    /// Flat metal reward.
    pub metal: f64,
    /// Flat unstable-elements reward.
    pub unstable_elements: f64,
    /// Optional permanent bonus added to the active rewards.
    pub bonus: Option<Bonus>,
}

/// Definition of an explorable celestial body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDef {
    /// Catalog id.
    pub id: BodyId,
    /// Display name.
    pub name: &'static str,
    /// Transit time in days.
    pub distance: u32,
    /// Ships committed for the duration of the mission.
    pub required_ships: u32,
    /// Minimum exploration research level.
    pub required_exploration_level: u32,
    /// Rewards on completion.
    pub rewards: MissionRewards,
}

static MINING_DRONE: BlueprintDef = BlueprintDef {
    id: BlueprintId::MiningDrone,
    name: "Autonomous Mining Drone",
    description: "Self-guided drones that strip loose ring material.",
    research_cost: 500.0,
    research_days: 2,
    design_cost: 800.0,
    design_days: 2,
    production_cost: 300.0,
    production_days: 1,
    bonus: Bonus {
        kind: BonusKind::Production,
        value: 0.05,
    },
};

static REFINERY_MODULE: BlueprintDef = BlueprintDef {
    id: BlueprintId::RefineryModule,
    name: "Orbital Refinery Module",
    description: "Bolt-on refinery that lifts every facility's yield.",
    research_cost: 1500.0,
    research_days: 3,
    design_cost: 2000.0,
    design_days: 3,
    production_cost: 1000.0,
    production_days: 2,
    bonus: Bonus {
        kind: BonusKind::FacilityProduction,
        value: 0.10,
    },
};

static SURVEY_PROBE: BlueprintDef = BlueprintDef {
    id: BlueprintId::SurveyProbe,
    name: "Deep Survey Probe",
    description: "Long-range probe that sharpens survey data.",
    research_cost: 1200.0,
    research_days: 2,
    design_cost: 1500.0,
    design_days: 2,
    production_cost: 600.0,
    production_days: 1,
    bonus: Bonus {
        kind: BonusKind::Exploration,
        value: 0.08,
    },
};

static PAN: BodyDef = BodyDef {
    id: BodyId::Pan,
    name: "Pan",
    distance: 1,
    required_ships: 1,
    required_exploration_level: 0,
    rewards: MissionRewards {
        metal: 500.0,
        unstable_elements: 0.0,
        bonus: None,
    },
};

static MIMAS: BodyDef = BodyDef {
    id: BodyId::Mimas,
    name: "Mimas",
    distance: 2,
    required_ships: 2,
    required_exploration_level: 1,
    rewards: MissionRewards {
        metal: 1200.0,
        unstable_elements: 0.0,
        bonus: Some(Bonus {
            kind: BonusKind::Exploration,
            value: 0.05,
        }),
    },
};

static ENCELADUS: BodyDef = BodyDef {
    id: BodyId::Enceladus,
    name: "Enceladus",
    distance: 2,
    required_ships: 2,
    required_exploration_level: 1,
    rewards: MissionRewards {
        metal: 1500.0,
        unstable_elements: 20.0,
        bonus: Some(Bonus {
            kind: BonusKind::Production,
            value: 0.05,
        }),
    },
};

static RHEA: BodyDef = BodyDef {
    id: BodyId::Rhea,
    name: "Rhea",
    distance: 3,
    required_ships: 3,
    required_exploration_level: 2,
    rewards: MissionRewards {
        metal: 3000.0,
        unstable_elements: 50.0,
        bonus: Some(Bonus {
            kind: BonusKind::FacilityProduction,
            value: 0.10,
        }),
    },
};

static IAPETUS: BodyDef = BodyDef {
    id: BodyId::Iapetus,
    name: "Iapetus",
    distance: 6,
    required_ships: 4,
    required_exploration_level: 3,
    rewards: MissionRewards {
        metal: 6000.0,
        unstable_elements: 100.0,
        bonus: Some(Bonus {
            kind: BonusKind::Production,
            value: 0.10,
        }),
    },
};

static TITAN: BodyDef = BodyDef {
    id: BodyId::Titan,
    name: "Titan",
    distance: 5,
    required_ships: 5,
    required_exploration_level: 3,
    rewards: MissionRewards {
        metal: 8000.0,
        unstable_elements: 150.0,
        bonus: Some(Bonus {
            kind: BonusKind::Exploration,
            value: 0.15,
        }),
    },
};

/// Look up a blueprint definition.
pub fn blueprint(id: BlueprintId) -> &'static BlueprintDef {
    match id {
        BlueprintId::MiningDrone => &MINING_DRONE,
        BlueprintId::RefineryModule => &REFINERY_MODULE,
        BlueprintId::SurveyProbe => &SURVEY_PROBE,
    }
}

/// Look up a celestial body definition.
pub fn body(id: BodyId) -> &'static BodyDef {
    match id {
        BodyId::Pan => &PAN,
        BodyId::Mimas => &MIMAS,
        BodyId::Enceladus => &ENCELADUS,
        BodyId::Rhea => &RHEA,
        BodyId::Iapetus => &IAPETUS,
        BodyId::Titan => &TITAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definitions_are_keyed_by_their_own_id() {
        for &id in BlueprintId::ALL {
            assert_eq!(blueprint(id).id, id);
            assert!(blueprint(id).research_days > 0);
            assert!(blueprint(id).design_days > 0);
            assert!(blueprint(id).production_days > 0);
        }
        for &id in BodyId::ALL {
            assert_eq!(body(id).id, id);
            assert!(body(id).distance > 0);
            assert!(body(id).required_ships > 0);
        }
    }

    #[test]
    fn enceladus_needs_two_ships_and_two_days() {
        let def = body(BodyId::Enceladus);
        assert_eq!(def.required_ships, 2);
        assert_eq!(def.distance, 2);
    }
}

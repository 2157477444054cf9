//! Identifiers for catalog entries and produced items.
//!
//! Blueprints and celestial bodies come from fixed catalogs, so their ids
//! are closed enums. Items are produced at runtime and get a numeric id
//! drawn from the monotonic `itemIdCounter` on [`GameState`].
//!
//! [`GameState`]: crate::state::GameState

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, BlueprintDef, BodyDef};

/// Returned when a string does not name a known catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} id: {id}")]
pub struct UnknownId {
    /// Which catalog was searched ("blueprint" or "body").
    pub kind: &'static str,
    /// The string that failed to parse.
    pub id: String,
}

/// Generates a closed catalog id enum with string conversions.
macro_rules! define_catalog_id {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every id in catalog order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// The snake-case string form used in snapshots.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$variant), )+
                    other => Err(UnknownId {
                        kind: $kind,
                        id: other.to_owned(),
                    }),
                }
            }
        }
    };
}

define_catalog_id! {
    /// Identifier of a blueprint definition.
    BlueprintId, "blueprint" {
        /// Autonomous Mining Drone.
        MiningDrone => "mining_drone",
        /// Orbital Refinery Module.
        RefineryModule => "refinery_module",
        /// Deep Survey Probe.
        SurveyProbe => "survey_probe",
    }
}

define_catalog_id! {
    /// Identifier of a celestial body that can be explored.
    BodyId, "body" {
        /// Pan, the shepherd moon inside the Encke gap.
        Pan => "pan",
        /// Mimas.
        Mimas => "mimas",
        /// Enceladus.
        Enceladus => "enceladus",
        /// Rhea.
        Rhea => "rhea",
        /// Iapetus.
        Iapetus => "iapetus",
        /// Titan.
        Titan => "titan",
    }
}

impl BlueprintId {
    /// Static definition for this blueprint.
    pub fn definition(self) -> &'static BlueprintDef {
        catalog::blueprint(self)
    }
}

impl BodyId {
    /// Static definition for this body.
    pub fn definition(self) -> &'static BodyDef {
        catalog::body(self)
    }
}

/// Unique identifier of a produced item.
///
/// The numeric value is the item's suffix; ids are allocated by
/// pre-incrementing the state's counter, so the first item is `item-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl ItemId {
    /// The numeric suffix of this id.
    pub const fn suffix(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_parse_their_own_display() {
        for id in BodyId::ALL {
            assert_eq!(id.to_string().parse::<BodyId>().unwrap(), *id);
        }
        for id in BlueprintId::ALL {
            assert_eq!(id.as_str().parse::<BlueprintId>().unwrap(), *id);
        }
    }

    #[test]
    fn unknown_body_is_rejected() {
        let err = "europa".parse::<BodyId>().unwrap_err();
        assert_eq!(err.kind, "body");
        assert_eq!(err.id, "europa");
    }

    #[test]
    fn item_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ItemId(7)).unwrap(), "7");
        assert_eq!(ItemId(7).to_string(), "item-7");
    }
}

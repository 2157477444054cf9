//! The aggregate game state.
//!
//! [`GameState`] is the single mutable record every subsystem reads and
//! writes. It is also the persistence contract: the snapshot is this struct
//! serialized field-for-field (camelCase keys), and every field carries a
//! serde default so that snapshots from older versions load with the
//! missing fields backfilled instead of failing.
//!
//! Timestamps are stored at millisecond precision; [`now_millis`] is the
//! canonical way to read the wall clock.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{BlueprintPhase, RepairTarget, ResearchKind, Role};
use crate::ids::{BlueprintId, BodyId, ItemId};

/// Current wall-clock time truncated to whole milliseconds.
///
/// Snapshots persist timestamps in milliseconds, so every timestamp that
/// enters the state goes through this truncation.
pub fn now_millis() -> DateTime<Utc> {
    truncate_millis(Utc::now())
}

/// Truncate a timestamp to whole milliseconds.
pub fn truncate_millis(at: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(at.timestamp_millis()).unwrap_or(at)
}

const fn default_facilities() -> u32 {
    1
}

const fn default_day() -> u32 {
    1
}

// ---------------------------------------------------------------------------
// Nested records
// ---------------------------------------------------------------------------

/// Research levels per track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchLevels {
    /// Production Efficiency level.
    pub production: u32,
    /// Exploration Range level.
    pub exploration: u32,
    /// Automated Systems level.
    pub automation: u32,
}

impl ResearchLevels {
    /// Current level of a track.
    pub const fn level(&self, kind: ResearchKind) -> u32 {
        match kind {
            ResearchKind::Production => self.production,
            ResearchKind::Exploration => self.exploration,
            ResearchKind::Automation => self.automation,
        }
    }

    /// Mutable access to the level of a track.
    pub const fn level_mut(&mut self, kind: ResearchKind) -> &mut u32 {
        match kind {
            ResearchKind::Production => &mut self.production,
            ResearchKind::Exploration => &mut self.exploration,
            ResearchKind::Automation => &mut self.automation,
        }
    }
}

/// Headcount per personnel role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personnel {
    /// Researchers on staff.
    pub researchers: u32,
    /// Engineers on staff.
    pub engineers: u32,
    /// Workers on staff.
    pub workers: u32,
    /// Cartographers on staff.
    pub cartographers: u32,
}

impl Personnel {
    /// Headcount for a role.
    pub const fn count(&self, role: Role) -> u32 {
        match role {
            Role::Researcher => self.researchers,
            Role::Engineer => self.engineers,
            Role::Worker => self.workers,
            Role::Cartographer => self.cartographers,
        }
    }

    /// Mutable access to the headcount for a role.
    pub const fn count_mut(&mut self, role: Role) -> &mut u32 {
        match role {
            Role::Researcher => &mut self.researchers,
            Role::Engineer => &mut self.engineers,
            Role::Worker => &mut self.workers,
            Role::Cartographer => &mut self.cartographers,
        }
    }

    /// Total headcount across all roles.
    pub fn total(&self) -> u32 {
        Role::ALL
            .iter()
            .fold(0_u32, |acc, role| acc.saturating_add(self.count(*role)))
    }
}

/// Additive multiplier offsets that persist until explicitly reversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActiveRewards {
    /// Offset to exploration effectiveness; may be negative.
    pub exploration_bonus: f64,
    /// Offset to metal production; may be negative.
    pub production_bonus: f64,
    /// Running total of one-time metal windfalls from events.
    pub temporary_metal_bonus: f64,
}

impl ActiveRewards {
    /// Mutable access to the bucket a repair restores.
    pub const fn bucket_mut(&mut self, target: RepairTarget) -> &mut f64 {
        match target {
            RepairTarget::Production => &mut self.production_bonus,
            RepairTarget::Exploration => &mut self.exploration_bonus,
        }
    }
}

/// A scheduled reversal of a negative-event penalty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRepair {
    /// Which bonus bucket is restored.
    #[serde(rename = "type")]
    pub target: RepairTarget,
    /// Amount added back to the bucket.
    #[serde(default)]
    pub amount: f64,
    /// First day on which the repair resolves. Missing means overdue.
    #[serde(default = "default_day")]
    pub completion_day: u32,
}

/// A started blueprint and its phase state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    /// Definition id; the definition itself is in the static catalog.
    pub id: BlueprintId,
    /// Current phase.
    #[serde(default)]
    pub phase: BlueprintPhase,
    /// Research progress, 0-100.
    #[serde(default)]
    pub research_progress: f64,
    /// Design progress, 0-100.
    #[serde(default)]
    pub design_progress: f64,
    /// Day the current phase started.
    #[serde(default = "default_day")]
    pub start_day: u32,
}

impl Blueprint {
    /// A blueprint entering research on `day`.
    pub const fn started(id: BlueprintId, day: u32) -> Self {
        Self {
            id,
            phase: BlueprintPhase::Research,
            research_progress: 0.0,
            design_progress: 0.0,
            start_day: day,
        }
    }
}

/// A produced instance of a completed blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique id.
    pub id: ItemId,
    /// Owning blueprint.
    pub blueprint: BlueprintId,
    /// Whether the item's bonus is currently applied.
    #[serde(default)]
    pub assigned: bool,
    /// Production progress, 0-100.
    #[serde(default)]
    pub production_progress: f64,
    /// Day production started.
    #[serde(default = "default_day")]
    pub production_start_day: u32,
}

impl Item {
    /// Whether production has finished.
    pub fn is_ready(&self) -> bool {
        self.production_progress >= 100.0
    }
}

/// An exploration mission in transit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    /// Target body.
    pub body_id: BodyId,
    /// Ships committed for the mission's duration.
    #[serde(default)]
    pub ships_used: u32,
    /// Day of launch.
    #[serde(default = "default_day")]
    pub start_day: u32,
    /// First day on which the mission completes. Missing means due.
    #[serde(default = "default_day")]
    pub completion_day: u32,
}

/// Monolith storyline state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonolithState {
    /// The monolith has been found.
    pub discovered: bool,
    /// Translation is running.
    pub translating: bool,
    /// Translation has finished; bonuses granted.
    pub translated: bool,
    /// Translation progress, 0-100.
    pub translation_progress: f64,
    /// Researchers snapshotted when translation (re)started.
    pub researchers_assigned: u32,
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// The single mutable aggregate of the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    /// Primary resource.
    pub metal: f64,
    /// Secondary resource produced by remote facilities.
    pub unstable_elements: f64,
    /// Mining facilities (at least 1).
    #[serde(default = "default_facilities")]
    pub facilities: u32,
    /// Explorer ships owned, including ships out on missions.
    pub ships: u32,
    /// Remote facilities founded by cartographer surveys.
    pub remote_facilities: u32,
    /// Survey progress toward the next remote facility, 0-100.
    pub discovery_progress: u32,
    /// Research levels.
    pub research: ResearchLevels,
    /// Personnel headcount.
    pub personnel: Personnel,
    /// Current game day (starts at 1, never decreases).
    #[serde(default = "default_day")]
    pub day: u32,
    /// Wall-clock time the game started.
    #[serde(with = "chrono::serde::ts_milliseconds", default = "now_millis")]
    pub game_start_time: DateTime<Utc>,
    /// Wall-clock time of the last tick.
    #[serde(with = "chrono::serde::ts_milliseconds", default = "now_millis")]
    pub last_update: DateTime<Utc>,
    /// Event-driven bonus offsets.
    pub active_rewards: ActiveRewards,
    /// Days remaining before another event may fire.
    pub event_cooldown: u32,
    /// Scheduled penalty reversals, in scheduling order.
    pub pending_repairs: Vec<PendingRepair>,
    /// Started blueprints, in start order, unique by id.
    pub blueprints: Vec<Blueprint>,
    /// Produced items, in production order.
    pub items: Vec<Item>,
    /// Last allocated item suffix.
    pub item_id_counter: u64,
    /// Bodies already explored.
    pub explored_bodies: BTreeSet<BodyId>,
    /// Missions in transit, at most one per body.
    pub active_missions: Vec<Mission>,
    /// Monolith storyline.
    pub monolith: MonolithState,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(now_millis())
    }
}

impl GameState {
    /// A fresh game started at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        let now = truncate_millis(now);
        Self {
            metal: 0.0,
            unstable_elements: 0.0,
            facilities: default_facilities(),
            ships: 0,
            remote_facilities: 0,
            discovery_progress: 0,
            research: ResearchLevels::default(),
            personnel: Personnel::default(),
            day: default_day(),
            game_start_time: now,
            last_update: now,
            active_rewards: ActiveRewards::default(),
            event_cooldown: 0,
            pending_repairs: Vec::new(),
            blueprints: Vec::new(),
            items: Vec::new(),
            item_id_counter: 0,
            explored_bodies: BTreeSet::new(),
            active_missions: Vec::new(),
            monolith: MonolithState::default(),
        }
    }

    /// Add metal.
    pub fn credit_metal(&mut self, amount: f64) {
        self.metal += amount.max(0.0);
    }

    /// Remove up to `amount` metal, clamping at zero. Returns the amount
    /// actually removed.
    pub fn debit_metal(&mut self, amount: f64) -> f64 {
        let taken = amount.max(0.0).min(self.metal);
        self.metal = (self.metal - taken).max(0.0);
        taken
    }

    /// Look up a started blueprint.
    pub fn blueprint(&self, id: BlueprintId) -> Option<&Blueprint> {
        self.blueprints.iter().find(|bp| bp.id == id)
    }

    /// Mutable lookup of a started blueprint.
    pub fn blueprint_mut(&mut self, id: BlueprintId) -> Option<&mut Blueprint> {
        self.blueprints.iter_mut().find(|bp| bp.id == id)
    }

    /// Look up an item.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable lookup of an item.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// The mission currently in transit to `body`, if any.
    pub fn mission_to(&self, body: BodyId) -> Option<&Mission> {
        self.active_missions.iter().find(|m| m.body_id == body)
    }

    /// Allocate the next unique item id (pre-increment, then use).
    pub const fn next_item_id(&mut self) -> ItemId {
        self.item_id_counter = self.item_id_counter.saturating_add(1);
        ItemId(self.item_id_counter)
    }

    /// Raise `itemIdCounter` to at least the largest existing item suffix so
    /// restored states never reuse an id.
    pub fn reconcile_item_counter(&mut self) {
        let max_suffix = self
            .items
            .iter()
            .map(|item| item.id.suffix())
            .max()
            .unwrap_or(0);
        self.item_id_counter = self.item_id_counter.max(max_suffix);
    }
}

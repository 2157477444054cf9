//! Exploration event scheduler with cooldowns and delayed repairs.
//!
//! Once per day, gated by `event_cooldown == 0` and `ships > 0`:
//!
//! 1. Special events are checked in declaration order. The first whose
//!    condition holds fires without a probability roll.
//! 2. Otherwise a draw below [`trigger_chance`] fires a normal event. A
//!    second draw below [`positive_chance`] selects the positive pool,
//!    else the negative pool, and a third draw picks the event.
//! 3. The event's effect is applied and its message logged.
//! 4. A final draw sets the cooldown to 1..=3 days.
//!
//! When no event fires the cooldown stays at 0 and the roll repeats the
//! next day.
//!
//! Some negative events queue a [`PendingRepair`] instead of being
//! permanent. Repairs are resolved each day before the scheduler runs and
//! add the penalty back, so the bonus nets to zero across the window.

use rand::Rng;
use saturn_economy::{production_rate, research_cost};
use saturn_types::{GameState, LogSink, PendingRepair, RepairTarget, ResearchKind};
use tracing::{debug, info};

use crate::roll;

/// Base daily event chance.
pub const BASE_TRIGGER_CHANCE: f64 = 0.25;

/// Event chance gained per exploration level.
pub const TRIGGER_CHANCE_PER_LEVEL: f64 = 0.05;

/// Event chance gained per ship.
pub const TRIGGER_CHANCE_PER_SHIP: f64 = 0.02;

/// Cap on the per-ship contribution.
pub const MAX_SHIP_TRIGGER_BONUS: f64 = 0.20;

/// Base chance that a fired event is positive.
pub const BASE_POSITIVE_CHANCE: f64 = 0.70;

/// Positive chance gained per exploration level.
pub const POSITIVE_CHANCE_PER_LEVEL: f64 = 0.03;

/// Days until a queued repair resolves.
pub const REPAIR_DELAY_DAYS: u32 = 2;

/// Longest cooldown after an event, in days.
pub const MAX_COOLDOWN_DAYS: u32 = 3;

/// Which pool an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTone {
    /// Beneficial event.
    Positive,
    /// Harmful event.
    Negative,
    /// Storyline event with a condition, fired without a roll.
    Special,
}

/// Every exploration event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// +20% exploration.
    AbandonedResearchStation,
    /// Metal scaled by ships and exploration level.
    LostSignalDiscovery,
    /// +15% production.
    AncientMiningFacility,
    /// +10% exploration.
    TechnologicalArtifact,
    /// Metal scaled by facilities and production level.
    ResourceRichAsteroid,
    /// +10% production.
    EfficientRouteDiscovery,
    /// Metal worth 30% of the next exploration research level.
    RareCrystalFormation,
    /// Lose 5% of metal.
    SolarStorm,
    /// -10% production until repaired.
    EquipmentMalfunction,
    /// Lose 20 metal per ship.
    NavigationError,
    /// -5% exploration until repaired.
    AsteroidCollision,
    /// Lose 30 seconds of production.
    CommunicationInterference,
    /// Discover the monolith.
    MonolithDiscovery,
}

impl EventKind {
    /// The positive pool, in selection order.
    pub const POSITIVE: [Self; 7] = [
        Self::AbandonedResearchStation,
        Self::LostSignalDiscovery,
        Self::AncientMiningFacility,
        Self::TechnologicalArtifact,
        Self::ResourceRichAsteroid,
        Self::EfficientRouteDiscovery,
        Self::RareCrystalFormation,
    ];

    /// The negative pool, in selection order.
    pub const NEGATIVE: [Self; 5] = [
        Self::SolarStorm,
        Self::EquipmentMalfunction,
        Self::NavigationError,
        Self::AsteroidCollision,
        Self::CommunicationInterference,
    ];

    /// Special events, in evaluation order.
    pub const SPECIAL: [Self; 1] = [Self::MonolithDiscovery];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AbandonedResearchStation => "Abandoned Research Station",
            Self::LostSignalDiscovery => "Lost Signal Discovery",
            Self::AncientMiningFacility => "Ancient Mining Facility",
            Self::TechnologicalArtifact => "Technological Artifact",
            Self::ResourceRichAsteroid => "Resource-Rich Asteroid",
            Self::EfficientRouteDiscovery => "Efficient Route Discovery",
            Self::RareCrystalFormation => "Rare Crystal Formation",
            Self::SolarStorm => "Solar Storm",
            Self::EquipmentMalfunction => "Equipment Malfunction",
            Self::NavigationError => "Navigation Error",
            Self::AsteroidCollision => "Asteroid Collision",
            Self::CommunicationInterference => "Communication Interference",
            Self::MonolithDiscovery => "Monolith Discovery",
        }
    }

    /// The pool this event belongs to.
    pub const fn tone(self) -> EventTone {
        match self {
            Self::AbandonedResearchStation
            | Self::LostSignalDiscovery
            | Self::AncientMiningFacility
            | Self::TechnologicalArtifact
            | Self::ResourceRichAsteroid
            | Self::EfficientRouteDiscovery
            | Self::RareCrystalFormation => EventTone::Positive,
            Self::SolarStorm
            | Self::EquipmentMalfunction
            | Self::NavigationError
            | Self::AsteroidCollision
            | Self::CommunicationInterference => EventTone::Negative,
            Self::MonolithDiscovery => EventTone::Special,
        }
    }

    /// Whether the event may fire in this state. Only special events
    /// carry a condition; pool events always qualify.
    pub const fn condition(self, state: &GameState) -> bool {
        match self {
            Self::MonolithDiscovery => {
                state.ships >= 3 && state.research.exploration >= 2 && !state.monolith.discovered
            }
            _ => true,
        }
    }

    /// Apply the event's effect and return the message to log.
    pub fn apply(self, state: &mut GameState) -> String {
        match self {
            Self::AbandonedResearchStation => {
                state.active_rewards.exploration_bonus += 0.20;
                "An explorer found an abandoned research station with intact starship schematics. Exploration efficiency +20%.".to_owned()
            }
            Self::LostSignalDiscovery => {
                let bonus = (f64::from(state.ships)
                    * 50.0
                    * (1.0 + 0.1 * f64::from(state.research.exploration)))
                .floor();
                state.credit_metal(bonus);
                state.active_rewards.temporary_metal_bonus += bonus;
                format!("A lost signal led the fleet to a cache of refined alloys. Recovered {bonus:.0} metal.")
            }
            Self::AncientMiningFacility => {
                state.active_rewards.production_bonus += 0.15;
                "Survey teams found an ancient automated mining facility. Production +15% permanently.".to_owned()
            }
            Self::TechnologicalArtifact => {
                state.active_rewards.exploration_bonus += 0.10;
                "Scans revealed an artifact that tunes every ship's systems. Exploration efficiency +10%.".to_owned()
            }
            Self::ResourceRichAsteroid => {
                let bonus = (f64::from(state.facilities)
                    * 200.0
                    * (1.0 + 0.1 * f64::from(state.research.production)))
                .floor();
                state.credit_metal(bonus);
                state.active_rewards.temporary_metal_bonus += bonus;
                format!("The fleet located a resource-rich asteroid field. Recovered {bonus:.0} metal.")
            }
            Self::EfficientRouteDiscovery => {
                state.active_rewards.production_bonus += 0.10;
                "New hauling routes charted through the rings. Production efficiency +10%.".to_owned()
            }
            Self::RareCrystalFormation => {
                let next = research_cost(ResearchKind::Exploration, state.research.exploration);
                let bonus = (next * 0.3).floor();
                state.credit_metal(bonus);
                format!("Explorers found rare crystal formations. Gained {bonus:.0} metal toward the next research.")
            }
            Self::SolarStorm => {
                let loss = state.debit_metal((state.metal * 0.05).floor());
                format!("An intense solar storm damaged exploration equipment. Lost {loss:.0} metal to repairs.")
            }
            Self::EquipmentMalfunction => {
                let amount = 0.10;
                state.active_rewards.production_bonus -= amount;
                queue_repair(state, RepairTarget::Production, amount);
                "Critical equipment malfunction at a mining facility. Production -10% until repairs finish.".to_owned()
            }
            Self::NavigationError => {
                let loss = state.debit_metal(f64::from(state.ships) * 20.0);
                format!("A navigation fault sent the fleet through barren sectors. Wasted {loss:.0} metal.")
            }
            Self::AsteroidCollision => {
                let amount = 0.05;
                state.active_rewards.exploration_bonus -= amount;
                queue_repair(state, RepairTarget::Exploration, amount);
                "A minor asteroid collision damaged ship sensors. Exploration efficiency -5% until repairs finish.".to_owned()
            }
            Self::CommunicationInterference => {
                let loss = state.debit_metal((production_rate(state) * 30.0).floor().max(0.0));
                format!("Electromagnetic interference disrupted fleet coordination. Lost {loss:.0} metal.")
            }
            Self::MonolithDiscovery => {
                state.monolith.discovered = true;
                "Deep-range scans found a monolith of unknown origin beneath the ice of Iapetus. Its surface is covered in symbols. Researchers could attempt a translation.".to_owned()
            }
        }
    }
}

fn queue_repair(state: &mut GameState, target: RepairTarget, amount: f64) {
    state.pending_repairs.push(PendingRepair {
        target,
        amount,
        completion_day: state.day.saturating_add(REPAIR_DELAY_DAYS),
    });
}

/// Chance that a normal event fires today.
pub fn trigger_chance(state: &GameState) -> f64 {
    let ships = (TRIGGER_CHANCE_PER_SHIP * f64::from(state.ships)).min(MAX_SHIP_TRIGGER_BONUS);
    BASE_TRIGGER_CHANCE + TRIGGER_CHANCE_PER_LEVEL * f64::from(state.research.exploration) + ships
}

/// Chance that a fired normal event comes from the positive pool.
pub fn positive_chance(state: &GameState) -> f64 {
    BASE_POSITIVE_CHANCE + POSITIVE_CHANCE_PER_LEVEL * f64::from(state.research.exploration)
}

/// Reverse every repair due today and drop it from the queue. Returns the
/// number of repairs resolved.
pub fn resolve_repairs(state: &mut GameState, sink: &mut impl LogSink) -> usize {
    let day = state.day;
    let (due, waiting): (Vec<PendingRepair>, Vec<PendingRepair>) =
        std::mem::take(&mut state.pending_repairs)
            .into_iter()
            .partition(|repair| repair.completion_day <= day);
    state.pending_repairs = waiting;

    for repair in &due {
        *state.active_rewards.bucket_mut(repair.target) += repair.amount;
        let message = match repair.target {
            RepairTarget::Production => "Repairs completed. Production systems back to normal.",
            RepairTarget::Exploration => "Ship repairs completed. Sensors back online.",
        };
        sink.log(day, message);
        debug!(target = ?repair.target, amount = repair.amount, day, "Repair resolved");
    }
    due.len()
}

/// Count the cooldown down by one day, stopping at zero.
pub const fn tick_cooldown(state: &mut GameState) {
    state.event_cooldown = state.event_cooldown.saturating_sub(1);
}

/// Run the daily scheduler. Returns the event that fired, if any.
pub fn run_scheduler(
    state: &mut GameState,
    rng: &mut impl Rng,
    sink: &mut impl LogSink,
) -> Option<EventKind> {
    if state.event_cooldown > 0 || state.ships == 0 {
        return None;
    }

    let kind = match EventKind::SPECIAL
        .into_iter()
        .find(|kind| kind.condition(state))
    {
        Some(special) => special,
        None => {
            if !roll::chance(rng, trigger_chance(state)) {
                return None;
            }
            let positive = roll::chance(rng, positive_chance(state));
            let pool: &[EventKind] = if positive {
                &EventKind::POSITIVE
            } else {
                &EventKind::NEGATIVE
            };
            roll::pick(rng, pool)?
        }
    };

    let message = kind.apply(state);
    sink.log(state.day, message);
    state.event_cooldown = roll_cooldown(rng);
    info!(
        event = kind.name(),
        tone = ?kind.tone(),
        cooldown = state.event_cooldown,
        day = state.day,
        "Exploration event fired"
    );
    Some(kind)
}

/// Cooldown of `floor(draw * 3) + 1` days.
fn roll_cooldown(rng: &mut impl Rng) -> u32 {
    let steps = usize::try_from(MAX_COOLDOWN_DAYS).unwrap_or(1);
    let offset = roll::index_from_draw(roll::draw(rng), steps).unwrap_or(0);
    u32::try_from(offset).unwrap_or(0).saturating_add(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::DateTime;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use saturn_types::LogEntry;

    use super::*;

    fn fresh() -> GameState {
        GameState::new(DateTime::from_timestamp_millis(0).unwrap())
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn chances_follow_exploration_and_fleet() {
        let mut state = fresh();
        state.ships = 5;
        state.research.exploration = 2;
        assert!(close(trigger_chance(&state), 0.25 + 0.10 + 0.10));
        assert!(close(positive_chance(&state), 0.76));

        state.ships = 40;
        state.research.exploration = 0;
        assert!(close(trigger_chance(&state), 0.45));
    }

    #[test]
    fn scheduler_is_gated_by_cooldown_and_fleet() {
        let mut state = fresh();
        let mut rng = SmallRng::seed_from_u64(1);
        let mut log: Vec<LogEntry> = Vec::new();
        assert_eq!(run_scheduler(&mut state, &mut rng, &mut log), None);

        state.ships = 3;
        state.event_cooldown = 2;
        assert_eq!(run_scheduler(&mut state, &mut rng, &mut log), None);
        assert!(log.is_empty());
        assert_eq!(state.event_cooldown, 2);
    }

    #[test]
    fn monolith_fires_without_a_roll_and_only_once() {
        let mut state = fresh();
        state.ships = 3;
        state.research.exploration = 2;
        let mut rng = SmallRng::seed_from_u64(9);
        let mut log: Vec<LogEntry> = Vec::new();

        assert_eq!(
            run_scheduler(&mut state, &mut rng, &mut log),
            Some(EventKind::MonolithDiscovery)
        );
        assert!(state.monolith.discovered);
        assert!((1..=3).contains(&state.event_cooldown));
        assert!(!EventKind::MonolithDiscovery.condition(&state));
    }

    #[test]
    fn seeded_scheduler_sets_cooldown_whenever_an_event_fires() {
        let mut rng = SmallRng::seed_from_u64(2024);
        for _ in 0..200 {
            let mut state = fresh();
            state.ships = 2;
            state.metal = 1_000.0;
            let fired = run_scheduler(&mut state, &mut rng, &mut Vec::new());
            match fired {
                Some(kind) => {
                    assert_ne!(kind.tone(), EventTone::Special);
                    assert!((1..=MAX_COOLDOWN_DAYS).contains(&state.event_cooldown));
                }
                None => assert_eq!(state.event_cooldown, 0),
            }
        }
    }

    #[test]
    fn lost_signal_scales_with_ships_and_level() {
        let mut state = fresh();
        state.ships = 4;
        state.research.exploration = 3;
        let message = EventKind::LostSignalDiscovery.apply(&mut state);
        // floor(4 * 50 * 1.3)
        assert!(close(state.metal, 260.0));
        assert!(close(state.active_rewards.temporary_metal_bonus, 260.0));
        assert!(message.contains("260"));
    }

    #[test]
    fn rare_crystal_is_worth_part_of_next_research() {
        let mut state = fresh();
        state.research.exploration = 1;
        EventKind::RareCrystalFormation.apply(&mut state);
        // floor(600 * 0.3)
        assert!(close(state.metal, 180.0));
        assert!(state.active_rewards.temporary_metal_bonus.abs() < f64::EPSILON);
    }

    #[test]
    fn losses_clamp_at_zero() {
        let mut state = fresh();
        state.ships = 10;
        state.metal = 50.0;
        EventKind::NavigationError.apply(&mut state);
        assert!(state.metal.abs() < f64::EPSILON);

        state.metal = 999.0;
        let message = EventKind::SolarStorm.apply(&mut state);
        assert!(close(state.metal, 950.0));
        assert!(message.contains("49"));
    }

    #[test]
    fn malfunction_is_repaired_two_days_later() {
        let mut state = fresh();
        let mut log: Vec<LogEntry> = Vec::new();
        state.day = 10;
        state.active_rewards.production_bonus = 0.15;
        EventKind::EquipmentMalfunction.apply(&mut state);
        assert!(close(state.active_rewards.production_bonus, 0.05));
        assert_eq!(state.pending_repairs.len(), 1);

        state.day = 11;
        assert_eq!(resolve_repairs(&mut state, &mut log), 0);
        assert!(close(state.active_rewards.production_bonus, 0.05));

        state.day = 12;
        assert_eq!(resolve_repairs(&mut state, &mut log), 1);
        assert!(close(state.active_rewards.production_bonus, 0.15));
        assert!(state.pending_repairs.is_empty());
        assert_eq!(
            log.first().unwrap().message,
            "Repairs completed. Production systems back to normal."
        );
    }

    #[test]
    fn overdue_repairs_resolve_together() {
        let mut state = fresh();
        state.day = 3;
        EventKind::AsteroidCollision.apply(&mut state);
        EventKind::AsteroidCollision.apply(&mut state);
        assert!(close(state.active_rewards.exploration_bonus, -0.10));
        state.day = 20;
        assert_eq!(resolve_repairs(&mut state, &mut Vec::new()), 2);
        assert!(state.active_rewards.exploration_bonus.abs() < 1e-9);
    }

    #[test]
    fn cooldown_stops_at_zero() {
        let mut state = fresh();
        state.event_cooldown = 1;
        tick_cooldown(&mut state);
        tick_cooldown(&mut state);
        assert_eq!(state.event_cooldown, 0);
    }
}

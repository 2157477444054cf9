//! Cosmetic flavor text. Nothing here touches simulation state.

use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use crate::roll;

/// Chance of a day flavor line when the fleet is non-empty.
pub const DAY_FLAVOR_CHANCE: f64 = 0.10;

/// Chance that launching a ship schedules a discovery line.
pub const LAUNCH_DISCOVERY_CHANCE: f64 = 0.30;

/// Real-time milliseconds before a launch discovery line is shown.
pub const LAUNCH_DISCOVERY_DELAY_MS: i64 = 2_000;

/// Status lines logged at random at the end of a day.
pub const DAY_FLAVOR_LINES: [&str; 5] = [
    "Survey crews report richer mineral seams in sector 7.",
    "A minor solar flare swept the rings. All systems holding.",
    "Long-range sensors picked up movement in the outer sectors.",
    "Automated systems running at peak efficiency.",
    "Fleet coordination protocols optimized.",
];

/// Lines a newly launched ship may report.
pub const LAUNCH_DISCOVERY_LINES: [&str; 5] = [
    "New ship reports a dense asteroid cluster rich in minerals.",
    "Scouts found debris from an unknown civilization drifting in the F ring.",
    "Scanners detected unusual energy signatures in the ring system.",
    "A new sector of Saturn's rings has been mapped.",
    "The crew found a pocket of rare ice crystals.",
];

/// Roll for today's flavor line. No draw is made without ships.
pub fn day_flavor(ships: u32, rng: &mut impl Rng) -> Option<&'static str> {
    if ships == 0 || !roll::chance(rng, DAY_FLAVOR_CHANCE) {
        return None;
    }
    roll::pick(rng, &DAY_FLAVOR_LINES)
}

/// Roll for a launch discovery line.
pub fn launch_discovery(rng: &mut impl Rng) -> Option<&'static str> {
    if !roll::chance(rng, LAUNCH_DISCOVERY_CHANCE) {
        return None;
    }
    roll::pick(rng, &LAUNCH_DISCOVERY_LINES)
}

/// A line waiting for its display time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredLine {
    /// Earliest instant the line may be shown.
    pub due: DateTime<Utc>,
    /// The line.
    pub message: &'static str,
}

/// Lines scheduled for later display, oldest first. Held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeferredLines {
    queue: VecDeque<DeferredLine>,
}

impl DeferredLines {
    /// Schedule `message` for display one launch delay after `now`.
    pub fn schedule_launch_line(&mut self, now: DateTime<Utc>, message: &'static str) {
        let due = now
            .checked_add_signed(TimeDelta::milliseconds(LAUNCH_DISCOVERY_DELAY_MS))
            .unwrap_or(now);
        self.schedule(due, message);
    }

    /// Schedule `message` for display at `due`.
    pub fn schedule(&mut self, due: DateTime<Utc>, message: &'static str) {
        self.queue.push_back(DeferredLine { due, message });
    }

    /// Remove and return every line due at or before `now`, in schedule
    /// order.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Vec<&'static str> {
        let mut due = Vec::new();
        self.queue.retain(|line| {
            if line.due <= now {
                due.push(line.message);
                false
            } else {
                true
            }
        });
        due
    }

    /// Number of lines still waiting.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Drop every waiting line.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

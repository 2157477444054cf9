//! Game clock: maps real elapsed time to in-game days.
//!
//! One in-game day lasts `day_length_ms` real milliseconds (60 000 by
//! default). Day 1 starts at the game start time, so
//! `day = floor((now - game_start_time) / day_length_ms) + 1`.
//!
//! The day is always derived from the start time and never counted
//! independently, so restoring `game_start_time` restores the calendar.

use chrono::{DateTime, Utc};

use crate::config::TimeConfig;

/// Real milliseconds in one in-game day.
pub const DEFAULT_DAY_LENGTH_MS: u64 = 60_000;

/// Errors that can occur when building a clock.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Invalid time configuration (e.g. a zero-length day).
    #[error("invalid time configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Converts wall-clock instants into game days and elapsed seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    /// Real milliseconds per in-game day.
    day_length_ms: u64,
}

impl GameClock {
    /// Create a clock with the given day length.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `day_length_ms` is 0.
    pub fn new(day_length_ms: u64) -> Result<Self, ClockError> {
        if day_length_ms == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "day_length_ms must be at least 1".to_owned(),
            });
        }
        Ok(Self { day_length_ms })
    }

    /// Create a clock from the time configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the configured day length
    /// is 0.
    pub fn from_config(config: &TimeConfig) -> Result<Self, ClockError> {
        Self::new(config.day_length_ms)
    }

    /// Real milliseconds per in-game day.
    pub const fn day_length_ms(&self) -> u64 {
        self.day_length_ms
    }

    /// The in-game day at `now` for a game that started at `start`.
    ///
    /// Instants before the start are day 1.
    pub fn day_at(&self, start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
        let elapsed_ms = u64::try_from(now.signed_duration_since(start).num_milliseconds())
            .unwrap_or(0);
        let days = elapsed_ms.checked_div(self.day_length_ms).unwrap_or(0);
        u32::try_from(days).unwrap_or(u32::MAX).saturating_add(1)
    }

    /// Real seconds between two instants, never negative.
    pub fn elapsed_seconds(since: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let ms = now.signed_duration_since(since).num_milliseconds().max(0);
        #[allow(clippy::cast_precision_loss)]
        let seconds = ms as f64 / 1000.0;
        seconds
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            day_length_ms: DEFAULT_DAY_LENGTH_MS,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn zero_day_length_is_rejected() {
        assert!(GameClock::new(0).is_err());
        assert_eq!(GameClock::new(1_000).unwrap().day_length_ms(), 1_000);
    }

    #[test]
    fn day_boundaries_fall_on_whole_minutes() {
        let clock = GameClock::default();
        let start = at(1_700_000_000_000);
        assert_eq!(clock.day_at(start, start), 1);
        assert_eq!(clock.day_at(start, start + TimeDelta::milliseconds(59_999)), 1);
        assert_eq!(clock.day_at(start, start + TimeDelta::milliseconds(60_000)), 2);
        assert_eq!(clock.day_at(start, start + TimeDelta::minutes(10)), 11);
    }

    #[test]
    fn instants_before_start_are_day_one() {
        let clock = GameClock::default();
        assert_eq!(clock.day_at(at(10_000), at(0)), 1);
    }

    #[test]
    fn elapsed_seconds_is_clamped() {
        assert!((GameClock::elapsed_seconds(at(0), at(2_500)) - 2.5).abs() < 1e-9);
        assert!(GameClock::elapsed_seconds(at(2_500), at(0)).abs() < f64::EPSILON);
    }
}

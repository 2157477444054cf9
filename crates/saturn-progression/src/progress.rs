//! Day-based progress arithmetic shared by the pipelines.

/// Percentage complete after `day - start_day` days of a `duration`-day
/// phase, capped at 100. A zero-length phase is immediately complete;
/// a `day` before `start_day` counts as no progress.
pub fn percent_elapsed(day: u32, start_day: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 100.0;
    }
    let elapsed = f64::from(day.saturating_sub(start_day));
    (elapsed / f64::from(duration) * 100.0).min(100.0)
}

/// Whether a progress value has reached completion.
pub fn is_complete(progress: f64) -> bool {
    progress >= 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn progress_is_linear_and_capped() {
        assert!(close(percent_elapsed(5, 5, 4), 0.0));
        assert!(close(percent_elapsed(6, 5, 4), 25.0));
        assert!(close(percent_elapsed(9, 5, 4), 100.0));
        assert!(close(percent_elapsed(20, 5, 4), 100.0));
    }

    #[test]
    fn degenerate_inputs() {
        assert!(close(percent_elapsed(3, 3, 0), 100.0));
        assert!(close(percent_elapsed(2, 3, 2), 0.0));
    }
}

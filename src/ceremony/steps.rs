//! Ceremony step table and progress math
//!
//! A hindu ceremony runs seven steps (the saat phere); every other
//! style runs five. Actions are free-form labels: any action advances
//! the index by one, and no transition table constrains which action
//! may follow which step.

/// Step key a freshly initialized ceremony starts on
pub const INITIAL_STEP_KEY: &str = "ready";

/// Total steps for styles without a dedicated count
pub const DEFAULT_TOTAL_STEPS: i32 = 5;

/// Total steps for a given wedding style
pub fn total_steps_for_style(style: &str) -> i32 {
    match style {
        "hindu" => 7,
        _ => DEFAULT_TOTAL_STEPS,
    }
}

/// Display progress for a step index
///
/// Saturates at 1.0: the index keeps growing with repeated actions
/// past the final step, but progress never exceeds full.
pub fn progress_for(step_index: i32, total_steps: i32) -> f64 {
    (f64::from(step_index) / f64::from(total_steps.max(1))).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hindu_has_seven_steps() {
        assert_eq!(total_steps_for_style("hindu"), 7);
    }

    #[test]
    fn test_other_styles_have_five_steps() {
        for style in ["christian", "muslim", "sikh", "south", "western", ""] {
            assert_eq!(total_steps_for_style(style), 5, "style {style:?}");
        }
    }

    #[test]
    fn test_progress_starts_at_zero() {
        assert_eq!(progress_for(0, 7), 0.0);
    }

    #[test]
    fn test_progress_climbs_in_equal_increments() {
        // Seven advances drive progress 0 -> 1.0 monotonically
        let mut last = 0.0;
        for index in 1..=7 {
            let progress = progress_for(index, 7);
            assert!(progress > last, "progress must be monotonic");
            assert!((progress - f64::from(index) / 7.0).abs() < 1e-12);
            last = progress;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_progress_saturates_past_total() {
        assert_eq!(progress_for(8, 7), 1.0);
        assert_eq!(progress_for(100, 7), 1.0);
    }

    #[test]
    fn test_progress_guards_zero_total() {
        // total_steps of zero must not divide by zero
        assert_eq!(progress_for(3, 0), 1.0);
    }
}

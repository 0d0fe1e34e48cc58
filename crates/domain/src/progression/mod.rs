//! Experience progression rules.
//!
//! Campaign bookkeeping awards characters gold and levels as a function of
//! their cumulative experience total. The mapping is a fixed step table: each
//! row pins a cumulative XP threshold to the total GP banked by that point and
//! the character level in effect. Awarding (or removing) XP means looking up
//! the row at or below the old total, the row at or below the new total, and
//! taking the GP difference.
//!
//! The table is compiled in and never mutated, so everything here is a pure
//! function and safe to call from any number of threads.

mod table;

use serde::{Deserialize, Serialize};

use table::PROGRESSION_TABLE;

/// The level every freshly created character starts at.
pub const MIN_LEVEL: u8 = 3;

/// The level cap. XP past the cap keeps earning GP but the level stays flat.
pub const MAX_LEVEL: u8 = 20;

/// One checkpoint in the experience table.
///
/// Rows are sorted by `threshold_xp` ascending, starting at 0. Both
/// `cumulative_gp` and `level` are non-decreasing across the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionStep {
    /// Cumulative XP required to reach this checkpoint.
    pub threshold_xp: i64,
    /// Total GP banked once `threshold_xp` is reached.
    pub cumulative_gp: i64,
    /// Character level in effect from this checkpoint on.
    pub level: u8,
}

/// Outcome of moving a character from one XP total to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResult {
    /// GP earned by the change. Negative when XP was removed.
    pub gp_gained: i64,
    /// Level at the new XP total.
    pub new_level: u8,
}

/// Finds the table row for an XP total.
///
/// Returns the row with the greatest threshold at or below `xp`. Totals below
/// the first threshold floor to the first row; totals past the last threshold
/// clamp to the last row rather than extrapolating.
fn step_at(xp: i64) -> &'static ProgressionStep {
    // Index of the first row whose threshold exceeds xp.
    let idx = PROGRESSION_TABLE.partition_point(|step| step.threshold_xp <= xp);
    // idx == 0 only when xp is below the first threshold (0); floor to row 0.
    &PROGRESSION_TABLE[idx.saturating_sub(1)]
}

/// The character level at a cumulative XP total.
pub fn level_at(xp: i64) -> u8 {
    step_at(xp).level
}

/// The total GP banked at a cumulative XP total.
pub fn cumulative_gp_at(xp: i64) -> i64 {
    step_at(xp).cumulative_gp
}

/// Computes the GP delta and resulting level for an XP change.
///
/// Total over all integer inputs: out-of-range totals clamp to the ends of
/// the table, and `new_xp` may be below `old_xp` (XP removal), in which case
/// `gp_gained` is negative.
///
/// # Example
///
/// ```
/// use questkeeper_domain::progression::compute_progression;
///
/// let result = compute_progression(1, 8);
/// assert_eq!(result.gp_gained, 775);
/// assert_eq!(result.new_level, 6);
/// ```
pub fn compute_progression(old_xp: i64, new_xp: i64) -> ProgressionResult {
    let old_step = step_at(old_xp);
    let new_step = step_at(new_xp);
    ProgressionResult {
        gp_gained: new_step.cumulative_gp - old_step.cumulative_gp,
        new_level: new_step.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_starts_at_zero() {
        assert_eq!(PROGRESSION_TABLE[0].threshold_xp, 0);
        assert_eq!(PROGRESSION_TABLE[0].cumulative_gp, 0);
        assert_eq!(PROGRESSION_TABLE[0].level, MIN_LEVEL);
    }

    #[test]
    fn test_table_is_strictly_increasing_by_threshold() {
        for pair in PROGRESSION_TABLE.windows(2) {
            assert!(pair[0].threshold_xp < pair[1].threshold_xp);
        }
    }

    #[test]
    fn test_gp_and_level_are_non_decreasing() {
        for pair in PROGRESSION_TABLE.windows(2) {
            assert!(pair[0].cumulative_gp <= pair[1].cumulative_gp);
            assert!(pair[0].level <= pair[1].level);
        }
    }

    #[test]
    fn test_levels_stay_within_bounds() {
        for step in &PROGRESSION_TABLE {
            assert!(step.level >= MIN_LEVEL);
            assert!(step.level <= MAX_LEVEL);
        }
        assert_eq!(PROGRESSION_TABLE.last().map(|s| s.level), Some(MAX_LEVEL));
    }

    #[test]
    fn test_monotonicity_of_lookups() {
        for xp in 0..200 {
            let lower = compute_progression(0, xp);
            let upper = compute_progression(0, xp + 1);
            assert!(lower.gp_gained <= upper.gp_gained);
            assert!(lower.new_level <= upper.new_level);
        }
    }

    #[test]
    fn test_zero_delta_is_identity() {
        for xp in [-50, 0, 1, 17, 135, 9999] {
            let result = compute_progression(xp, xp);
            assert_eq!(result.gp_gained, 0);
            assert_eq!(result.new_level, compute_progression(0, xp).new_level);
        }
    }

    #[test]
    fn test_sequential_awards_add_up() {
        for (a, b, c) in [(0, 1, 2), (1, 8, 20), (0, 67, 135), (3, 3, 90)] {
            let whole = compute_progression(a, c);
            let first = compute_progression(a, b);
            let second = compute_progression(b, c);
            assert_eq!(whole.gp_gained, first.gp_gained + second.gp_gained);
        }
    }

    #[test]
    fn test_negative_xp_floors_to_first_row() {
        assert_eq!(compute_progression(-100, 0), compute_progression(0, 0));
        assert_eq!(level_at(-1), MIN_LEVEL);
        assert_eq!(cumulative_gp_at(-1), 0);
    }

    #[test]
    fn test_known_boundaries() {
        let result = compute_progression(0, 1);
        assert_eq!(result.gp_gained, 65);
        assert_eq!(result.new_level, 3);

        let result = compute_progression(0, 2);
        assert_eq!(result.gp_gained, 130);
        assert_eq!(result.new_level, 4);

        let result = compute_progression(1, 8);
        assert_eq!(result.gp_gained, 840 - 65);
        assert_eq!(result.new_level, 6);
    }

    #[test]
    fn test_xp_removal_yields_negative_gp() {
        let result = compute_progression(8, 1);
        assert_eq!(result.gp_gained, 65 - 840);
        assert_eq!(result.new_level, 3);
    }

    #[test]
    fn test_clamps_past_the_last_row() {
        assert_eq!(
            compute_progression(0, 10_000_000),
            compute_progression(0, 135)
        );
        assert_eq!(level_at(i64::MAX), MAX_LEVEL);
        assert_eq!(cumulative_gp_at(10_000_000), 605_865);
    }

    #[test]
    fn test_result_serde_round_trip() {
        let result = compute_progression(0, 42);
        let json = serde_json::to_string(&result).expect("serialize");
        let back: ProgressionResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, result);
    }
}

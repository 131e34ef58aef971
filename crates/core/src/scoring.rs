//! Scoring module - line-clear points, level formula and gravity speed
//!
//! There is exactly one points table (`LINE_SCORES`: 10/25/40/50). It is not
//! multiplied by level and drops award nothing, so the score only ever moves
//! when rows are cleared.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows with one placement.
///
/// More than four rows can only happen on hand-built boards; those score as a
/// four-row clear.
pub fn line_clear_points(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Level for a running total of cleared lines (1-based)
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity interval (ms per row) for a level
pub fn drop_interval_ms(level: u32) -> u32 {
    let level = level.max(1);
    let table_len = DROP_INTERVALS.len() as u32;
    if level <= table_len {
        return DROP_INTERVALS[(level - 1) as usize];
    }

    let last = DROP_INTERVALS[DROP_INTERVALS.len() - 1];
    let extra = (level - table_len).saturating_mul(DROP_INTERVAL_STEP_MS);
    last.saturating_sub(extra).max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_points() {
        assert_eq!(line_clear_points(0), 0);
        assert_eq!(line_clear_points(1), 10);
        assert_eq!(line_clear_points(2), 25);
        assert_eq!(line_clear_points(3), 40);
        assert_eq!(line_clear_points(4), 50);
        assert_eq!(line_clear_points(7), 50);
    }

    #[test]
    fn test_level_for_lines() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(95), 10);
    }

    #[test]
    fn test_drop_interval_table() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(5), 400);
        assert_eq!(drop_interval_ms(9), 160);
        assert_eq!(drop_interval_ms(10), 150);
        assert_eq!(drop_interval_ms(14), 110);
    }

    #[test]
    fn test_drop_interval_floor() {
        assert_eq!(drop_interval_ms(15), 100);
        assert_eq!(drop_interval_ms(200), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);
        // Level 0 never happens, treat it as level 1.
        assert_eq!(drop_interval_ms(0), 1000);
    }

    #[test]
    fn test_drop_interval_never_increases() {
        let mut prev = drop_interval_ms(1);
        for level in 2..60 {
            let next = drop_interval_ms(level);
            assert!(next <= prev, "level {}", level);
            prev = next;
        }
    }
}

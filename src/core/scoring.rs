//! Scoring module - classic line-clear points, level curve, drop speed
//!
//! Uses the original Nintendo table: 40/100/300/1200 points for 1..4
//! simultaneous rows, scaled by (level + 1). Soft drops score nothing.

use crate::types::{BASE_DROP_MS, LEVEL_BONUS_MS, LINES_PER_LEVEL, LINE_POINTS};

/// Points awarded for clearing `rows` simultaneous rows at `level`.
pub fn line_clear_points(rows: usize, level: u32) -> u32 {
    if rows == 0 {
        return 0;
    }
    LINE_POINTS[rows.min(4) - 1] * (level + 1)
}

/// Whether enough rows have been cleared to advance a level.
pub fn should_level_up(rows_cleared: u32, level: u32) -> bool {
    rows_cleared > (level + 1) * LINES_PER_LEVEL
}

/// Gravity interval for a level (milliseconds).
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS / (level + 1) + LEVEL_BONUS_MS
}

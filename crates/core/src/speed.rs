//! Speed/level policy: pure mapping from progress to gravity cadence.

use blockfall_types::{DROP_INTERVALS_MS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL};

/// Gravity interval in milliseconds for a level (levels start at 1).
///
/// Non-increasing in level, with a hard floor so the interval never reaches
/// zero.
pub fn drop_interval_ms(level: u32) -> u64 {
    let idx = level.saturating_sub(1) as usize;
    DROP_INTERVALS_MS
        .get(idx)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Level implied by a cumulative cleared-line count: one level per 10 lines,
/// starting at level 1.
pub fn level_for_lines(cleared_lines: u32) -> u32 {
    cleared_lines / LINES_PER_LEVEL + 1
}

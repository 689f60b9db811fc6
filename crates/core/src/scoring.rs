//! Scoring module - line clear points, levels and gravity speed
//!
//! Classic rules only: a clear is worth a fixed amount per line count,
//! multiplied by (level + 1). There are no T-spin, combo or back-to-back
//! bonuses, and drops earn nothing.

use crate::types::{
    BASE_GRAVITY_MS, GRAVITY_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_GRAVITY_MS,
};

/// Base points for clearing `lines` rows at once.
///
/// Four or more rows score as four; zero rows score nothing.
pub fn score_for_lines(lines: usize) -> u32 {
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}

/// Calculate line clear score
/// lines: number of lines cleared
/// level: level before the clear is counted (0-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    score_for_lines(lines).saturating_mul(level.saturating_add(1))
}

/// Level reached after `lines` total cleared lines.
pub fn level_for_lines(lines: u32) -> u32 {
    lines / LINES_PER_LEVEL
}

/// Milliseconds between automatic one-row falls at `level`.
pub fn gravity_delay_ms(level: u32) -> u32 {
    BASE_GRAVITY_MS
        .saturating_sub(level.saturating_mul(GRAVITY_STEP_MS))
        .max(MIN_GRAVITY_MS)
}

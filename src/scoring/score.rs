//! Step score calculation
//!
//! The time bonus decays linearly from its maximum to zero over the bonus
//! window. Speed bonus and hint costs are deliberately separate functions
//! composed by the caller: hint cost is configurable per step, and the
//! base calculation must stay reusable without either adjustment.

use crate::core::{MAX_TIME_BONUS, SPEED_BONUS_MULTIPLIER, SPEED_BONUS_WINDOW_SECS};
use serde::{Deserialize, Serialize};

/// Result of scoring one completed step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCalculation {
    pub base_points: u32,
    pub time_bonus: u32,
    pub total_score: u32,
}

/// Score a step completion.
///
/// The bonus is `floor((max_time - elapsed) / max_time * 50)`, floored at
/// zero, so finishing instantly earns 50 and anything at or past the
/// window earns none.
pub fn calculate_score(base_points: u32, elapsed_secs: u32, max_time_secs: u32) -> ScoreCalculation {
    let time_bonus = if max_time_secs == 0 || elapsed_secs >= max_time_secs {
        0
    } else {
        let remaining = (max_time_secs - elapsed_secs) as f64;
        (remaining / max_time_secs as f64 * MAX_TIME_BONUS as f64).floor() as u32
    };

    ScoreCalculation {
        base_points,
        time_bonus,
        total_score: base_points + time_bonus,
    }
}

/// Sum the per-step scores of a hunt
pub fn calculate_total_score(step_scores: &[u32]) -> u32 {
    step_scores.iter().sum()
}

/// Multiply a step total by the speed bonus when the step was finished
/// inside the default speed window. Applied by the caller on top of
/// `calculate_score`, never inside it.
pub fn apply_speed_bonus(total_score: u32, elapsed_secs: u32) -> u32 {
    apply_speed_bonus_with_window(total_score, elapsed_secs, SPEED_BONUS_WINDOW_SECS)
}

/// Speed bonus with a caller-chosen qualification window
pub fn apply_speed_bonus_with_window(
    total_score: u32,
    elapsed_secs: u32,
    window_secs: u32,
) -> u32 {
    if elapsed_secs < window_secs {
        (total_score as f64 * SPEED_BONUS_MULTIPLIER).floor() as u32
    } else {
        total_score
    }
}

/// Deduct the cost of revealed hints from a step total, saturating at
/// zero. Applied by the caller; the cost per hint is a per-step setting.
pub fn apply_hint_cost(total_score: u32, hints_revealed: u32, cost_per_hint: u32) -> u32 {
    total_score.saturating_sub(hints_revealed.saturating_mul(cost_per_hint))
}

//! Hunt statistics and display formatting

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one hunt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuntStats {
    pub participant_count: u32,
    pub completion_count: u32,
    pub avg_time_secs: Option<u64>,
    pub avg_score: Option<f64>,
    /// Completions per participant, as a percentage
    pub completion_rate: f64,
}

impl HuntStats {
    pub fn completion_rate_of(participant_count: u32, completion_count: u32) -> f64 {
        if participant_count == 0 {
            0.0
        } else {
            completion_count as f64 / participant_count as f64 * 100.0
        }
    }
}

/// Format a duration for display: `2h 5m`, `3m 20s`, `45s`, or `N/A`
pub fn format_time(seconds: Option<u64>) -> String {
    let seconds = match seconds {
        Some(s) if s > 0 => s,
        _ => return "N/A".to_string(),
    };

    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a completion rate as a whole percentage
pub fn format_completion_rate(rate: f64) -> String {
    format!("{}%", rate.round() as i64)
}

//! Step scoring, hunt statistics, and progression rewards

pub mod achievements;
pub mod score;
pub mod stats;

pub use achievements::{
    check_achievements, check_badges, AchievementCode, BadgeCode, PlayerProgress, Rarity,
};
pub use score::{
    apply_hint_cost, apply_speed_bonus, apply_speed_bonus_with_window, calculate_score,
    calculate_total_score, ScoreCalculation,
};
pub use stats::{format_completion_rate, format_time, HuntStats};

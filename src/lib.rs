//! Geolocated scavenger-hunt engine
//!
//! The client-side core of a location-based hunt game: great-circle
//! distance math, an "AirPods-style" proximity homing indicator with
//! audio, haptic, and visual feedback, and time-decay step scoring with
//! speed bonuses and hint costs.

pub mod core;
pub mod feedback;
pub mod geo;
pub mod platform;
pub mod processing;
pub mod scoring;
pub mod session;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{Coordinate, PositionFix, TargetZone, EARTH_RADIUS_M};
pub use crate::feedback::{
    beep_interval_ms, proximity_feedback, BeepThrottle, FeedbackRenderer, HapticStrength,
    ProximityFeedback, RenderOutcome, VisualPulse,
};
pub use crate::geo::{format_distance, haversine_distance, is_within_radius, parse_point, WktError};
pub use crate::platform::{
    HapticMotor, MockHapticMotor, MockToneSink, NullHapticMotor, NullToneSink, PlatformError,
    PlatformResult, ToneSink, ToneSpec,
};
pub use crate::processing::FixSmoother;
pub use crate::scoring::{
    apply_hint_cost, apply_speed_bonus, apply_speed_bonus_with_window, calculate_score,
    calculate_total_score, check_achievements, check_badges, format_completion_rate, format_time,
    AchievementCode, BadgeCode, HuntStats, PlayerProgress, Rarity, ScoreCalculation,
};
pub use crate::session::{
    CallbackHandle, FeedbackUpdate, HuntSession, ProcessOutcome, SessionEvent, SessionState,
    StepScore,
};
pub use crate::utils::{ConfigError, ConfigValidation, SessionConfig};
pub use crate::validation::{FixValidationConfig, FixValidationError, FixValidator};

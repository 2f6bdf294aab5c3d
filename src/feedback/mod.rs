//! Proximity feedback: the "getting warmer" homing indicator
//!
//! Maps the distance to the current target onto audio, haptic, and visual
//! feedback that intensifies as the player closes in, and renders it
//! through the platform capability layer at a throttled cadence.

pub mod proximity;
pub mod renderer;
pub mod throttle;

pub use proximity::{proximity_feedback, HapticStrength, ProximityFeedback};
pub use renderer::{FeedbackRenderer, RenderOutcome, VisualPulse};
pub use throttle::{beep_interval_ms, BeepThrottle};

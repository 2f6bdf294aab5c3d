//! Physical constants and engine parameters

/// Mean Earth radius used by the great-circle distance math (meters)
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Feedback is fully suppressed beyond this multiple of the target radius
pub const DETECTION_CONE_MULTIPLIER: f64 = 3.0;

/// Lowest beep frequency, emitted at the edge of the detection cone (Hz)
pub const AUDIO_FREQ_FLOOR_HZ: f64 = 200.0;

/// Frequency span added on top of the floor as intensity rises to 1 (Hz)
pub const AUDIO_FREQ_SPAN_HZ: f64 = 1800.0;

/// Linear attack ramp at the start of every beep (milliseconds)
pub const TONE_ATTACK_MS: u32 = 10;

/// Default points awarded for completing a step
pub const DEFAULT_BASE_POINTS: u32 = 100;

/// Default window during which finishing a step still earns a time bonus (seconds)
pub const DEFAULT_MAX_BONUS_TIME_SECS: u32 = 300;

/// Time bonus awarded for an instant completion
pub const MAX_TIME_BONUS: u32 = 50;

/// Multiplier applied to a step score finished inside the speed-bonus window
pub const SPEED_BONUS_MULTIPLIER: f64 = 1.5;

/// Completions faster than this qualify for the speed bonus (seconds)
pub const SPEED_BONUS_WINDOW_SECS: u32 = 120;

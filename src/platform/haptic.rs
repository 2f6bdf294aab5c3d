//! Vibration capability

use crate::platform::{PlatformError, PlatformResult};

/// Vibration output seam.
///
/// Patterns are alternating vibrate/pause durations in milliseconds, the
/// convention used by browser and mobile vibration APIs.
pub trait HapticMotor {
    fn vibrate(&mut self, pattern: &[u32]) -> PlatformResult<()>;

    /// Whether this device can vibrate at all
    fn is_available(&self) -> bool;
}

/// Haptic motor for platforms without vibration. Every call is a no-op.
#[derive(Debug, Default)]
pub struct NullHapticMotor;

impl NullHapticMotor {
    pub fn new() -> Self {
        Self
    }
}

impl HapticMotor for NullHapticMotor {
    fn vibrate(&mut self, _pattern: &[u32]) -> PlatformResult<()> {
        Err(PlatformError::Unsupported {
            capability: "vibration".to_string(),
        })
    }

    fn is_available(&self) -> bool {
        false
    }
}

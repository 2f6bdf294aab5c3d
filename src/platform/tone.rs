//! Audio tone capability

use crate::core::TONE_ATTACK_MS;
use crate::platform::{PlatformError, PlatformResult};

/// Parameters of one proximity beep.
///
/// Backends render this as a sine tone with a linear attack ramp of
/// `attack_ms` followed by an exponential decay to near-silence over the
/// remaining duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f64,
    pub duration_ms: u32,
    /// Peak amplitude in [0, 1]
    pub volume: f64,
    pub attack_ms: u32,
}

impl ToneSpec {
    /// Beep parameters for a given frequency and proximity intensity:
    /// longer and louder the closer the player is, with the volume capped
    /// at 0.5.
    pub fn for_intensity(frequency_hz: f64, intensity: f64) -> Self {
        Self {
            frequency_hz,
            duration_ms: if intensity > 0.7 { 150 } else { 100 },
            volume: (intensity * 0.5).min(0.5),
            attack_ms: TONE_ATTACK_MS,
        }
    }
}

/// Audio output seam for proximity beeps.
///
/// Implementations must be non-blocking: `play_tone` schedules the tone and
/// returns, `stop` cuts off anything in flight immediately.
pub trait ToneSink {
    /// Start playing a tone. Any previous tone should already have been
    /// stopped by the caller.
    fn play_tone(&mut self, spec: &ToneSpec) -> PlatformResult<()>;

    /// Cut off the current tone, releasing the underlying audio resource
    fn stop(&mut self) -> PlatformResult<()>;

    /// Whether this backend can produce sound at all
    fn is_available(&self) -> bool;
}

/// Tone sink for platforms without audio output. Every call is a no-op.
#[derive(Debug, Default)]
pub struct NullToneSink;

impl NullToneSink {
    pub fn new() -> Self {
        Self
    }
}

impl ToneSink for NullToneSink {
    fn play_tone(&mut self, _spec: &ToneSpec) -> PlatformResult<()> {
        Err(PlatformError::Unsupported {
            capability: "audio".to_string(),
        })
    }

    fn stop(&mut self) -> PlatformResult<()> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}

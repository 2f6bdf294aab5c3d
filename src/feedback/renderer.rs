//! Feedback rendering through the platform capability layer
//!
//! Consumes the stream of proximity feedback values computed on each
//! position fix and drives audio and vibration at the throttled cadence.
//! Platform failures never propagate: a missing or broken backend degrades
//! the experience to visual-only and the rest of the play screen keeps
//! working.

use crate::feedback::proximity::ProximityFeedback;
use crate::feedback::throttle::BeepThrottle;
use crate::platform::{HapticMotor, ToneSink, ToneSpec};

/// Parameters for the on-screen pulse animation. The amplitude scales the
/// pulse size directly; the period shrinks as the player gets closer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualPulse {
    pub amplitude: f64,
    pub period_secs: f64,
}

impl VisualPulse {
    pub fn from_feedback(feedback: &ProximityFeedback) -> Self {
        Self {
            amplitude: feedback.visual_pulse,
            period_secs: 1.0 + (1.0 - feedback.visual_pulse),
        }
    }
}

/// What one render pass actually did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOutcome {
    pub beeped: bool,
    pub vibrated: bool,
    pub visual: VisualPulse,
}

/// Drives beeps, haptic pulses, and the visual indicator for one active
/// feedback session.
///
/// The throttle stamp is the only mutable temporal state and belongs to
/// this instance alone. Dropping the renderer stops any in-flight tone
/// synchronously so no oscillator lingers after the play screen is torn
/// down.
pub struct FeedbackRenderer {
    audio: Box<dyn ToneSink>,
    haptics: Box<dyn HapticMotor>,
    throttle: BeepThrottle,
    tone_active: bool,
    audio_failures: u32,
    haptic_failures: u32,
}

impl FeedbackRenderer {
    pub fn new(audio: Box<dyn ToneSink>, haptics: Box<dyn HapticMotor>) -> Self {
        Self {
            audio,
            haptics,
            throttle: BeepThrottle::new(),
            tone_active: false,
            audio_failures: 0,
            haptic_failures: 0,
        }
    }

    /// Render one feedback sample at the given time.
    ///
    /// Emits at most one beep and one haptic pulse per throttle window.
    /// Any in-flight tone is cut off before a new one starts.
    pub fn render(&mut self, feedback: &ProximityFeedback, now_ms: u64) -> RenderOutcome {
        let visual = VisualPulse::from_feedback(feedback);
        let mut outcome = RenderOutcome {
            beeped: false,
            vibrated: false,
            visual,
        };

        if feedback.is_suppressed() {
            return outcome;
        }

        if !self.throttle.should_emit(feedback.intensity, now_ms) {
            return outcome;
        }

        if self.audio.is_available() {
            if self.tone_active {
                let _ = self.audio.stop();
                self.tone_active = false;
            }

            let spec = ToneSpec::for_intensity(feedback.audio_frequency_hz, feedback.intensity);
            match self.audio.play_tone(&spec) {
                Ok(()) => {
                    self.tone_active = true;
                    outcome.beeped = true;
                }
                Err(_) => self.audio_failures += 1,
            }
        }

        if !feedback.haptic_strength.is_none() && self.haptics.is_available() {
            match self
                .haptics
                .vibrate(feedback.haptic_strength.vibration_pattern())
            {
                Ok(()) => outcome.vibrated = true,
                Err(_) => self.haptic_failures += 1,
            }
        }

        outcome
    }

    /// Cut off any in-flight tone, best-effort
    pub fn stop_audio(&mut self) {
        let _ = self.audio.stop();
        self.tone_active = false;
    }

    /// Reopen the beep window, e.g. when a new step starts
    pub fn reset_throttle(&mut self) {
        self.throttle.reset();
    }

    pub fn audio_failures(&self) -> u32 {
        self.audio_failures
    }

    pub fn haptic_failures(&self) -> u32 {
        self.haptic_failures
    }
}

impl Drop for FeedbackRenderer {
    fn drop(&mut self) {
        let _ = self.audio.stop();
    }
}

//! Beep cadence throttling
//!
//! Each feedback renderer owns one throttle; the last-beep timestamp is the
//! only mutable temporal state in the feedback path and it never leaves the
//! renderer instance. Timestamps are caller-supplied milliseconds so the
//! behavior is fully deterministic under test.

/// Throttle window for a given proximity intensity: beeps come faster the
/// closer the player gets.
pub fn beep_interval_ms(intensity: f64) -> u64 {
    if intensity > 0.8 {
        500
    } else if intensity > 0.5 {
        1000
    } else if intensity > 0.2 {
        2000
    } else {
        3000
    }
}

/// Per-session beep gate admitting at most one beep per throttle window
#[derive(Debug, Default)]
pub struct BeepThrottle {
    last_beep_ms: Option<u64>,
}

impl BeepThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a beep may be emitted now. Admitting a beep closes the
    /// window until `beep_interval_ms(intensity)` has elapsed.
    pub fn should_emit(&mut self, intensity: f64, now_ms: u64) -> bool {
        let window = beep_interval_ms(intensity);

        match self.last_beep_ms {
            Some(last) if now_ms.saturating_sub(last) < window => false,
            _ => {
                self.last_beep_ms = Some(now_ms);
                true
            }
        }
    }

    /// Reopen the window, e.g. when a new step starts
    pub fn reset(&mut self) {
        self.last_beep_ms = None;
    }
}

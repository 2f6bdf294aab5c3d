//! Mock platform backends for testing and development

use crate::platform::{HapticMotor, PlatformError, PlatformResult, ToneSink, ToneSpec};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ToneLogInner {
    played: Vec<ToneSpec>,
    stop_count: u32,
}

/// Shared view into a mock tone sink's recorded activity.
///
/// Clone one before handing the sink to a renderer; the log stays readable
/// after the sink has been boxed away.
#[derive(Debug, Clone, Default)]
pub struct ToneLog {
    inner: Arc<Mutex<ToneLogInner>>,
}

impl ToneLog {
    /// All tones played so far, in order
    pub fn played(&self) -> Vec<ToneSpec> {
        self.inner.lock().unwrap().played.clone()
    }

    pub fn play_count(&self) -> usize {
        self.inner.lock().unwrap().played.len()
    }

    pub fn stop_count(&self) -> u32 {
        self.inner.lock().unwrap().stop_count
    }

    pub fn last_played(&self) -> Option<ToneSpec> {
        self.inner.lock().unwrap().played.last().copied()
    }
}

/// Mock tone sink recording every call, with optional error simulation
pub struct MockToneSink {
    log: ToneLog,
    available: bool,
    simulate_errors: bool,
    error_probability: f32,
}

impl MockToneSink {
    pub fn new() -> Self {
        Self {
            log: ToneLog::default(),
            available: true,
            simulate_errors: false,
            error_probability: 0.0,
        }
    }

    /// Get a handle to the recorded activity
    pub fn log(&self) -> ToneLog {
        self.log.clone()
    }

    /// Report the sink as unavailable, like a platform without audio
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Enable error simulation with given probability (0.0 to 1.0)
    pub fn simulate_errors(&mut self, enable: bool, probability: f32) {
        self.simulate_errors = enable;
        self.error_probability = probability.clamp(0.0, 1.0);
    }

    fn should_simulate_error(&self) -> bool {
        if !self.simulate_errors {
            return false;
        }

        use rand::Rng;
        let mut rng = rand::thread_rng();
        rng.gen::<f32>() < self.error_probability
    }
}

impl Default for MockToneSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSink for MockToneSink {
    fn play_tone(&mut self, spec: &ToneSpec) -> PlatformResult<()> {
        if !self.available {
            return Err(PlatformError::Unsupported {
                capability: "audio".to_string(),
            });
        }

        if self.should_simulate_error() {
            return Err(PlatformError::BackendFailure {
                code: 1001,
                description: "Simulated tone failure".to_string(),
            });
        }

        self.log.inner.lock().unwrap().played.push(*spec);
        Ok(())
    }

    fn stop(&mut self) -> PlatformResult<()> {
        self.log.inner.lock().unwrap().stop_count += 1;
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

#[derive(Debug, Default)]
struct HapticLogInner {
    patterns: Vec<Vec<u32>>,
}

/// Shared view into a mock haptic motor's recorded activity
#[derive(Debug, Clone, Default)]
pub struct HapticLog {
    inner: Arc<Mutex<HapticLogInner>>,
}

impl HapticLog {
    pub fn patterns(&self) -> Vec<Vec<u32>> {
        self.inner.lock().unwrap().patterns.clone()
    }

    pub fn pulse_count(&self) -> usize {
        self.inner.lock().unwrap().patterns.len()
    }
}

/// Mock haptic motor recording every pattern, with optional error simulation
pub struct MockHapticMotor {
    log: HapticLog,
    available: bool,
    simulate_errors: bool,
    error_probability: f32,
}

impl MockHapticMotor {
    pub fn new() -> Self {
        Self {
            log: HapticLog::default(),
            available: true,
            simulate_errors: false,
            error_probability: 0.0,
        }
    }

    /// Get a handle to the recorded activity
    pub fn log(&self) -> HapticLog {
        self.log.clone()
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Enable error simulation with given probability (0.0 to 1.0)
    pub fn simulate_errors(&mut self, enable: bool, probability: f32) {
        self.simulate_errors = enable;
        self.error_probability = probability.clamp(0.0, 1.0);
    }

    fn should_simulate_error(&self) -> bool {
        if !self.simulate_errors {
            return false;
        }

        use rand::Rng;
        let mut rng = rand::thread_rng();
        rng.gen::<f32>() < self.error_probability
    }
}

impl Default for MockHapticMotor {
    fn default() -> Self {
        Self::new()
    }
}

impl HapticMotor for MockHapticMotor {
    fn vibrate(&mut self, pattern: &[u32]) -> PlatformResult<()> {
        if !self.available {
            return Err(PlatformError::Unsupported {
                capability: "vibration".to_string(),
            });
        }

        if self.should_simulate_error() {
            return Err(PlatformError::BackendFailure {
                code: 2001,
                description: "Simulated vibration failure".to_string(),
            });
        }

        self.log.inner.lock().unwrap().patterns.push(pattern.to_vec());
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

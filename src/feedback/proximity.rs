//! Distance-to-feedback mapping

use crate::core::{AUDIO_FREQ_FLOOR_HZ, AUDIO_FREQ_SPAN_HZ, DETECTION_CONE_MULTIPLIER};

/// Haptic pulse tiers, strongest when the player is nearly on top of the
/// target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticStrength {
    None,
    Light,
    Medium,
    Strong,
}

impl HapticStrength {
    /// Vibrate/pause pattern in milliseconds for this tier
    pub fn vibration_pattern(&self) -> &'static [u32] {
        match self {
            HapticStrength::None => &[],
            HapticStrength::Light => &[10],
            HapticStrength::Medium => &[20, 10, 20],
            HapticStrength::Strong => &[30, 15, 30, 15, 30],
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, HapticStrength::None)
    }
}

/// Feedback levels for one distance sample. Recomputed on every position
/// update, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityFeedback {
    /// How close the player is, 0 at the edge of detection, 1 on target
    pub intensity: f64,
    /// Beep pitch in Hz; higher means closer, 0 when suppressed
    pub audio_frequency_hz: f64,
    /// Drives the on-screen pulse animation, 0 to 1
    pub visual_pulse: f64,
    pub haptic_strength: HapticStrength,
}

impl ProximityFeedback {
    /// The all-quiet value used when there is no target or the player is
    /// outside the detection cone
    pub fn suppressed() -> Self {
        Self {
            intensity: 0.0,
            audio_frequency_hz: 0.0,
            visual_pulse: 0.0,
            haptic_strength: HapticStrength::None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.intensity == 0.0
    }
}

/// Map a distance sample onto feedback levels.
///
/// Everything is suppressed beyond `DETECTION_CONE_MULTIPLIER` times the
/// target radius, or when the distance is unknown. Inside the cone the
/// intensity follows a square-root curve of the normalized distance, so
/// feedback ramps up quickly at the edge of detection and saturates near
/// the target instead of growing linearly. The curve shape and the haptic
/// thresholds are part of the behavioral contract.
pub fn proximity_feedback(distance_m: Option<f64>, radius_m: f64) -> ProximityFeedback {
    let cone_m = radius_m * DETECTION_CONE_MULTIPLIER;

    let distance = match distance_m {
        Some(d) if d <= cone_m => d,
        _ => return ProximityFeedback::suppressed(),
    };

    let normalized = (1.0 - distance / cone_m).clamp(0.0, 1.0);
    let intensity = normalized.sqrt();

    let haptic_strength = if intensity > 0.8 {
        HapticStrength::Strong
    } else if intensity > 0.5 {
        HapticStrength::Medium
    } else if intensity > 0.2 {
        HapticStrength::Light
    } else {
        HapticStrength::None
    };

    ProximityFeedback {
        intensity,
        audio_frequency_hz: AUDIO_FREQ_FLOOR_HZ + intensity * AUDIO_FREQ_SPAN_HZ,
        visual_pulse: intensity,
        haptic_strength,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_distance_is_suppressed() {
        let feedback = proximity_feedback(None, 50.0);
        assert_eq!(feedback, ProximityFeedback::suppressed());
    }

    #[test]
    fn test_beyond_detection_cone_is_suppressed() {
        // 200 m with a 50 m radius is outside the 150 m cone
        let feedback = proximity_feedback(Some(200.0), 50.0);
        assert_eq!(feedback.intensity, 0.0);
        assert_eq!(feedback.audio_frequency_hz, 0.0);
        assert_eq!(feedback.haptic_strength, HapticStrength::None);
        assert!(feedback.is_suppressed());
    }

    #[test]
    fn test_cone_boundary_is_zero() {
        let feedback = proximity_feedback(Some(150.0), 50.0);
        assert_eq!(feedback.intensity, 0.0);
    }

    #[test]
    fn test_on_target_is_full_intensity() {
        let feedback = proximity_feedback(Some(0.0), 50.0);
        assert!((feedback.intensity - 1.0).abs() < 1e-12);
        assert!((feedback.audio_frequency_hz - 2000.0).abs() < 1e-9);
        assert_eq!(feedback.haptic_strength, HapticStrength::Strong);
    }

    #[test]
    fn test_close_approach_scenario() {
        // 10 m out with a 50 m radius: normalized 1 - 10/150, intensity
        // sqrt of that, pitch just shy of 2 kHz
        let feedback = proximity_feedback(Some(10.0), 50.0);
        assert!((feedback.intensity - 0.966).abs() < 0.001);
        assert!((feedback.audio_frequency_hz - 1939.0).abs() < 1.0);
        assert_eq!(feedback.haptic_strength, HapticStrength::Strong);
    }

    #[test]
    fn test_intensity_is_monotonically_non_increasing() {
        let radius = 50.0;
        let mut previous = f64::INFINITY;
        for step in 0..=300 {
            let distance = step as f64;
            let intensity = proximity_feedback(Some(distance), radius).intensity;
            assert!(
                intensity <= previous,
                "intensity rose between {} m and {} m",
                distance - 1.0,
                distance
            );
            previous = intensity;
        }
    }

    #[test]
    fn test_frequency_stays_in_band_when_audible() {
        let radius = 50.0;
        for step in 0..150 {
            let feedback = proximity_feedback(Some(step as f64), radius);
            if feedback.intensity > 0.0 {
                assert!(feedback.audio_frequency_hz >= 200.0);
                assert!(feedback.audio_frequency_hz <= 2000.0);
            } else {
                assert_eq!(feedback.audio_frequency_hz, 0.0);
            }
        }
    }

    #[test]
    fn test_haptic_tiers() {
        let radius = 50.0;
        let cone = radius * DETECTION_CONE_MULTIPLIER;

        // Solve distance for a wanted intensity: d = cone * (1 - i^2)
        let at_intensity = |i: f64| cone * (1.0 - i * i);

        let strong = proximity_feedback(Some(at_intensity(0.85)), radius);
        assert_eq!(strong.haptic_strength, HapticStrength::Strong);

        let medium = proximity_feedback(Some(at_intensity(0.65)), radius);
        assert_eq!(medium.haptic_strength, HapticStrength::Medium);

        let light = proximity_feedback(Some(at_intensity(0.35)), radius);
        assert_eq!(light.haptic_strength, HapticStrength::Light);

        let none = proximity_feedback(Some(at_intensity(0.15)), radius);
        assert_eq!(none.haptic_strength, HapticStrength::None);
    }

    #[test]
    fn test_vibration_patterns() {
        assert_eq!(HapticStrength::Light.vibration_pattern(), &[10]);
        assert_eq!(HapticStrength::Medium.vibration_pattern(), &[20, 10, 20]);
        assert_eq!(
            HapticStrength::Strong.vibration_pattern(),
            &[30, 15, 30, 15, 30]
        );
        assert!(HapticStrength::None.vibration_pattern().is_empty());
    }
}

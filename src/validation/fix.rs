//! Position-fix gating
//!
//! Live fixes are the one place untrusted numbers enter the engine. The
//! validator rejects garbage before it reaches the smoothing filter and
//! the proximity math: out-of-range coordinates, stale readings, fixes
//! with hopeless accuracy, and teleport-style jumps.

use crate::core::PositionFix;
use crate::geo::distance::haversine_distance;
use std::fmt;

/// Thresholds for accepting a position fix
#[derive(Debug, Clone)]
pub struct FixValidationConfig {
    /// Maximum age of a fix relative to the wall clock (milliseconds)
    pub max_fix_age_ms: u64,
    /// Reported accuracy worse than this rejects the fix (meters)
    pub max_accuracy_m: f64,
    /// Maximum plausible movement since the last accepted fix (meters)
    pub max_position_jump_m: f64,
}

impl Default for FixValidationConfig {
    fn default() -> Self {
        Self {
            max_fix_age_ms: 30_000,
            max_accuracy_m: 100.0,
            max_position_jump_m: 500.0,
        }
    }
}

/// Reasons a position fix is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum FixValidationError {
    LatitudeOutOfRange { lat: f64 },
    LongitudeOutOfRange { lon: f64 },
    StaleFix { age_ms: u64 },
    PoorAccuracy { accuracy_m: f64 },
    PositionJump { distance_m: f64 },
}

impl fmt::Display for FixValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixValidationError::LatitudeOutOfRange { lat } => {
                write!(f, "Latitude out of range: {}", lat)
            }
            FixValidationError::LongitudeOutOfRange { lon } => {
                write!(f, "Longitude out of range: {}", lon)
            }
            FixValidationError::StaleFix { age_ms } => {
                write!(f, "Stale fix: {} ms old", age_ms)
            }
            FixValidationError::PoorAccuracy { accuracy_m } => {
                write!(f, "Accuracy too poor: {:.1} m", accuracy_m)
            }
            FixValidationError::PositionJump { distance_m } => {
                write!(f, "Implausible position jump: {:.1} m", distance_m)
            }
        }
    }
}

impl std::error::Error for FixValidationError {}

/// Stateful validator tracking the last accepted fix for jump detection
pub struct FixValidator {
    config: FixValidationConfig,
    last_accepted: Option<PositionFix>,
}

impl FixValidator {
    pub fn new() -> Self {
        Self::with_config(FixValidationConfig::default())
    }

    pub fn with_config(config: FixValidationConfig) -> Self {
        Self {
            config,
            last_accepted: None,
        }
    }

    pub fn update_config(&mut self, config: FixValidationConfig) {
        self.config = config;
    }

    /// Validate one fix against the thresholds and the previous accepted
    /// fix. Accepted fixes become the new jump reference.
    pub fn validate(
        &mut self,
        fix: &PositionFix,
        now_ms: u64,
    ) -> Result<(), FixValidationError> {
        let coordinate = fix.coordinate;

        if !(-90.0..=90.0).contains(&coordinate.lat) {
            return Err(FixValidationError::LatitudeOutOfRange {
                lat: coordinate.lat,
            });
        }
        if !(-180.0..=180.0).contains(&coordinate.lon) {
            return Err(FixValidationError::LongitudeOutOfRange {
                lon: coordinate.lon,
            });
        }

        let age_ms = now_ms.saturating_sub(fix.timestamp_ms);
        if age_ms > self.config.max_fix_age_ms {
            return Err(FixValidationError::StaleFix { age_ms });
        }

        if let Some(accuracy_m) = fix.accuracy_m {
            if accuracy_m > self.config.max_accuracy_m {
                return Err(FixValidationError::PoorAccuracy { accuracy_m });
            }
        }

        if let Some(previous) = &self.last_accepted {
            let distance_m = haversine_distance(previous.coordinate, coordinate);
            if distance_m > self.config.max_position_jump_m {
                return Err(FixValidationError::PositionJump { distance_m });
            }
        }

        self.last_accepted = Some(*fix);
        Ok(())
    }

    /// Forget the jump reference, e.g. when a new step starts
    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for FixValidator {
    fn default() -> Self {
        Self::new()
    }
}

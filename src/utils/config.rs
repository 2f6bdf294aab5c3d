//! Session configuration with validation and JSON persistence

use crate::core::{
    DEFAULT_BASE_POINTS, DEFAULT_MAX_BONUS_TIME_SECS, SPEED_BONUS_WINDOW_SECS,
};
use crate::validation::fix::FixValidationConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Tunable parameters of one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Validation radius used when a step does not carry its own (meters)
    pub default_radius_m: f64,
    /// Points awarded per completed step
    pub base_points: u32,
    /// Window during which finishing still earns a time bonus (seconds)
    pub max_bonus_time_secs: u32,
    /// Completions faster than this earn the speed bonus (seconds)
    pub speed_bonus_window_secs: u32,
    /// Points deducted per revealed hint
    pub hint_cost_points: u32,
    /// Master switch for audio and haptic feedback
    pub feedback_enabled: bool,
    /// Run position fixes through the smoothing filter
    pub smoothing_enabled: bool,
    /// Maximum age of an accepted fix (milliseconds)
    pub max_fix_age_ms: u64,
    /// Reported accuracy worse than this rejects the fix (meters)
    pub max_fix_accuracy_m: f64,
    /// Maximum plausible movement between consecutive fixes (meters)
    pub max_position_jump_m: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_radius_m: 50.0,
            base_points: DEFAULT_BASE_POINTS,
            max_bonus_time_secs: DEFAULT_MAX_BONUS_TIME_SECS,
            speed_bonus_window_secs: SPEED_BONUS_WINDOW_SECS,
            hint_cost_points: 10,
            feedback_enabled: true,
            smoothing_enabled: true,
            max_fix_age_ms: 30_000,
            max_fix_accuracy_m: 100.0,
            max_position_jump_m: 500.0,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone)]
pub enum ConfigError {
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },
    IoError {
        message: String,
    },
    SerializationError {
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{}' = '{}': {}", parameter, value, reason)
            }
            ConfigError::IoError { message } => write!(f, "I/O error: {}", message),
            ConfigError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validation outcome with errors, warnings, and suggested corrections
#[derive(Debug)]
pub struct ConfigValidation {
    pub is_valid: bool,
    pub errors: Vec<ConfigError>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl SessionConfig {
    /// Load a configuration from a JSON file, validating before returning
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            message: format!("Failed to read config file '{}': {}", path_str, e),
        })?;

        let config: SessionConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to parse config file '{}': {}", path_str, e),
            })?;

        let validation = config.validate();
        if !validation.is_valid {
            return Err(validation.errors.into_iter().next().unwrap_or(
                ConfigError::InvalidParameter {
                    parameter: "session_config".to_string(),
                    value: "invalid".to_string(),
                    reason: "Configuration validation failed".to_string(),
                },
            ));
        }

        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let content =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializationError {
                message: format!("Failed to serialize config: {}", e),
            })?;

        fs::write(&path, content).map_err(|e| ConfigError::IoError {
            message: format!("Failed to write config file '{}': {}", path_str, e),
        })
    }

    /// Validate the configuration, collecting every problem rather than
    /// stopping at the first
    pub fn validate(&self) -> ConfigValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        if self.default_radius_m <= 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "default_radius_m".to_string(),
                value: self.default_radius_m.to_string(),
                reason: "Validation radius must be positive".to_string(),
            });
        } else if self.default_radius_m < 10.0 {
            warnings.push(
                "Very small validation radius may be unreachable with consumer GPS accuracy"
                    .to_string(),
            );
            suggestions.push("Consider a radius of at least 20 meters".to_string());
        } else if self.default_radius_m > 10_000.0 {
            warnings.push("Very large validation radius makes steps trivial".to_string());
        }

        if self.base_points == 0 {
            warnings.push("Zero base points make step completions worthless".to_string());
        }

        if self.max_bonus_time_secs == 0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "max_bonus_time_secs".to_string(),
                value: self.max_bonus_time_secs.to_string(),
                reason: "Bonus window must be positive".to_string(),
            });
        }

        if self.speed_bonus_window_secs >= self.max_bonus_time_secs
            && self.max_bonus_time_secs > 0
        {
            warnings.push(
                "Speed bonus window is not shorter than the time bonus window".to_string(),
            );
        }

        if self.hint_cost_points > self.base_points {
            warnings.push("A single hint costs more than a step is worth".to_string());
        }

        if self.max_fix_age_ms < 1_000 {
            warnings
                .push("Very short fix age limit may reject most position updates".to_string());
        }

        if self.max_fix_accuracy_m <= 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "max_fix_accuracy_m".to_string(),
                value: self.max_fix_accuracy_m.to_string(),
                reason: "Accuracy threshold must be positive".to_string(),
            });
        }

        if self.max_position_jump_m <= 0.0 {
            errors.push(ConfigError::InvalidParameter {
                parameter: "max_position_jump_m".to_string(),
                value: self.max_position_jump_m.to_string(),
                reason: "Jump threshold must be positive".to_string(),
            });
        }

        ConfigValidation {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }

    /// The fix-validation thresholds carried by this configuration
    pub fn fix_validation(&self) -> FixValidationConfig {
        FixValidationConfig {
            max_fix_age_ms: self.max_fix_age_ms,
            max_accuracy_m: self.max_fix_accuracy_m,
            max_position_jump_m: self.max_position_jump_m,
        }
    }
}

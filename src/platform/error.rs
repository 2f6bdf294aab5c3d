//! Platform capability error types

use std::fmt;

/// Errors reported by audio and vibration backends
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformError {
    /// The capability does not exist on this platform
    Unsupported { capability: String },
    /// The device is temporarily unable to take the request
    DeviceBusy { capability: String },
    /// Backend-specific failure
    BackendFailure { code: u32, description: String },
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Unsupported { capability } => {
                write!(f, "Capability not supported: {}", capability)
            }
            PlatformError::DeviceBusy { capability } => {
                write!(f, "Device busy: {}", capability)
            }
            PlatformError::BackendFailure { code, description } => {
                write!(f, "Backend failure {}: {}", code, description)
            }
        }
    }
}

impl std::error::Error for PlatformError {}

impl PlatformError {
    /// Whether retrying the operation later can succeed
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PlatformError::Unsupported { .. })
    }
}

/// Result type for platform capability operations
pub type PlatformResult<T> = Result<T, PlatformError>;

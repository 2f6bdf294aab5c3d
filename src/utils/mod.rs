//! Configuration and shared utilities

pub mod config;

pub use config::{ConfigError, ConfigValidation, SessionConfig};

//! Input validation for live position data

pub mod fix;

pub use fix::{FixValidationConfig, FixValidationError, FixValidator};

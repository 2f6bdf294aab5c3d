//! Position-fix processing

pub mod smoother;

pub use smoother::FixSmoother;

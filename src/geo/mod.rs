//! Geodetic math and target-geometry parsing
//!
//! This module provides the great-circle distance calculation used for
//! proximity checks and the parser for the point-geometry strings the
//! storage backend hands back for step locations.

pub mod distance;
pub mod wkt;

pub use distance::{format_distance, haversine_distance, is_within_radius};
pub use wkt::{parse_point, WktError};

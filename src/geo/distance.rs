//! Great-circle distance calculation and display formatting

use crate::core::{Coordinate, EARTH_RADIUS_M};

/// Great-circle surface distance between two coordinates in meters,
/// computed with the Haversine formula.
///
/// Inputs are assumed to be valid WGS84 degrees; out-of-range values are
/// not checked and produce unspecified results.
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Check whether a position lies within `radius_m` meters of a target
pub fn is_within_radius(position: Coordinate, target: Coordinate, radius_m: f64) -> bool {
    haversine_distance(position, target) <= radius_m
}

/// Format a distance for display: whole meters below 1 km, otherwise
/// kilometers with one decimal
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters.round() as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

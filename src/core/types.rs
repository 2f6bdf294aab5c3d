//! Core data types for the hunt engine

/// Geodetic coordinate in WGS84 degrees, longitude first to match the
/// `POINT(lon lat)` wire encoding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// One reading from a platform location provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionFix {
    pub coordinate: Coordinate,
    /// Reported horizontal accuracy in meters, if the provider gives one
    pub accuracy_m: Option<f64>,
    pub timestamp_ms: u64,
}

impl PositionFix {
    pub fn new(lon: f64, lat: f64, timestamp_ms: u64) -> Self {
        Self {
            coordinate: Coordinate::new(lon, lat),
            accuracy_m: None,
            timestamp_ms,
        }
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Self {
        self.accuracy_m = Some(accuracy_m);
        self
    }
}

/// Validation zone of a hunt step: a center point and a radius in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetZone {
    pub center: Coordinate,
    pub radius_m: f64,
}

impl TargetZone {
    pub fn new(center: Coordinate, radius_m: f64) -> Self {
        Self { center, radius_m }
    }
}

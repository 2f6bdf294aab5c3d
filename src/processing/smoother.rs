//! Temporal smoothing of noisy position fixes
//!
//! Consumer location providers jitter by tens of meters between fixes.
//! Fed raw into the proximity curve, that jitter makes the intensity flap
//! across haptic tiers while the player stands still. This filter tracks
//! position and velocity on a local east/north tangent plane anchored at
//! the first fix and blends each measurement against a constant-velocity
//! prediction, weighted by the provider's reported accuracy.

use crate::core::{Coordinate, PositionFix, EARTH_RADIUS_M};
use nalgebra::{Matrix2, Matrix2x4, Matrix4, Vector2, Vector4};

/// Measurement noise assumed when a fix carries no accuracy estimate (meters)
const DEFAULT_ACCURACY_M: f64 = 10.0;

/// Kalman filter over `[east, north, v_east, v_north]` in meters and m/s
pub struct FixSmoother {
    state: Vector4<f64>,
    covariance: Matrix4<f64>,
    process_noise: Matrix4<f64>,
    /// Tangent-plane origin, set by the first accepted fix
    origin: Option<Coordinate>,
    last_update_ms: Option<u64>,
    /// Gap between fixes beyond which the filter restarts (seconds)
    max_time_gap_secs: f64,
}

impl FixSmoother {
    pub fn new() -> Self {
        Self {
            state: Vector4::zeros(),
            covariance: Matrix4::identity() * 100.0,
            process_noise: Self::process_noise_matrix(0.5, 0.1),
            origin: None,
            last_update_ms: None,
            max_time_gap_secs: 10.0,
        }
    }

    /// Create a smoother with custom process noise parameters
    pub fn with_noise_parameters(position_noise: f64, velocity_noise: f64) -> Self {
        let mut smoother = Self::new();
        smoother.process_noise = Self::process_noise_matrix(position_noise, velocity_noise);
        smoother
    }

    /// Smooth one fix, returning the filtered coordinate.
    ///
    /// The first fix, and any fix arriving after a time gap longer than the
    /// reset threshold (or with a timestamp behind the previous one),
    /// reinitializes the filter and passes through unchanged.
    pub fn smooth(&mut self, fix: &PositionFix) -> Coordinate {
        let origin = match self.origin {
            Some(origin) => origin,
            None => {
                self.initialize(fix);
                return fix.coordinate;
            }
        };

        let dt = match self.last_update_ms {
            Some(last) if fix.timestamp_ms >= last => {
                (fix.timestamp_ms - last) as f64 / 1000.0
            }
            _ => {
                self.initialize(fix);
                return fix.coordinate;
            }
        };

        if dt > self.max_time_gap_secs {
            self.initialize(fix);
            return fix.coordinate;
        }

        self.predict(dt);

        let measurement = Self::to_local(origin, fix.coordinate);
        let accuracy = fix.accuracy_m.unwrap_or(DEFAULT_ACCURACY_M).max(1.0);
        let r = Matrix2::identity() * accuracy * accuracy;

        // Observation matrix: we measure position directly
        let h = Matrix2x4::new(
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0,
        );

        let innovation = measurement - h * self.state;
        let s = h * self.covariance * h.transpose() + r;

        if let Some(s_inv) = s.try_inverse() {
            let k = self.covariance * h.transpose() * s_inv;
            self.state += k * innovation;

            // Joseph form keeps the covariance symmetric positive definite
            let i_kh = Matrix4::identity() - k * h;
            self.covariance =
                i_kh * self.covariance * i_kh.transpose() + k * r * k.transpose();
        }

        self.last_update_ms = Some(fix.timestamp_ms);
        Self::to_geodetic(origin, Vector2::new(self.state[0], self.state[1]))
    }

    /// Current speed estimate in meters per second
    pub fn speed_mps(&self) -> f64 {
        Vector2::new(self.state[2], self.state[3]).norm()
    }

    pub fn is_initialized(&self) -> bool {
        self.origin.is_some()
    }

    /// Forget all state; the next fix reinitializes the filter
    pub fn reset(&mut self) {
        self.state = Vector4::zeros();
        self.covariance = Matrix4::identity() * 100.0;
        self.origin = None;
        self.last_update_ms = None;
    }

    fn initialize(&mut self, fix: &PositionFix) {
        self.origin = Some(fix.coordinate);
        self.state = Vector4::zeros();
        self.covariance = Matrix4::identity();
        let accuracy = fix.accuracy_m.unwrap_or(DEFAULT_ACCURACY_M).max(1.0);
        self.covariance[(0, 0)] = accuracy * accuracy;
        self.covariance[(1, 1)] = accuracy * accuracy;
        self.covariance[(2, 2)] = 1.0;
        self.covariance[(3, 3)] = 1.0;
        self.last_update_ms = Some(fix.timestamp_ms);
    }

    fn predict(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        let f = Matrix4::new(
            1.0, 0.0, dt, 0.0, //
            0.0, 1.0, 0.0, dt, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        );

        self.state = f * self.state;
        self.covariance = f * self.covariance * f.transpose() + self.process_noise * dt;
    }

    fn process_noise_matrix(position_noise: f64, velocity_noise: f64) -> Matrix4<f64> {
        let mut q = Matrix4::zeros();
        q[(0, 0)] = position_noise;
        q[(1, 1)] = position_noise;
        q[(2, 2)] = velocity_noise;
        q[(3, 3)] = velocity_noise;
        q
    }

    /// Project a coordinate onto the east/north plane around the origin
    fn to_local(origin: Coordinate, coordinate: Coordinate) -> Vector2<f64> {
        let east = (coordinate.lon - origin.lon).to_radians()
            * origin.lat.to_radians().cos()
            * EARTH_RADIUS_M;
        let north = (coordinate.lat - origin.lat).to_radians() * EARTH_RADIUS_M;
        Vector2::new(east, north)
    }

    fn to_geodetic(origin: Coordinate, local: Vector2<f64>) -> Coordinate {
        let lat = origin.lat + (local.y / EARTH_RADIUS_M).to_degrees();
        let lon = origin.lon
            + (local.x / (EARTH_RADIUS_M * origin.lat.to_radians().cos())).to_degrees();
        Coordinate::new(lon, lat)
    }
}

impl Default for FixSmoother {
    fn default() -> Self {
        Self::new()
    }
}

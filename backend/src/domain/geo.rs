//! Great-circle geometry on a spherical Earth.
//!
//! # Coordinate System
//!
//! - Latitude: degrees north (-90 to 90)
//! - Longitude: degrees east (-180 to 180)
//! - Distance: meters

use serde::{Deserialize, Serialize};

use super::errors::{TrackingError, TrackingResult};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A validated latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> TrackingResult<Self> {
        validate_latitude(latitude)?;
        validate_longitude(longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Distance in meters to another coordinate.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance_m(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

pub fn validate_latitude(latitude: f64) -> TrackingResult<()> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(TrackingError::validation(format!(
            "latitude must be between -90 and 90, got {}",
            latitude
        )));
    }
    Ok(())
}

pub fn validate_longitude(longitude: f64) -> TrackingResult<()> {
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(TrackingError::validation(format!(
            "longitude must be between -180 and 180, got {}",
            longitude
        )));
    }
    Ok(())
}

/// Great-circle distance in meters between two points using the haversine
/// formula.
///
/// The intermediate term is clamped to `[0, 1]` so identical and antipodal
/// points never produce NaN.
///
/// # Example
///
/// ```
/// use family_tracker_backend::domain::geo::haversine_distance_m;
///
/// let d = haversine_distance_m(0.0, 0.0, 0.0, 180.0);
/// assert!((d - 20_015_086.0).abs() < 20_015.0);
/// ```
pub fn haversine_distance_m(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let delta_phi = (lat_b - lat_a).to_radians();
    let delta_lambda = (lon_b - lon_a).to_radians();

    let sin_half_phi = (delta_phi / 2.0).sin();
    let sin_half_lambda = (delta_lambda / 2.0).sin();

    let a = sin_half_phi * sin_half_phi
        + phi_a.cos() * phi_b.cos() * sin_half_lambda * sin_half_lambda;
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_CIRCUMFERENCE_M: f64 = 20_015_086.0;

    #[test]
    fn test_identical_points_are_zero_apart() {
        let points = [
            (0.0, 0.0),
            (48.8566, 2.3522),
            (90.0, 0.0),
            (-90.0, 180.0),
            (-33.8688, 151.2093),
            (12.5, -180.0),
        ];
        for (lat, lon) in points {
            assert_eq!(haversine_distance_m(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            ((48.8566, 2.3522), (51.5074, -0.1278)),
            ((40.7128, -74.0060), (-33.8688, 151.2093)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];
        for ((lat_a, lon_a), (lat_b, lon_b)) in pairs {
            let ab = haversine_distance_m(lat_a, lon_a, lat_b, lon_b);
            let ba = haversine_distance_m(lat_b, lon_b, lat_a, lon_a);
            assert!((ab - ba).abs() < 1e-6, "{} != {}", ab, ba);
        }
    }

    #[test]
    fn test_half_circumference_along_equator() {
        let d = haversine_distance_m(0.0, 0.0, 0.0, 180.0);
        let tolerance = HALF_CIRCUMFERENCE_M * 0.001;
        assert!((d - HALF_CIRCUMFERENCE_M).abs() < tolerance, "got {}", d);
    }

    #[test]
    fn test_antipodal_poles_do_not_produce_nan() {
        let d = haversine_distance_m(90.0, 0.0, -90.0, 0.0);
        assert!(d.is_finite());
        assert!((d - HALF_CIRCUMFERENCE_M).abs() < HALF_CIRCUMFERENCE_M * 0.001);
    }

    #[test]
    fn test_paris_to_london() {
        // Roughly 343.5 km
        let d = haversine_distance_m(48.8566, 2.3522, 51.5074, -0.1278);
        assert!((d - 343_500.0).abs() < 2_000.0, "got {}", d);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(100.0, 3.2).is_err());
        assert!(Coordinate::new(-100.0, 3.2).is_err());
        assert!(Coordinate::new(45.5, 200.0).is_err());
        assert!(Coordinate::new(45.5, -200.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_distance_to_matches_free_function() {
        let home = Coordinate::new(48.8566, 2.3522).unwrap();
        let north = Coordinate::new(48.9, 2.3522).unwrap();
        assert_eq!(
            home.distance_to(&north),
            haversine_distance_m(48.8566, 2.3522, 48.9, 2.3522)
        );
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{TrackingError, TrackingResult};
use crate::domain::geo::Coordinate;

/// Radius applied when a zone is created without one.
pub const DEFAULT_ZONE_RADIUS_M: f64 = 200.0;

/// A named circular geofence bound to one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub child_id: String,
    pub name: String,
    pub center: Coordinate,
    pub radius_m: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Zone {
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Distance from the zone center to `point`, paired with whether the
    /// point lies inside. The boundary itself counts as inside.
    pub fn contains(&self, point: &Coordinate) -> (bool, f64) {
        let distance = point.distance_to(&self.center);
        (distance <= self.radius_m, distance)
    }
}

pub fn validate_radius(radius_m: f64) -> TrackingResult<()> {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return Err(TrackingError::validation(format!(
            "radius must be a positive number of meters, got {}",
            radius_m
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_at(lat: f64, lon: f64, radius_m: f64) -> Zone {
        Zone {
            id: Zone::generate_id(),
            child_id: "child".to_string(),
            name: "Home".to_string(),
            center: Coordinate::new(lat, lon).unwrap(),
            radius_m,
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_center_is_inside() {
        let zone = zone_at(48.8566, 2.3522, 200.0);
        let (inside, distance) = zone.contains(&zone.center);
        assert!(inside);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        let point = Coordinate::new(48.8575, 2.3522).unwrap();
        let center = Coordinate::new(48.8566, 2.3522).unwrap();
        let exact = point.distance_to(&center);

        let zone = zone_at(center.latitude, center.longitude, exact);
        assert!(zone.contains(&point).0);

        let zone = zone_at(center.latitude, center.longitude, exact * 0.999);
        assert!(!zone.contains(&point).0);
    }

    #[test]
    fn test_radius_validation() {
        assert!(validate_radius(200.0).is_ok());
        assert!(validate_radius(0.5).is_ok());
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(-10.0).is_err());
        assert!(validate_radius(f64::INFINITY).is_err());
        assert!(validate_radius(f64::NAN).is_err());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{TrackingError, TrackingResult};
use crate::domain::geo::Coordinate;

/// The most recent GPS fix of a child. Only the latest one is retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    pub captured_at: DateTime<Utc>,
    /// Battery percentage (0-100) when the device reported it
    pub battery: Option<u8>,
}

/// Outcome of reading a child's stored position.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionLookup {
    /// No child with that ID exists
    NoSuchChild,
    /// The child exists but its device never reported
    NeverReported,
    Reported(Position),
}

/// Parse an ISO 8601 capture time into an absolute instant.
///
/// A trailing `Z` is accepted; timestamps without an offset are rejected
/// because they do not name an instant.
pub fn parse_captured_at(raw: &str) -> TrackingResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| TrackingError::validation(format!("invalid timestamp '{}': {}", raw, e)))
}

pub fn validate_battery(battery: Option<i32>) -> TrackingResult<Option<u8>> {
    match battery {
        None => Ok(None),
        Some(level) if (0..=100).contains(&level) => Ok(Some(level as u8)),
        Some(level) => Err(TrackingError::validation(format!(
            "battery must be between 0 and 100, got {}",
            level
        ))),
    }
}

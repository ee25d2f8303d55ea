use shared::{GpsUpdateRequest, PositionResponse, SafeZoneResponse};

use crate::domain::commands::tracking::{ContainmentResult, RecordPositionCommand};
use crate::domain::errors::TrackingResult;
use crate::domain::models::{parse_captured_at, Position};

/// Mapper for GPS updates, last positions and containment results.
pub struct PositionMapper;

impl PositionMapper {
    pub fn to_record_command(child_id: String, request: GpsUpdateRequest) -> TrackingResult<RecordPositionCommand> {
        Ok(RecordPositionCommand {
            child_id,
            latitude: request.latitude,
            longitude: request.longitude,
            captured_at: parse_captured_at(&request.timestamp)?,
            battery: request.battery,
        })
    }

    /// Null coordinates when the device never reported
    pub fn to_position_dto(child_id: String, position: Option<Position>) -> PositionResponse {
        match position {
            Some(position) => PositionResponse {
                child_id,
                latitude: Some(position.coordinate.latitude),
                longitude: Some(position.coordinate.longitude),
                last_update: Some(position.captured_at.to_rfc3339()),
                battery: position.battery,
            },
            None => PositionResponse {
                child_id,
                latitude: None,
                longitude: None,
                last_update: None,
                battery: None,
            },
        }
    }

    pub fn to_safe_zone_dto(result: ContainmentResult) -> SafeZoneResponse {
        SafeZoneResponse {
            child_id: result.child_id,
            in_safe_zone: result.in_safe_zone,
            zone_name: result.zone_name,
            distance_m: result.distance_m,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TrackingError;

    fn request(timestamp: &str) -> GpsUpdateRequest {
        GpsUpdateRequest {
            latitude: 1.0,
            longitude: 2.0,
            timestamp: timestamp.to_string(),
            battery: None,
        }
    }

    #[test]
    fn test_timestamp_forms() {
        let zulu = PositionMapper::to_record_command("c".into(), request("2024-05-01T08:30:00Z")).unwrap();
        let offset =
            PositionMapper::to_record_command("c".into(), request("2024-05-01T10:30:00+02:00")).unwrap();
        assert_eq!(zulu.captured_at, offset.captured_at);

        let err = PositionMapper::to_record_command("c".into(), request("2024-05-01T08:30:00"))
            .unwrap_err();
        assert!(matches!(err, TrackingError::Validation(_)));
    }

    #[test]
    fn test_never_reported_is_all_null() {
        let dto = PositionMapper::to_position_dto("c".into(), None);
        assert_eq!(dto.child_id, "c");
        assert!(dto.latitude.is_none() && dto.longitude.is_none() && dto.last_update.is_none());
    }
}

use chrono::NaiveDate;
use shared::{
    Child as SharedChild, ChildListResponse, ChildResponse, CreateChildRequest, UpdateChildRequest,
};

use crate::domain::commands::child::{CreateChildCommand, UpdateChildCommand};
use crate::domain::errors::{TrackingError, TrackingResult};
use crate::domain::models::Child as DomainChild;

/// Mapper to convert between shared Child DTOs and domain Child models.
pub struct ChildMapper;

impl ChildMapper {
    pub fn to_dto(domain: DomainChild) -> SharedChild {
        let position = domain.last_position;
        SharedChild {
            id: domain.id,
            parent_id: domain.parent_id,
            name: domain.name,
            birth_date: domain.birth_date.map(|d| d.format("%Y-%m-%d").to_string()),
            phone: domain.phone,
            notes: domain.notes,
            created_at: domain.created_at.to_rfc3339(),
            last_latitude: position.as_ref().map(|p| p.coordinate.latitude),
            last_longitude: position.as_ref().map(|p| p.coordinate.longitude),
            last_update: position.as_ref().map(|p| p.captured_at.to_rfc3339()),
            battery: position.and_then(|p| p.battery),
        }
    }

    pub fn to_create_command(request: CreateChildRequest) -> TrackingResult<CreateChildCommand> {
        Ok(CreateChildCommand {
            name: request.name,
            birth_date: request.birth_date.as_deref().map(parse_birth_date).transpose()?,
            phone: request.phone,
            notes: request.notes,
        })
    }

    /// `Some(None)` fields are carried through as clears
    pub fn to_update_command(request: UpdateChildRequest) -> TrackingResult<UpdateChildCommand> {
        let birth_date = request
            .birth_date
            .map(|raw| raw.as_deref().map(parse_birth_date).transpose())
            .transpose()?;

        Ok(UpdateChildCommand {
            name: request.name,
            birth_date,
            phone: request.phone,
            notes: request.notes,
        })
    }

    pub fn to_child_list_dto(domain_children: Vec<DomainChild>) -> ChildListResponse {
        ChildListResponse {
            children: domain_children.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_child_response_dto(domain: DomainChild, message: &str) -> ChildResponse {
        ChildResponse {
            child: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}

fn parse_birth_date(raw: &str) -> TrackingResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        TrackingError::validation(format!("birth_date '{}' is not in YYYY-MM-DD format", raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::Coordinate;
    use crate::domain::models::Position;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_to_dto_flattens_last_position() {
        let captured_at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let child = DomainChild {
            id: "c1".to_string(),
            parent_id: "p1".to_string(),
            name: "Lea".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2016, 2, 29),
            phone: None,
            notes: None,
            created_at: captured_at,
            last_position: Some(Position {
                coordinate: Coordinate::new(48.8566, 2.3522).unwrap(),
                captured_at,
                battery: Some(80),
            }),
        };

        let dto = ChildMapper::to_dto(child);
        assert_eq!(dto.birth_date.as_deref(), Some("2016-02-29"));
        assert_eq!(dto.last_latitude, Some(48.8566));
        assert_eq!(dto.last_longitude, Some(2.3522));
        assert_eq!(dto.last_update.as_deref(), Some("2024-05-01T08:30:00+00:00"));
        assert_eq!(dto.battery, Some(80));
    }

    #[test]
    fn test_bad_birth_date_is_validation_error() {
        let request = CreateChildRequest {
            name: "Lea".to_string(),
            birth_date: Some("01/02/2016".to_string()),
            phone: None,
            notes: None,
        };
        assert!(matches!(
            ChildMapper::to_create_command(request).unwrap_err(),
            TrackingError::Validation(_)
        ));
    }
}

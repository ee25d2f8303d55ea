use shared::{
    CreateZoneRequest, UpdateZoneRequest, Zone as SharedZone, ZoneListResponse, ZoneResponse,
};

use crate::domain::commands::zone::{CreateZoneCommand, UpdateZoneCommand};
use crate::domain::models::Zone as DomainZone;

/// Mapper to convert between shared Zone DTOs and domain Zone models.
pub struct ZoneMapper;

impl ZoneMapper {
    pub fn to_dto(domain: DomainZone) -> SharedZone {
        SharedZone {
            id: domain.id,
            child_id: domain.child_id,
            name: domain.name,
            latitude: domain.center.latitude,
            longitude: domain.center.longitude,
            radius: domain.radius_m,
            description: domain.description,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_create_command(request: CreateZoneRequest) -> CreateZoneCommand {
        CreateZoneCommand {
            child_id: request.child_id,
            name: request.name,
            latitude: request.latitude,
            longitude: request.longitude,
            radius_m: request.radius,
            description: request.description,
        }
    }

    pub fn to_update_command(request: UpdateZoneRequest) -> UpdateZoneCommand {
        UpdateZoneCommand {
            name: request.name,
            latitude: request.latitude,
            longitude: request.longitude,
            radius_m: request.radius,
            description: request.description,
        }
    }

    pub fn to_zone_list_dto(domain_zones: Vec<DomainZone>) -> ZoneListResponse {
        ZoneListResponse {
            zones: domain_zones.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_zone_response_dto(domain: DomainZone, message: &str) -> ZoneResponse {
        ZoneResponse {
            zone: Self::to_dto(domain),
            success_message: message.to_string(),
        }
    }
}

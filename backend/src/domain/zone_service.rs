//! Safe zone CRUD, scoped through the zone → child → parent chain.
//!
//! ## Business Rules
//!
//! - Names are 1-100 characters after trimming
//! - Centers must be valid coordinates
//! - Radius is a positive number of meters, 200 when omitted on create
//! - On update an omitted radius keeps the stored value

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::commands::zone::{CreateZoneCommand, UpdateZoneCommand};
use super::errors::{TrackingError, TrackingResult};
use super::geo::Coordinate;
use super::models::zone::validate_radius;
use super::models::{Zone, DEFAULT_ZONE_RADIUS_M};
use super::ownership::OwnershipVerifier;
use crate::storage::ZoneStorage;

const MAX_NAME_LEN: usize = 100;

#[derive(Clone)]
pub struct ZoneService {
    zones: Arc<dyn ZoneStorage>,
    ownership: OwnershipVerifier,
}

impl ZoneService {
    pub fn new(zones: Arc<dyn ZoneStorage>, ownership: OwnershipVerifier) -> Self {
        Self { zones, ownership }
    }

    pub async fn create_zone(&self, parent_id: &str, command: CreateZoneCommand) -> TrackingResult<Zone> {
        info!("Creating zone '{}' for child {}", command.name, command.child_id);

        let child = self.ownership.verify_child(&command.child_id, parent_id).await?;

        let name = validate_name(&command.name)?;
        let center = Coordinate::new(command.latitude, command.longitude)?;
        let radius_m = command.radius_m.unwrap_or(DEFAULT_ZONE_RADIUS_M);
        validate_radius(radius_m)?;

        let zone = Zone {
            id: Zone::generate_id(),
            child_id: child.id,
            name,
            center,
            radius_m,
            description: command.description,
            created_at: Utc::now(),
        };
        self.zones.store_zone(&zone).await?;

        info!("Created zone: {} with ID: {} ({} m)", zone.name, zone.id, zone.radius_m);
        Ok(zone)
    }

    /// Every zone of every child the parent owns, in creation order
    pub async fn list_zones(&self, parent_id: &str) -> TrackingResult<Vec<Zone>> {
        let zones = self.zones.list_zones_for_parent(parent_id).await?;
        info!("Found {} zones for parent {}", zones.len(), parent_id);
        Ok(zones)
    }

    pub async fn list_child_zones(&self, parent_id: &str, child_id: &str) -> TrackingResult<Vec<Zone>> {
        let child = self.ownership.verify_child(child_id, parent_id).await?;
        Ok(self.zones.list_zones_for_child(&child.id).await?)
    }

    pub async fn get_zone(&self, parent_id: &str, zone_id: &str) -> TrackingResult<Zone> {
        self.ownership.verify_zone(zone_id, parent_id).await
    }

    /// Merge the supplied fields into the zone
    pub async fn update_zone(
        &self,
        parent_id: &str,
        zone_id: &str,
        command: UpdateZoneCommand,
    ) -> TrackingResult<Zone> {
        info!("Updating zone: {}", zone_id);

        let mut zone = self.ownership.verify_zone(zone_id, parent_id).await?;

        if let Some(name) = command.name {
            zone.name = validate_name(&name)?;
        }
        zone.center = Coordinate::new(
            command.latitude.unwrap_or(zone.center.latitude),
            command.longitude.unwrap_or(zone.center.longitude),
        )?;
        if let Some(radius_m) = command.radius_m {
            validate_radius(radius_m)?;
            zone.radius_m = radius_m;
        }
        if let Some(description) = command.description {
            zone.description = description;
        }

        self.zones.update_zone(&zone).await?;

        info!("Updated zone: {} with ID: {}", zone.name, zone.id);
        Ok(zone)
    }

    pub async fn delete_zone(&self, parent_id: &str, zone_id: &str) -> TrackingResult<()> {
        info!("Deleting zone: {}", zone_id);

        let zone = self.ownership.verify_zone(zone_id, parent_id).await?;
        if !self.zones.delete_zone(&zone.id).await? {
            return Err(TrackingError::not_found("Zone"));
        }

        info!("Deleted zone: {} with ID: {}", zone.name, zone.id);
        Ok(())
    }
}

fn validate_name(raw: &str) -> TrackingResult<String> {
    let name = raw.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(TrackingError::validation(format!(
            "Zone name must be between 1 and {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}

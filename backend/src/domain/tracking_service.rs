//! GPS ingestion and safe-zone containment.
//!
//! Devices push fixes through [`TrackingService::record_gps_update`]; only
//! the latest fix per child is kept and writes are last-write-wins.
//! [`TrackingService::evaluate_containment`] checks the latest fix against
//! the child's zones in creation order and reports the first zone whose
//! circle (boundary included) contains it.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::commands::tracking::{ContainmentResult, RecordPositionCommand};
use super::errors::{TrackingError, TrackingResult};
use super::geo::Coordinate;
use super::models::position::validate_battery;
use super::models::{Position, PositionLookup, Zone};
use super::ownership::OwnershipVerifier;
use crate::storage::{PositionStorage, ZoneStorage};

#[derive(Clone)]
pub struct TrackingService {
    positions: Arc<dyn PositionStorage>,
    zones: Arc<dyn ZoneStorage>,
    ownership: OwnershipVerifier,
}

impl TrackingService {
    pub fn new(
        positions: Arc<dyn PositionStorage>,
        zones: Arc<dyn ZoneStorage>,
        ownership: OwnershipVerifier,
    ) -> Self {
        Self {
            positions,
            zones,
            ownership,
        }
    }

    /// Store a device fix as the child's last known position.
    ///
    /// No credential is required: the reporting device is not a logged-in
    /// actor. A fix older than the stored one still overwrites it.
    pub async fn record_gps_update(&self, command: RecordPositionCommand) -> TrackingResult<Position> {
        let position = Position {
            coordinate: Coordinate::new(command.latitude, command.longitude)?,
            captured_at: command.captured_at,
            battery: validate_battery(command.battery)?,
        };

        if let PositionLookup::Reported(previous) =
            self.positions.get_last_position(&command.child_id).await?
        {
            if previous.captured_at > position.captured_at {
                warn!(
                    "Out-of-order fix for child {}: {} is older than stored {}",
                    command.child_id, position.captured_at, previous.captured_at
                );
            }
        }

        if !self.positions.record_position(&command.child_id, &position).await? {
            return Err(TrackingError::not_found("Child"));
        }

        info!(
            "Recorded position for child {} at ({:.5}, {:.5})",
            command.child_id, position.coordinate.latitude, position.coordinate.longitude
        );
        Ok(position)
    }

    /// Latest fix of a child, `None` if its device never reported
    pub async fn get_last_position(&self, child_id: &str) -> TrackingResult<Option<Position>> {
        match self.positions.get_last_position(child_id).await? {
            PositionLookup::NoSuchChild => Err(TrackingError::not_found("Child")),
            PositionLookup::NeverReported => Ok(None),
            PositionLookup::Reported(position) => Ok(Some(position)),
        }
    }

    /// Decide whether the child's latest fix lies inside one of its zones.
    ///
    /// Staleness of the fix is not considered.
    pub async fn evaluate_containment(&self, child_id: &str) -> TrackingResult<ContainmentResult> {
        let Some(position) = self.get_last_position(child_id).await? else {
            debug!("Child {} has no recorded position", child_id);
            return Ok(ContainmentResult::outside(child_id));
        };

        let zones = self.zones.list_zones_for_child(child_id).await?;

        let result = match find_containing_zone(&position.coordinate, &zones) {
            Some((zone, distance_m)) => ContainmentResult {
                child_id: child_id.to_string(),
                in_safe_zone: true,
                zone_name: Some(zone.name.clone()),
                distance_m: Some(distance_m),
            },
            None => ContainmentResult::outside(child_id),
        };

        info!(
            "Containment for child {}: in_safe_zone={} zone={:?} ({} zones checked)",
            child_id,
            result.in_safe_zone,
            result.zone_name,
            zones.len()
        );
        Ok(result)
    }

    /// Same as [`Self::evaluate_containment`] after checking the child
    /// belongs to `parent_id`
    pub async fn evaluate_containment_for_parent(
        &self,
        parent_id: &str,
        child_id: &str,
    ) -> TrackingResult<ContainmentResult> {
        let child = self.ownership.verify_child(child_id, parent_id).await?;
        self.evaluate_containment(&child.id).await
    }
}

/// First zone, in slice order, containing `point`, with the distance to its
/// center. Later zones are not evaluated once one matches.
pub fn find_containing_zone<'a>(point: &Coordinate, zones: &'a [Zone]) -> Option<(&'a Zone, f64)> {
    zones.iter().find_map(|zone| {
        let (inside, distance_m) = zone.contains(point);
        inside.then_some((zone, distance_m))
    })
}

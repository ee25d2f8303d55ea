//! # REST API for GPS Tracking
//!
//! The update and last-position endpoints are called by child devices and
//! take no credential. The safe-zone check is parent-only.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use tracing::info;

use super::auth::AuthenticatedParent;
use super::mappers::PositionMapper;
use crate::domain::TrackingError;
use crate::AppState;
use shared::GpsUpdateRequest;

/// Record a GPS fix pushed by a child's device
pub async fn record_gps_update(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<GpsUpdateRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/gps/children/{}/update", child_id);

    let command = PositionMapper::to_record_command(child_id.clone(), request)?;
    let position = state.tracking_service.record_gps_update(command).await?;

    Ok(Json(PositionMapper::to_position_dto(child_id, Some(position))))
}

pub async fn get_last_position(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/gps/children/{}/last-position", child_id);

    let position = state.tracking_service.get_last_position(&child_id).await?;
    Ok(Json(PositionMapper::to_position_dto(child_id, position)))
}

/// Whether the child is currently inside one of its safe zones
pub async fn check_safe_zone(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(child_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/gps/children/{}/in-safe-zone", child_id);

    let result = state
        .tracking_service
        .evaluate_containment_for_parent(parent.id(), &child_id)
        .await?;
    Ok(Json(PositionMapper::to_safe_zone_dto(result)))
}

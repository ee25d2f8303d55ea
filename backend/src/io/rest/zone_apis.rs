//! # REST API for Safe Zones

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::auth::AuthenticatedParent;
use super::mappers::ZoneMapper;
use crate::domain::TrackingError;
use crate::AppState;
use shared::{CreateZoneRequest, UpdateZoneRequest};

pub async fn create_zone(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Json(request): Json<CreateZoneRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/zones - request: {:?}", request);

    let zone = state
        .zone_service
        .create_zone(parent.id(), ZoneMapper::to_create_command(request))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ZoneMapper::to_zone_response_dto(zone, "Zone created successfully")),
    ))
}

/// All zones across the parent's children
pub async fn list_zones(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/zones");

    let zones = state.zone_service.list_zones(parent.id()).await?;
    Ok(Json(ZoneMapper::to_zone_list_dto(zones)))
}

/// Zones of one child, in creation order
pub async fn list_child_zones(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(child_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/children/{}/zones", child_id);

    let zones = state
        .zone_service
        .list_child_zones(parent.id(), &child_id)
        .await?;
    Ok(Json(ZoneMapper::to_zone_list_dto(zones)))
}

pub async fn get_zone(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(zone_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/zones/{}", zone_id);

    let zone = state.zone_service.get_zone(parent.id(), &zone_id).await?;
    Ok(Json(ZoneMapper::to_dto(zone)))
}

pub async fn update_zone(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(zone_id): Path<String>,
    Json(request): Json<UpdateZoneRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("PUT /api/zones/{} - request: {:?}", zone_id, request);

    let zone = state
        .zone_service
        .update_zone(parent.id(), &zone_id, ZoneMapper::to_update_command(request))
        .await?;
    Ok(Json(ZoneMapper::to_zone_response_dto(zone, "Zone updated successfully")))
}

pub async fn delete_zone(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(zone_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("DELETE /api/zones/{}", zone_id);

    state.zone_service.delete_zone(parent.id(), &zone_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

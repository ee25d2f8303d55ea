//! # REST API for Child Management
//!
//! Endpoints for creating, retrieving, updating, and deleting the
//! authenticated parent's children.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::auth::AuthenticatedParent;
use super::mappers::ChildMapper;
use crate::domain::TrackingError;
use crate::AppState;
use shared::{CreateChildRequest, UpdateChildRequest};

/// Create a new child
pub async fn create_child(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Json(request): Json<CreateChildRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/children - request: {:?}", request);

    let command = ChildMapper::to_create_command(request)?;
    let child = state.child_service.create_child(parent.id(), command).await?;

    Ok((
        StatusCode::CREATED,
        Json(ChildMapper::to_child_response_dto(child, "Child created successfully")),
    ))
}

/// Get a child by ID
pub async fn get_child(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(child_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/children/{}", child_id);

    let child = state.child_service.get_child(parent.id(), &child_id).await?;
    Ok(Json(ChildMapper::to_dto(child)))
}

/// List the parent's children
pub async fn list_children(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
) -> Result<impl IntoResponse, TrackingError> {
    info!("GET /api/children");

    let children = state.child_service.list_children(parent.id()).await?;
    Ok(Json(ChildMapper::to_child_list_dto(children)))
}

/// Update a child
pub async fn update_child(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(child_id): Path<String>,
    Json(request): Json<UpdateChildRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("PUT /api/children/{} - request: {:?}", child_id, request);

    let command = ChildMapper::to_update_command(request)?;
    let child = state
        .child_service
        .update_child(parent.id(), &child_id, command)
        .await?;

    Ok(Json(ChildMapper::to_child_response_dto(child, "Child updated successfully")))
}

/// Delete a child and its zones
pub async fn delete_child(
    State(state): State<AppState>,
    parent: AuthenticatedParent,
    Path(child_id): Path<String>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("DELETE /api/children/{}", child_id);

    state.child_service.delete_child(parent.id(), &child_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! # REST API for Parent Authentication
//!
//! Registration issues the first token; refresh rotates it; logout revokes it.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::auth::BearerToken;
use super::mappers::AuthMapper;
use crate::domain::commands::auth::RegisterParentCommand;
use crate::domain::TrackingError;
use crate::AppState;
use shared::RegisterParentRequest;

/// Register a parent account
pub async fn register_parent(
    State(state): State<AppState>,
    Json(request): Json<RegisterParentRequest>,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/auth/register - email: {}", request.email);

    let issued = state
        .auth_service
        .register_parent(RegisterParentCommand {
            email: request.email,
            display_name: request.display_name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(AuthMapper::to_token_dto(issued))))
}

/// Exchange the current token for a fresh one
pub async fn refresh_token(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/auth/refresh");

    let issued = state.auth_service.refresh(&token).await?;
    Ok(Json(AuthMapper::to_token_dto(issued)))
}

/// Revoke the current token
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<impl IntoResponse, TrackingError> {
    info!("POST /api/auth/logout");

    state.auth_service.revoke(&token).await?;
    Ok(StatusCode::NO_CONTENT)
}

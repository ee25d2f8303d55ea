//! Bearer credential extractors.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::domain::models::Identity;
use crate::domain::{CredentialVerifier, TrackingError};
use crate::AppState;

/// Raw token from `Authorization: Bearer <token>`, not yet verified
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = TrackingError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| TrackingError::unauthorized("missing bearer token"))?
            .to_str()
            .map_err(|_| TrackingError::unauthorized("malformed authorization header"))?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| TrackingError::unauthorized("expected a Bearer token"))?;

        Ok(Self(token.to_string()))
    }
}

/// The parent behind a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedParent(pub Identity);

impl AuthenticatedParent {
    pub fn id(&self) -> &str {
        &self.0.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedParent {
    type Rejection = TrackingError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let identity = state.auth_service.verify(&token).await?;
        Ok(Self(identity))
    }
}

//! Access control: resolves an opaque bearer credential to a parent.
//!
//! Credentials are random session tokens stored server-side with an
//! expiry derived from [`AuthConfig::token_ttl_secs`]. Password hashing and
//! signed tokens are not part of this service.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::auth::{IssuedToken, RegisterParentCommand};
use super::errors::{TrackingError, TrackingResult};
use super::models::{Identity, Parent, Session};
use crate::config::AuthConfig;
use crate::storage::{ParentStorage, SessionStorage};

/// Resolves a credential to the identity of its holder.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> TrackingResult<Identity>;
}

#[derive(Clone)]
pub struct AuthService {
    parents: Arc<dyn ParentStorage>,
    sessions: Arc<dyn SessionStorage>,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(
        parents: Arc<dyn ParentStorage>,
        sessions: Arc<dyn SessionStorage>,
        config: AuthConfig,
    ) -> Self {
        Self {
            parents,
            sessions,
            config,
        }
    }

    /// Register a parent and issue their first token
    pub async fn register_parent(&self, command: RegisterParentCommand) -> TrackingResult<IssuedToken> {
        let email = normalize_email(&command.email)?;
        let display_name = command.display_name.trim().to_string();
        if display_name.is_empty() || display_name.len() > 100 {
            return Err(TrackingError::validation(
                "display name must be between 1 and 100 characters",
            ));
        }

        info!("Registering parent: {}", email);

        if self.parents.find_parent_by_email(&email).await?.is_some() {
            return Err(TrackingError::validation("email already registered"));
        }

        let parent = Parent {
            id: Parent::generate_id(),
            email,
            display_name,
            created_at: Utc::now(),
        };
        // A concurrent registration can pass the lookup above
        if !self.parents.store_parent(&parent).await? {
            return Err(TrackingError::validation("email already registered"));
        }

        info!("Registered parent {} with ID: {}", parent.email, parent.id);
        self.issue_token(parent).await
    }

    /// Exchange a valid token for a fresh one; the old token stops working
    pub async fn refresh(&self, credential: &str) -> TrackingResult<IssuedToken> {
        let identity = self.verify(credential).await?;
        let parent = self
            .parents
            .get_parent(&identity.user_id)
            .await?
            .ok_or_else(|| TrackingError::unauthorized("invalid credential"))?;

        let issued = self.issue_token(parent).await?;
        self.sessions.delete_session(credential).await?;
        info!("Refreshed session for parent {}", issued.parent.id);
        Ok(issued)
    }

    /// Revoke a token. Unknown tokens are rejected as unauthorized.
    pub async fn revoke(&self, credential: &str) -> TrackingResult<()> {
        if !self.sessions.delete_session(credential).await? {
            return Err(TrackingError::unauthorized("invalid credential"));
        }
        info!("Session revoked");
        Ok(())
    }

    async fn issue_token(&self, parent: Parent) -> TrackingResult<IssuedToken> {
        let now = Utc::now();
        let ttl = i64::try_from(self.config.token_ttl_secs)
            .map_err(|_| TrackingError::validation("token lifetime out of range"))?;
        let session = Session {
            token: Session::generate_token(),
            parent_id: parent.id.clone(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl),
        };
        self.sessions.store_session(&session).await?;

        Ok(IssuedToken {
            access_token: session.token,
            expires_in_secs: self.config.token_ttl_secs,
            parent,
        })
    }
}

#[async_trait]
impl CredentialVerifier for AuthService {
    async fn verify(&self, credential: &str) -> TrackingResult<Identity> {
        let session = self
            .sessions
            .get_session(credential)
            .await?
            .ok_or_else(|| TrackingError::unauthorized("invalid credential"))?;

        if session.is_expired_at(Utc::now()) {
            warn!("Rejected expired session for parent {}", session.parent_id);
            self.sessions.delete_session(credential).await?;
            return Err(TrackingError::unauthorized("credential expired"));
        }

        let parent = self
            .parents
            .get_parent(&session.parent_id)
            .await?
            .ok_or_else(|| TrackingError::unauthorized("invalid credential"))?;

        Ok(Identity {
            user_id: parent.id,
            email: parent.email,
        })
    }
}

fn normalize_email(raw: &str) -> TrackingResult<String> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid || email.len() > 254 {
        return Err(TrackingError::validation(format!("invalid email '{}'", raw.trim())));
    }
    Ok(email)
}

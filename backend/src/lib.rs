//! # Family Tracker Backend
//!
//! Geofencing and position tracking for a parent/child safety service.
//!
//! This crate is the orchestration layer that brings together:
//! - **Domain**: Geodesic math, safe zones, tracking and access control
//! - **Storage**: SQLite persistence behind async storage traits
//! - **IO**: The REST interface consumed by parent apps and child devices
//!
//! ## Architecture
//!
//! ```text
//! Parent app / child device
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{AuthService, ChildService, OwnershipVerifier, TrackingService, ZoneService};
use crate::storage::{
    ChildRepository, ChildStorage, DbConnection, ParentRepository, PositionRepository,
    SessionRepository, ZoneRepository, ZoneStorage,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: AuthService,
    pub child_service: ChildService,
    pub zone_service: ZoneService,
    pub tracking_service: TrackingService,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire every service onto an already opened database
    pub fn from_connection(db: DbConnection, config: AppConfig) -> Self {
        let children: Arc<dyn ChildStorage> = Arc::new(ChildRepository::new(db.clone()));
        let zones: Arc<dyn ZoneStorage> = Arc::new(ZoneRepository::new(db.clone()));
        let ownership = OwnershipVerifier::new(children.clone(), zones.clone());

        let auth_service = AuthService::new(
            Arc::new(ParentRepository::new(db.clone())),
            Arc::new(SessionRepository::new(db.clone())),
            config.auth.clone(),
        );
        let child_service = ChildService::new(children, ownership.clone());
        let zone_service = ZoneService::new(zones.clone(), ownership.clone());
        let tracking_service =
            TrackingService::new(Arc::new(PositionRepository::new(db)), zones, ownership);

        Self {
            auth_service,
            child_service,
            zone_service,
            tracking_service,
            config: Arc::new(config),
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database.url).await?;

    info!("Setting up application state");
    Ok(AppState::from_connection(db, config.clone()))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Result<Router> {
    let cors = cors_layer(&app_state.config.server.cors_origin)?;

    let api_routes = Router::new()
        .route("/health", get(io::health_check))
        .route("/auth/register", post(io::register_parent))
        .route("/auth/refresh", post(io::refresh_token))
        .route("/auth/logout", post(io::logout))
        .route("/children", get(io::list_children).post(io::create_child))
        .route(
            "/children/:child_id",
            get(io::get_child).put(io::update_child).delete(io::delete_child),
        )
        .route("/children/:child_id/zones", get(io::list_child_zones))
        .route("/zones", get(io::list_zones).post(io::create_zone))
        .route(
            "/zones/:zone_id",
            get(io::get_zone).put(io::update_zone).delete(io::delete_zone),
        )
        .route("/gps/children/:child_id/update", post(io::record_gps_update))
        .route("/gps/children/:child_id/last-position", get(io::get_last_position))
        .route("/gps/children/:child_id/in-safe-zone", get(io::check_safe_zone));

    Ok(Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origin == "*" {
        return Ok(cors.allow_origin(Any));
    }
    let origin = origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin '{}'", origin))?;
    Ok(cors.allow_origin(origin))
}

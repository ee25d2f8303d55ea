//! # REST API Interface Layer
//!
//! HTTP endpoints under `/api`. Handlers stay thin: extract, map the DTO to
//! a domain command, call one service method, map the result back.
//! Failures are returned as [`TrackingError`](crate::domain::TrackingError),
//! which renders itself as a JSON error response.

pub mod auth;
pub mod auth_apis;
pub mod child_apis;
pub mod error;
pub mod gps_apis;
pub mod health_apis;
pub mod mappers;
pub mod zone_apis;

pub use auth::{AuthenticatedParent, BearerToken};
pub use auth_apis::{logout, refresh_token, register_parent};
pub use child_apis::{create_child, delete_child, get_child, list_children, update_child};
pub use gps_apis::{check_safe_zone, get_last_position, record_gps_update};
pub use health_apis::health_check;
pub use zone_apis::{create_zone, delete_zone, get_zone, list_child_zones, list_zones, update_zone};

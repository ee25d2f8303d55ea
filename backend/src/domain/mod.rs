//! # Domain Module
//!
//! Business logic for the family tracker: geodesic math, child profiles,
//! safe zones, position ingestion and containment checks.
//!
//! ## Module Organization
//!
//! - **geo**: Coordinate validation and haversine distance
//! - **auth_service**: Parent registration and bearer credential verification
//! - **ownership**: Zone → child → parent access checks
//! - **child_service**: Child profile CRUD
//! - **zone_service**: Safe zone CRUD
//! - **tracking_service**: GPS ingestion and safe-zone evaluation
//!
//! ## Business Rules
//!
//! - A parent only ever sees children and zones it owns; anything else is
//!   reported as not found
//! - Only the latest position per child is kept (last write wins)
//! - A point exactly on a zone boundary is inside the zone
//! - Overlapping zones resolve to the one created first
//!
//! Services depend on the storage traits only and work with any
//! implementation of them.

pub mod auth_service;
pub mod child_service;
pub mod commands;
pub mod errors;
pub mod geo;
pub mod models;
pub mod ownership;
pub mod tracking_service;
pub mod zone_service;

pub use auth_service::{AuthService, CredentialVerifier};
pub use child_service::ChildService;
pub use errors::{TrackingError, TrackingResult};
pub use ownership::OwnershipVerifier;
pub use tracking_service::TrackingService;
pub use zone_service::ZoneService;

//! # Storage Module
//!
//! Persistence for parents, sessions, child profiles, positions and zones.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! repositories in [`repositories`] implement them over one shared
//! [`DbConnection`] pool. Deleting a child cascades to its zones through
//! the schema's foreign keys.

pub mod connection;
pub mod repositories;
pub mod traits;

pub use connection::DbConnection;
pub use repositories::{
    ChildRepository, ParentRepository, PositionRepository, SessionRepository, ZoneRepository,
};
pub use traits::{ChildStorage, ParentStorage, PositionStorage, SessionStorage, ZoneStorage};

//! # Storage Traits
//!
//! Storage abstractions the domain layer depends on. Every method is a
//! single read or a single write; none of them performs ownership checks,
//! which belong to the domain.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Child, Parent, Position, PositionLookup, Session, Zone};

#[async_trait]
pub trait ParentStorage: Send + Sync {
    /// Store a new parent. Returns false, storing nothing, when the email
    /// is already registered.
    async fn store_parent(&self, parent: &Parent) -> Result<bool>;

    async fn get_parent(&self, parent_id: &str) -> Result<Option<Parent>>;

    async fn find_parent_by_email(&self, email: &str) -> Result<Option<Parent>>;
}

#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn store_session(&self, session: &Session) -> Result<()>;

    async fn get_session(&self, token: &str) -> Result<Option<Session>>;

    /// Returns true if a session was removed
    async fn delete_session(&self, token: &str) -> Result<bool>;
}

/// Child profile storage. Position columns are owned by [`PositionStorage`].
#[async_trait]
pub trait ChildStorage: Send + Sync {
    async fn store_child(&self, child: &Child) -> Result<()>;

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List a parent's children in creation order
    async fn list_children_by_parent(&self, parent_id: &str) -> Result<Vec<Child>>;

    /// Persist profile fields only; the last known position is left alone
    async fn update_child_profile(&self, child: &Child) -> Result<()>;

    /// Delete a child and, through the foreign key, all of its zones.
    /// Returns true if the child existed.
    async fn delete_child(&self, child_id: &str) -> Result<bool>;
}

/// Last-known-position storage, one slot per child.
#[async_trait]
pub trait PositionStorage: Send + Sync {
    /// Overwrite the child's position unconditionally.
    /// Returns false when no such child exists.
    async fn record_position(&self, child_id: &str, position: &Position) -> Result<bool>;

    async fn get_last_position(&self, child_id: &str) -> Result<PositionLookup>;
}

#[async_trait]
pub trait ZoneStorage: Send + Sync {
    async fn store_zone(&self, zone: &Zone) -> Result<()>;

    async fn get_zone(&self, zone_id: &str) -> Result<Option<Zone>>;

    /// All zones of one child in creation order
    async fn list_zones_for_child(&self, child_id: &str) -> Result<Vec<Zone>>;

    /// All zones of every child owned by the parent, in creation order
    async fn list_zones_for_parent(&self, parent_id: &str) -> Result<Vec<Zone>>;

    async fn update_zone(&self, zone: &Zone) -> Result<()>;

    /// Returns true if the zone existed
    async fn delete_zone(&self, zone_id: &str) -> Result<bool>;
}

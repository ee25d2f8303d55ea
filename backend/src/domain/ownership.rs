//! Ownership chain checks (zone → child → parent).
//!
//! Every parent-scoped operation goes through [`OwnershipVerifier`] on each
//! call; nothing is cached, because a child can be deleted between two
//! requests. A resource owned by someone else yields the same `NotFound`
//! as a missing one.

use std::sync::Arc;
use tracing::warn;

use super::errors::{TrackingError, TrackingResult};
use super::models::{Child, Zone};
use crate::storage::{ChildStorage, ZoneStorage};

#[derive(Clone)]
pub struct OwnershipVerifier {
    children: Arc<dyn ChildStorage>,
    zones: Arc<dyn ZoneStorage>,
}

impl OwnershipVerifier {
    pub fn new(children: Arc<dyn ChildStorage>, zones: Arc<dyn ZoneStorage>) -> Self {
        Self { children, zones }
    }

    /// Load a child the requesting parent owns
    pub async fn verify_child(&self, child_id: &str, parent_id: &str) -> TrackingResult<Child> {
        match self.children.get_child(child_id).await? {
            Some(child) if child.is_owned_by(parent_id) => Ok(child),
            Some(_) => {
                warn!("Parent {} denied access to child {}", parent_id, child_id);
                Err(TrackingError::not_found("Child"))
            }
            None => Err(TrackingError::not_found("Child")),
        }
    }

    /// Load a zone whose child the requesting parent owns
    pub async fn verify_zone(&self, zone_id: &str, parent_id: &str) -> TrackingResult<Zone> {
        let zone = self
            .zones
            .get_zone(zone_id)
            .await?
            .ok_or_else(|| TrackingError::not_found("Zone"))?;

        match self.verify_child(&zone.child_id, parent_id).await {
            Ok(_) => Ok(zone),
            Err(TrackingError::NotFound(_)) => {
                warn!("Parent {} denied access to zone {}", parent_id, zone_id);
                Err(TrackingError::not_found("Zone"))
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::Coordinate;
    use crate::domain::models::Parent;
    use crate::storage::repositories::test_utils::setup_with_parent;
    use crate::storage::{ChildRepository, ParentRepository, ParentStorage, ZoneRepository};
    use chrono::Utc;

    struct Fixture {
        verifier: OwnershipVerifier,
        owner: Parent,
        stranger: Parent,
        child: Child,
        zone: Zone,
    }

    async fn fixture() -> Fixture {
        let (db, owner) = setup_with_parent().await;
        let stranger = Parent {
            id: Parent::generate_id(),
            email: "stranger@example.com".to_string(),
            display_name: "Stranger".to_string(),
            created_at: Utc::now(),
        };
        ParentRepository::new(db.clone()).store_parent(&stranger).await.unwrap();

        let children = Arc::new(ChildRepository::new(db.clone()));
        let zones = Arc::new(ZoneRepository::new(db));

        let child = Child {
            id: Child::generate_id(),
            parent_id: owner.id.clone(),
            name: "Ines".to_string(),
            birth_date: None,
            phone: None,
            notes: None,
            created_at: Utc::now(),
            last_position: None,
        };
        children.store_child(&child).await.unwrap();

        let zone = Zone {
            id: Zone::generate_id(),
            child_id: child.id.clone(),
            name: "Home".to_string(),
            center: Coordinate::new(1.0, 1.0).unwrap(),
            radius_m: 200.0,
            description: None,
            created_at: Utc::now(),
        };
        zones.store_zone(&zone).await.unwrap();

        Fixture {
            verifier: OwnershipVerifier::new(children, zones),
            owner,
            stranger,
            child,
            zone,
        }
    }

    #[tokio::test]
    async fn test_owner_passes() {
        let f = fixture().await;
        let child = f.verifier.verify_child(&f.child.id, &f.owner.id).await.unwrap();
        assert_eq!(child.id, f.child.id);
        let zone = f.verifier.verify_zone(&f.zone.id, &f.owner.id).await.unwrap();
        assert_eq!(zone.id, f.zone.id);
    }

    #[tokio::test]
    async fn test_foreign_and_missing_are_indistinguishable() {
        let f = fixture().await;

        let foreign = f.verifier.verify_child(&f.child.id, &f.stranger.id).await.unwrap_err();
        let missing = f.verifier.verify_child("missing", &f.owner.id).await.unwrap_err();
        assert_eq!(foreign.to_string(), missing.to_string());
        assert!(matches!(foreign, TrackingError::NotFound(_)));

        let foreign = f.verifier.verify_zone(&f.zone.id, &f.stranger.id).await.unwrap_err();
        let missing = f.verifier.verify_zone("missing", &f.owner.id).await.unwrap_err();
        assert_eq!(foreign.to_string(), missing.to_string());
        assert!(matches!(foreign, TrackingError::NotFound(_)));
    }
}

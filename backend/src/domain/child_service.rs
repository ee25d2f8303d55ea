//! Child profile management, always scoped to the requesting parent.

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use super::commands::child::{CreateChildCommand, UpdateChildCommand};
use super::errors::{TrackingError, TrackingResult};
use super::models::Child;
use super::ownership::OwnershipVerifier;
use crate::storage::ChildStorage;

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 20;

/// Service for managing children
#[derive(Clone)]
pub struct ChildService {
    children: Arc<dyn ChildStorage>,
    ownership: OwnershipVerifier,
}

impl ChildService {
    pub fn new(children: Arc<dyn ChildStorage>, ownership: OwnershipVerifier) -> Self {
        Self {
            children,
            ownership,
        }
    }

    /// Create a new child for `parent_id`
    pub async fn create_child(
        &self,
        parent_id: &str,
        command: CreateChildCommand,
    ) -> TrackingResult<Child> {
        info!("Creating child '{}' for parent {}", command.name, parent_id);

        let name = validate_name(&command.name)?;
        validate_phone(command.phone.as_deref())?;

        let child = Child {
            id: Child::generate_id(),
            parent_id: parent_id.to_string(),
            name,
            birth_date: command.birth_date,
            phone: command.phone,
            notes: command.notes,
            created_at: Utc::now(),
            last_position: None,
        };
        self.children.store_child(&child).await?;

        info!("Created child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// List the parent's children in creation order
    pub async fn list_children(&self, parent_id: &str) -> TrackingResult<Vec<Child>> {
        let children = self.children.list_children_by_parent(parent_id).await?;
        info!("Found {} children for parent {}", children.len(), parent_id);
        Ok(children)
    }

    pub async fn get_child(&self, parent_id: &str, child_id: &str) -> TrackingResult<Child> {
        self.ownership.verify_child(child_id, parent_id).await
    }

    /// Merge the supplied profile fields into the child
    pub async fn update_child(
        &self,
        parent_id: &str,
        child_id: &str,
        command: UpdateChildCommand,
    ) -> TrackingResult<Child> {
        info!("Updating child: {}", child_id);

        let mut child = self.ownership.verify_child(child_id, parent_id).await?;

        if let Some(name) = command.name {
            child.name = validate_name(&name)?;
        }
        if let Some(birth_date) = command.birth_date {
            child.birth_date = birth_date;
        }
        if let Some(phone) = command.phone {
            validate_phone(phone.as_deref())?;
            child.phone = phone;
        }
        if let Some(notes) = command.notes {
            child.notes = notes;
        }

        self.children.update_child_profile(&child).await?;

        info!("Updated child: {} with ID: {}", child.name, child.id);
        Ok(child)
    }

    /// Delete a child together with all of its zones
    pub async fn delete_child(&self, parent_id: &str, child_id: &str) -> TrackingResult<()> {
        info!("Deleting child: {}", child_id);

        let child = self.ownership.verify_child(child_id, parent_id).await?;
        if !self.children.delete_child(&child.id).await? {
            // Removed concurrently between the check and the delete
            return Err(TrackingError::not_found("Child"));
        }

        info!("Deleted child: {} with ID: {}", child.name, child.id);
        Ok(())
    }
}

fn validate_name(raw: &str) -> TrackingResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(TrackingError::validation("Child name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(TrackingError::validation(format!(
            "Child name cannot exceed {} characters",
            MAX_NAME_LEN
        )));
    }
    Ok(name.to_string())
}

fn validate_phone(phone: Option<&str>) -> TrackingResult<()> {
    match phone {
        Some(phone) if phone.chars().count() > MAX_PHONE_LEN => Err(TrackingError::validation(
            format!("Phone number cannot exceed {} characters", MAX_PHONE_LEN),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Parent;
    use crate::storage::repositories::test_utils::setup_with_parent;
    use crate::storage::{ChildRepository, ParentRepository, ParentStorage, ZoneRepository};
    use chrono::NaiveDate;

    async fn setup_test() -> (ChildService, Parent, Parent) {
        let (db, parent) = setup_with_parent().await;
        let other = Parent {
            id: Parent::generate_id(),
            email: "other@example.com".to_string(),
            display_name: "Other".to_string(),
            created_at: Utc::now(),
        };
        ParentRepository::new(db.clone()).store_parent(&other).await.unwrap();

        let children: Arc<dyn ChildStorage> = Arc::new(ChildRepository::new(db.clone()));
        let ownership = OwnershipVerifier::new(children.clone(), Arc::new(ZoneRepository::new(db)));
        (ChildService::new(children, ownership), parent, other)
    }

    fn create(name: &str) -> CreateChildCommand {
        CreateChildCommand {
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(2015, 6, 15),
            phone: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_child() {
        let (service, parent, _) = setup_test().await;

        let child = service.create_child(&parent.id, create("  Alice Smith ")).await.unwrap();
        assert_eq!(child.name, "Alice Smith");
        assert_eq!(child.parent_id, parent.id);
        assert!(child.last_position.is_none());
    }

    #[tokio::test]
    async fn test_create_child_validation() {
        let (service, parent, _) = setup_test().await;

        assert!(service.create_child(&parent.id, create("   ")).await.is_err());
        assert!(service.create_child(&parent.id, create(&"x".repeat(101))).await.is_err());

        let mut command = create("Alice");
        command.phone = Some("0".repeat(21));
        assert!(matches!(
            service.create_child(&parent.id, command).await.unwrap_err(),
            TrackingError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_children_scoped_to_parent() {
        let (service, parent, other) = setup_test().await;

        let child = service.create_child(&parent.id, create("Bob")).await.unwrap();
        service.create_child(&other.id, create("Eve")).await.unwrap();

        let mine = service.list_children(&parent.id).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Bob");

        assert!(service.get_child(&parent.id, &child.id).await.is_ok());
        assert!(matches!(
            service.get_child(&other.id, &child.id).await.unwrap_err(),
            TrackingError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_update_child_merges_fields() {
        let (service, parent, other) = setup_test().await;
        let child = service.create_child(&parent.id, create("Original")).await.unwrap();

        let updated = service
            .update_child(
                &parent.id,
                &child.id,
                UpdateChildCommand {
                    notes: Some(Some("likes trains".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Original");
        assert_eq!(updated.birth_date, child.birth_date);
        assert_eq!(updated.notes.as_deref(), Some("likes trains"));

        let err = service
            .update_child(
                &other.id,
                &child.id,
                UpdateChildCommand {
                    name: Some("Hijacked".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TrackingError::NotFound(_)));
        assert_eq!(
            service.get_child(&parent.id, &child.id).await.unwrap().name,
            "Original"
        );
    }

    #[tokio::test]
    async fn test_update_child_clears_optional_fields() {
        let (service, parent, _) = setup_test().await;
        let mut command = create("Mila");
        command.phone = Some("0600".to_string());
        command.notes = Some("n".to_string());
        let child = service.create_child(&parent.id, command).await.unwrap();

        let updated = service
            .update_child(
                &parent.id,
                &child.id,
                UpdateChildCommand {
                    phone: Some(None),
                    birth_date: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.phone, None);
        assert_eq!(updated.birth_date, None);
        assert_eq!(updated.notes.as_deref(), Some("n"));

        let stored = service.get_child(&parent.id, &child.id).await.unwrap();
        assert_eq!(stored.phone, None);
        assert_eq!(stored.birth_date, None);
        assert_eq!(stored.notes.as_deref(), Some("n"));
    }

    #[tokio::test]
    async fn test_delete_child() {
        let (service, parent, other) = setup_test().await;
        let child = service.create_child(&parent.id, create("Test Child")).await.unwrap();

        assert!(service.delete_child(&other.id, &child.id).await.is_err());
        service.delete_child(&parent.id, &child.id).await.unwrap();
        assert!(service.get_child(&parent.id, &child.id).await.is_err());
        assert!(service.delete_child(&parent.id, &child.id).await.is_err());
    }
}

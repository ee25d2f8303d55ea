use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::Parent;
use crate::storage::connection::{parse_stored_timestamp, DbConnection};
use crate::storage::traits::ParentStorage;

/// Repository for parent accounts
#[derive(Clone)]
pub struct ParentRepository {
    db: DbConnection,
}

impl ParentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Parent> {
        Ok(Parent {
            id: row.get("id"),
            email: row.get("email"),
            display_name: row.get("display_name"),
            created_at: parse_stored_timestamp(row.get("created_at"))?,
        })
    }
}

#[async_trait]
impl ParentStorage for ParentRepository {
    async fn store_parent(&self, parent: &Parent) -> Result<bool> {
        // The UNIQUE(email) check and the insert are one statement
        let result = sqlx::query(
            r#"
            INSERT INTO parents (id, email, display_name, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(&parent.id)
        .bind(&parent.email)
        .bind(&parent.display_name)
        .bind(parent.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn get_parent(&self, parent_id: &str) -> Result<Option<Parent>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, display_name, created_at
            FROM parents
            WHERE id = ?
            "#,
        )
        .bind(parent_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_parent_by_email(&self, email: &str) -> Result<Option<Parent>> {
        let row = sqlx::query(
            r#"
            SELECT id, email, display_name, created_at
            FROM parents
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_store_and_lookup_parent() {
        let db = DbConnection::in_memory().await.unwrap();
        let repo = ParentRepository::new(db);

        let parent = Parent {
            id: Parent::generate_id(),
            email: "ana@example.com".to_string(),
            display_name: "Ana".to_string(),
            created_at: Utc::now(),
        };
        assert!(repo.store_parent(&parent).await.unwrap());

        let by_id = repo.get_parent(&parent.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ana@example.com");

        let by_email = repo.find_parent_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, parent.id);

        assert!(repo.find_parent_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = DbConnection::in_memory().await.unwrap();
        let repo = ParentRepository::new(db);

        let mut parent = Parent {
            id: Parent::generate_id(),
            email: "dup@example.com".to_string(),
            display_name: "First".to_string(),
            created_at: Utc::now(),
        };
        assert!(repo.store_parent(&parent).await.unwrap());

        parent.id = Parent::generate_id();
        parent.display_name = "Second".to_string();
        assert!(!repo.store_parent(&parent).await.unwrap());

        let kept = repo.find_parent_by_email("dup@example.com").await.unwrap().unwrap();
        assert_eq!(kept.display_name, "First");
        assert!(repo.get_parent(&parent.id).await.unwrap().is_none());
    }
}

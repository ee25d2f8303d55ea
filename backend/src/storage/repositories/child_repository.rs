use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Row};

use super::position_repository::position_from_row;
use crate::domain::models::Child;
use crate::storage::connection::{parse_stored_timestamp, DbConnection};
use crate::storage::traits::ChildStorage;

const CHILD_COLUMNS: &str = "id, parent_id, name, birth_date, phone, notes, created_at, \
     last_latitude, last_longitude, last_update, battery";

/// Repository for child profiles
#[derive(Clone)]
pub struct ChildRepository {
    db: DbConnection,
}

impl ChildRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Child> {
        let birth_date: Option<String> = row.get("birth_date");
        let birth_date = birth_date
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("Corrupt birth date in database: {}", raw))
            })
            .transpose()?;

        Ok(Child {
            id: row.get("id"),
            parent_id: row.get("parent_id"),
            name: row.get("name"),
            birth_date,
            phone: row.get("phone"),
            notes: row.get("notes"),
            created_at: parse_stored_timestamp(row.get("created_at"))?,
            last_position: position_from_row(row)?,
        })
    }
}

#[async_trait]
impl ChildStorage for ChildRepository {
    async fn store_child(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO children (id, parent_id, name, birth_date, phone, notes, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&child.id)
        .bind(&child.parent_id)
        .bind(&child.name)
        .bind(child.birth_date.map(|d| d.format("%Y-%m-%d").to_string()))
        .bind(&child.phone)
        .bind(&child.notes)
        .bind(child.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_child(&self, child_id: &str) -> Result<Option<Child>> {
        let row = sqlx::query(&format!("SELECT {} FROM children WHERE id = ?", CHILD_COLUMNS))
            .bind(child_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_children_by_parent(&self, parent_id: &str) -> Result<Vec<Child>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM children WHERE parent_id = ? ORDER BY seq ASC",
            CHILD_COLUMNS
        ))
        .bind(parent_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update_child_profile(&self, child: &Child) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE children
            SET name = ?, birth_date = ?, phone = ?, notes = ?
            WHERE id = ?
            "#,
        )
        .bind(&child.name)
        .bind(child.birth_date.map(|d| d.format("%Y-%m-%d").to_string()))
        .bind(&child.phone)
        .bind(&child.notes)
        .bind(&child.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_child(&self, child_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM children WHERE id = ?")
            .bind(child_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

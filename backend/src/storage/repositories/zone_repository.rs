use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::geo::Coordinate;
use crate::domain::models::Zone;
use crate::storage::connection::{parse_stored_timestamp, DbConnection};
use crate::storage::traits::ZoneStorage;

/// Repository for safe zones.
///
/// Listings are ordered by the `seq` column so callers see zones in the
/// order they were created.
#[derive(Clone)]
pub struct ZoneRepository {
    db: DbConnection,
}

impl ZoneRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn map_row(row: &SqliteRow) -> Result<Zone> {
        let center = Coordinate::new(row.get("latitude"), row.get("longitude"))
            .map_err(|e| anyhow::anyhow!("Corrupt zone center in database: {}", e))?;

        Ok(Zone {
            id: row.get("id"),
            child_id: row.get("child_id"),
            name: row.get("name"),
            center,
            radius_m: row.get("radius"),
            description: row.get("description"),
            created_at: parse_stored_timestamp(row.get("created_at"))?,
        })
    }
}

#[async_trait]
impl ZoneStorage for ZoneRepository {
    async fn store_zone(&self, zone: &Zone) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO zones (id, child_id, name, latitude, longitude, radius, description, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&zone.id)
        .bind(&zone.child_id)
        .bind(&zone.name)
        .bind(zone.center.latitude)
        .bind(zone.center.longitude)
        .bind(zone.radius_m)
        .bind(&zone.description)
        .bind(zone.created_at.to_rfc3339())
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_zone(&self, zone_id: &str) -> Result<Option<Zone>> {
        let row = sqlx::query(
            r#"
            SELECT id, child_id, name, latitude, longitude, radius, description, created_at
            FROM zones
            WHERE id = ?
            "#,
        )
        .bind(zone_id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn list_zones_for_child(&self, child_id: &str) -> Result<Vec<Zone>> {
        let rows = sqlx::query(
            r#"
            SELECT id, child_id, name, latitude, longitude, radius, description, created_at
            FROM zones
            WHERE child_id = ?
            ORDER BY seq ASC
            "#,
        )
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn list_zones_for_parent(&self, parent_id: &str) -> Result<Vec<Zone>> {
        let rows = sqlx::query(
            r#"
            SELECT z.id, z.child_id, z.name, z.latitude, z.longitude, z.radius,
                   z.description, z.created_at
            FROM zones z
            JOIN children c ON c.id = z.child_id
            WHERE c.parent_id = ?
            ORDER BY z.seq ASC
            "#,
        )
        .bind(parent_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    async fn update_zone(&self, zone: &Zone) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE zones
            SET name = ?, latitude = ?, longitude = ?, radius = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&zone.name)
        .bind(zone.center.latitude)
        .bind(zone.center.longitude)
        .bind(zone.radius_m)
        .bind(&zone.description)
        .bind(&zone.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM zones WHERE id = ?")
            .bind(zone_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

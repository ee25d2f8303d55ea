use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::geo::Coordinate;
use crate::domain::models::{Position, PositionLookup};
use crate::storage::connection::{parse_stored_timestamp, DbConnection};
use crate::storage::traits::PositionStorage;

/// Repository for the last known position held on each child row.
#[derive(Clone)]
pub struct PositionRepository {
    db: DbConnection,
}

impl PositionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }
}

/// Read the position columns of a `children` row. Returns `None` while the
/// coordinates are NULL.
pub(crate) fn position_from_row(row: &SqliteRow) -> Result<Option<Position>> {
    let latitude: Option<f64> = row.get("last_latitude");
    let longitude: Option<f64> = row.get("last_longitude");
    let last_update: Option<String> = row.get("last_update");
    let battery: Option<i64> = row.get("battery");

    let (Some(latitude), Some(longitude), Some(last_update)) = (latitude, longitude, last_update)
    else {
        return Ok(None);
    };

    let coordinate = Coordinate::new(latitude, longitude)
        .map_err(|e| anyhow::anyhow!("Corrupt position in database: {}", e))?;
    let battery = battery
        .map(u8::try_from)
        .transpose()
        .context("Corrupt battery level in database")?;

    Ok(Some(Position {
        coordinate,
        captured_at: parse_stored_timestamp(&last_update)?,
        battery,
    }))
}

#[async_trait]
impl PositionStorage for PositionRepository {
    async fn record_position(&self, child_id: &str, position: &Position) -> Result<bool> {
        // Single-row overwrite; concurrent writers resolve to whichever commits last
        let result = sqlx::query(
            r#"
            UPDATE children
            SET last_latitude = ?, last_longitude = ?, last_update = ?, battery = ?
            WHERE id = ?
            "#,
        )
        .bind(position.coordinate.latitude)
        .bind(position.coordinate.longitude)
        .bind(position.captured_at.to_rfc3339())
        .bind(position.battery.map(i64::from))
        .bind(child_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_last_position(&self, child_id: &str) -> Result<PositionLookup> {
        let row = sqlx::query(
            r#"
            SELECT last_latitude, last_longitude, last_update, battery
            FROM children
            WHERE id = ?
            "#,
        )
        .bind(child_id)
        .fetch_optional(self.db.pool())
        .await?;

        let Some(row) = row else {
            return Ok(PositionLookup::NoSuchChild);
        };

        Ok(match position_from_row(&row)? {
            Some(position) => PositionLookup::Reported(position),
            None => PositionLookup::NeverReported,
        })
    }
}

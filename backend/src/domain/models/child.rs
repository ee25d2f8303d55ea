use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::position::Position;

/// Domain model representing a child profile owned by one parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub parent_id: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Most recent GPS fix, `None` until the device first reports
    pub last_position: Option<Position>,
}

impl Child {
    /// Generate a unique ID for a child
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn is_owned_by(&self, parent_id: &str) -> bool {
        self.parent_id == parent_id
    }
}

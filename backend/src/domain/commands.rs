//! Domain-level command and result types.
//!
//! Services accept these instead of the public DTOs from the `shared` crate;
//! the REST layer maps between the two.

pub mod child {
    use chrono::NaiveDate;

    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub name: String,
        pub birth_date: Option<NaiveDate>,
        pub phone: Option<String>,
        pub notes: Option<String>,
    }

    /// Partial profile update. `None` leaves the field untouched;
    /// `Some(None)` clears an optional field.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateChildCommand {
        pub name: Option<String>,
        pub birth_date: Option<Option<NaiveDate>>,
        pub phone: Option<Option<String>>,
        pub notes: Option<Option<String>>,
    }
}

pub mod zone {
    #[derive(Debug, Clone)]
    pub struct CreateZoneCommand {
        pub child_id: String,
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        /// Defaults to 200 meters when `None`
        pub radius_m: Option<f64>,
        pub description: Option<String>,
    }

    /// Partial zone update. `None` leaves the field untouched; in particular
    /// a missing radius never resets to the default. `Some(None)` clears
    /// the description.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateZoneCommand {
        pub name: Option<String>,
        pub latitude: Option<f64>,
        pub longitude: Option<f64>,
        pub radius_m: Option<f64>,
        pub description: Option<Option<String>>,
    }
}

pub mod tracking {
    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone)]
    pub struct RecordPositionCommand {
        pub child_id: String,
        pub latitude: f64,
        pub longitude: f64,
        pub captured_at: DateTime<Utc>,
        pub battery: Option<i32>,
    }

    /// Whether a child currently sits inside one of its zones.
    #[derive(Debug, Clone, PartialEq)]
    pub struct ContainmentResult {
        pub child_id: String,
        pub in_safe_zone: bool,
        pub zone_name: Option<String>,
        pub distance_m: Option<f64>,
    }

    impl ContainmentResult {
        pub fn outside(child_id: &str) -> Self {
            Self {
                child_id: child_id.to_string(),
                in_safe_zone: false,
                zone_name: None,
                distance_m: None,
            }
        }
    }
}

pub mod auth {
    use crate::domain::models::Parent;

    #[derive(Debug, Clone)]
    pub struct RegisterParentCommand {
        pub email: String,
        pub display_name: String,
    }

    /// A freshly issued credential.
    #[derive(Debug, Clone)]
    pub struct IssuedToken {
        pub access_token: String,
        pub expires_in_secs: u64,
        pub parent: Parent,
    }
}

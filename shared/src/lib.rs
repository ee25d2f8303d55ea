use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a field that may be absent, `null`, or a value.
///
/// Paired with `#[serde(default)]`: an absent field stays `None`,
/// `null` becomes `Some(None)` and a value becomes `Some(Some(v))`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A child profile as exposed over the API.
///
/// The `last_*` fields and `battery` are only populated once the child's
/// device has reported at least one GPS fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    /// ID of the parent who owns this profile
    pub parent_id: String,
    pub name: String,
    /// Birth date in YYYY-MM-DD format
    pub birth_date: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    /// Creation time (RFC 3339)
    pub created_at: String,
    pub last_latitude: Option<f64>,
    pub last_longitude: Option<f64>,
    /// Capture time of the last GPS fix (RFC 3339)
    pub last_update: Option<String>,
    /// Device battery percentage reported with the last fix
    pub battery: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub name: String,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial update of a child profile. Omitted fields are left unchanged;
/// `null` clears `birth_date`, `phone` and `notes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateChildRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildResponse {
    pub child: Child,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

/// A named circular safe zone bound to one child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub child_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters
    pub radius: f64,
    pub description: Option<String>,
    /// Creation time (RFC 3339)
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateZoneRequest {
    pub child_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Radius in meters, 200 when omitted
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial update of a zone.
///
/// `radius: null` and a missing `radius` both mean "keep the current radius";
/// only an explicit number changes it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateZoneRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub radius: Option<f64>,
    /// `null` clears the description
    #[serde(default, deserialize_with = "nullable", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub zone: Zone,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneListResponse {
    pub zones: Vec<Zone>,
}

/// GPS fix pushed by a child's device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsUpdateRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Capture time, ISO 8601 with offset (a trailing `Z` is accepted)
    pub timestamp: String,
    /// Battery percentage (0-100)
    #[serde(default)]
    pub battery: Option<i32>,
}

/// Last known position of a child. All position fields are null when the
/// device has never reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionResponse {
    pub child_id: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub last_update: Option<String>,
    pub battery: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafeZoneResponse {
    pub child_id: String,
    pub in_safe_zone: bool,
    pub zone_name: Option<String>,
    /// Distance in meters to the center of the matched zone
    pub distance_m: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterParentRequest {
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthTokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable kind: `not_found`, `validation`, `unauthorized`, `storage`
    pub error: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_child_distinguishes_null_from_absent() {
        let request: UpdateChildRequest =
            serde_json::from_str(r#"{"phone": null, "notes": "naps at 2"}"#).unwrap();
        assert_eq!(request.phone, Some(None));
        assert_eq!(request.notes, Some(Some("naps at 2".to_string())));
        assert_eq!(request.birth_date, None);
        assert_eq!(request.name, None);
    }

    #[test]
    fn test_update_zone_null_radius_means_unchanged() {
        let request: UpdateZoneRequest =
            serde_json::from_str(r#"{"radius": null, "description": null}"#).unwrap();
        assert_eq!(request.radius, None);
        assert_eq!(request.description, Some(None));
    }
}

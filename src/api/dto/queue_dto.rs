//! Queue-related DTOs for add, rename, and place-scoped requests.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Request body for `POST /players`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddPlayerRequest {
    /// Player name to append. Absent or empty is rejected with 400.
    #[serde(default)]
    pub name: Option<String>,
    /// Venue partition key. Falls back to the configured default place.
    #[serde(default)]
    pub place: Option<String>,
}

/// Request body for `PUT /players/:index`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenamePlayerRequest {
    /// Replacement name; trimmed before use.
    #[serde(rename = "newName", default)]
    pub new_name: Option<String>,
    /// Venue partition key. Falls back to the configured default place.
    #[serde(default)]
    pub place: Option<String>,
}

/// Query parameters carrying the venue partition key.
#[derive(Debug, Deserialize, IntoParams)]
pub struct PlaceQuery {
    /// Venue partition key. Falls back to the configured default place.
    #[serde(default)]
    pub place: Option<String>,
}

//! Placed object models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `placed_objects` table.
///
/// `owner` is an opaque client-supplied string, compared for equality on
/// delete and never verified against any credential. `asset` is an
/// optional reference string produced by the upload endpoint; it is
/// trusted at write time with no referential check.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PlacedObject {
    /// UUIDv4, generated server-side at creation. Never reused.
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Free-form marker kind tag.
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub object_type: String,
    /// Optional reference to an uploaded asset (`/uploads/...`).
    pub asset: Option<String>,
    pub owner: String,
    /// Unix-epoch seconds, assigned server-side at creation.
    pub created_at: i64,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a placement.
///
/// Latitude and longitude are accepted as given; the observed system
/// performs no range validation and this implementation keeps that
/// contract.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlacement {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub asset: Option<String>,
    pub owner: String,
}

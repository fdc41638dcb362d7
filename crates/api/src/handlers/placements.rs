//! Handlers for placed objects.
//!
//! The only policy layer in the system: creation requires a non-empty
//! owner string, deletion requires presenting the exact owner string the
//! record was created with. The owner is never verified beyond that
//! comparison (see `geomark_core::placement`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use geomark_core::error::CoreError;
use geomark_core::placement::{authorize_delete, validate_owner};
use geomark_db::models::placed_object::CreatePlacement;
use geomark_db::repositories::PlacementRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Typed response for the delete endpoint.
#[derive(Debug, Serialize)]
pub struct DeleteResult {
    status: &'static str,
}

/// Query parameters for the delete endpoint.
#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    /// Owner string claimed by the caller; must equal the stored owner.
    pub owner: String,
}

/// POST /api/v1/placements
///
/// Anchor a new object. Latitude/longitude are stored as given (no range
/// validation, by contract); id and created_at are generated server-side.
pub async fn create_placement(
    State(state): State<AppState>,
    Json(input): Json<CreatePlacement>,
) -> AppResult<impl IntoResponse> {
    validate_owner(&input.owner)?;

    let object = PlacementRepo::insert(&state.pool, &input).await?;

    tracing::info!(
        object_id = %object.id,
        owner = %object.owner,
        object_type = %object.object_type,
        "Placement created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: object })))
}

/// GET /api/v1/placements
///
/// List all placed objects, no filtering.
pub async fn list_placements(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let objects = PlacementRepo::list(&state.pool).await?;

    Ok(Json(DataResponse { data: objects }))
}

/// DELETE /api/v1/placements/{id}?owner=...
///
/// Owner-restricted removal: 404 when the id is unknown, 403 when the
/// supplied owner does not match (storage untouched in both cases).
/// The final delete re-checks rows-affected so two racing deletes of the
/// same id produce exactly one success.
pub async fn delete_placement(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> AppResult<impl IntoResponse> {
    let object = PlacementRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Placement",
                id: id.clone(),
            })
        })?;

    authorize_delete(&object.owner, &params.owner)?;

    let deleted = PlacementRepo::delete(&state.pool, &id).await?;
    if !deleted {
        // Lost the race against another delete of the same id.
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Placement",
            id,
        }));
    }

    tracing::info!(object_id = %id, owner = %params.owner, "Placement deleted");

    Ok(Json(DataResponse {
        data: DeleteResult { status: "deleted" },
    }))
}

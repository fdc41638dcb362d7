//! Route definitions for placed objects.
//!
//! All routes are mounted under `/placements`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::placements;
use crate::state::AppState;

/// Placement routes mounted at `/placements`.
///
/// ```text
/// GET    /       -> list_placements
/// POST   /       -> create_placement
/// DELETE /{id}   -> delete_placement (owner query param must match)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(placements::list_placements).post(placements::create_placement),
        )
        .route("/{id}", delete(placements::delete_placement))
}

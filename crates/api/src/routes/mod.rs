pub mod assets;
pub mod health;
pub mod placements;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /placements          POST create, GET list
/// /placements/{id}     DELETE (requires ?owner=..., owner must match)
///
/// /assets              POST multipart upload
/// ```
///
/// Stored assets are served outside this tree at `/uploads/{name}`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/placements", placements::router())
        .nest("/assets", assets::router())
}

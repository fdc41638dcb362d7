//! Route definitions for asset uploads.
//!
//! All routes are mounted under `/assets`. Retrieval of stored assets
//! happens at the root-level `/uploads` static service, not here.

use axum::routing::post;
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset upload routes mounted at `/assets`.
///
/// ```text
/// POST / -> upload_asset (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(assets::upload_asset))
}

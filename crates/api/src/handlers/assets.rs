//! Handlers for asset uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/assets
///
/// Accept a multipart upload and store it under a freshly generated
/// `<token>.<extension>` name. The first field carrying a filename is
/// taken as the file; content is stored verbatim (no sniffing, no size
/// cap, empty files accepted). Responds with the stored name and the
/// `/uploads/...` reference usable as a placement's `asset` field.
pub async fn upload_asset(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };

        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let stored = state
            .assets
            .save(&filename, &content)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

        tracing::info!(
            file_name = %stored.file_name,
            original = %filename,
            size_bytes = content.len(),
            "Asset uploaded",
        );

        return Ok((StatusCode::CREATED, Json(DataResponse { data: stored })));
    }

    Err(AppError::BadRequest(
        "multipart upload must contain a file field".into(),
    ))
}

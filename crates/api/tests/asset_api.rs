//! Integration tests for asset upload and retrieval.
//!
//! Uploads go through the multipart endpoint and come back out through
//! the `/uploads` static service, exercising the full storage path.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get, post_json, post_multipart};
use serde_json::json;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Upload
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_stores_bytes_retrievable_by_reference(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let content: &[u8] = b"\x89PNG\r\n\x1a\nfake image bytes";
    let response = post_multipart(app.clone(), "/api/v1/assets", "photo.PNG", content).await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let data = body_json(response).await["data"].clone();
    let file_name = data["file_name"].as_str().unwrap();
    let url = data["url"].as_str().unwrap();

    // Stored name is `<uuid>.<original extension>` with case preserved.
    assert!(file_name.ends_with(".PNG"), "got {file_name}");
    let token = file_name.strip_suffix(".PNG").unwrap();
    assert!(uuid::Uuid::parse_str(token).is_ok(), "got token {token}");
    assert_eq!(url, format!("/uploads/{file_name}"));

    // Fetching the reference yields the original bytes unchanged.
    let fetched = get(app, url).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_bytes(fetched).await, content);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_dot_uses_whole_name_as_extension(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let response = post_multipart(app, "/api/v1/assets", "noext", b"plain").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = body_json(response).await["data"].clone();
    let file_name = data["file_name"].as_str().unwrap();
    assert!(file_name.ends_with(".noext"), "got {file_name}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_references_are_distinct_per_upload(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let mut names = std::collections::HashSet::new();
    for _ in 0..5 {
        let response = post_multipart(app.clone(), "/api/v1/assets", "img.png", b"x").await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let data = body_json(response).await["data"].clone();
        let file_name = data["file_name"].as_str().unwrap().to_string();
        assert!(names.insert(file_name.clone()), "name reused: {file_name}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn upload_without_file_field_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    // A JSON body is not a multipart upload at all.
    let response = post_json(app, "/api/v1/assets", json!({ "file": "nope" })).await;
    assert!(response.status().is_client_error());
}

// ---------------------------------------------------------------------------
// Upload + placement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn uploaded_reference_is_embeddable_in_a_placement(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let upload = post_multipart(app.clone(), "/api/v1/assets", "pin.png", b"pin").await;
    let url = body_json(upload).await["data"]["url"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json(
        app.clone(),
        "/api/v1/placements",
        json!({
            "latitude": 37.7,
            "longitude": -122.4,
            "type": "marker",
            "asset": url,
            "owner": "alice"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let list = body_json(get(app, "/api/v1/placements").await).await;
    assert_eq!(list["data"][0]["asset"], url);
}

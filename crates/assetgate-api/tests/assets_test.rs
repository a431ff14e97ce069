//! Asset API integration tests.
//!
//! Run with: `cargo test -p assetgate-api --test assets_test`

mod helpers;

use axum::body::Bytes;
use helpers::{setup_test_app, setup_test_app_with_api_key, TEST_API_KEY};
use serde_json::Value;

#[tokio::test]
async fn test_upload_png_returns_created_with_key() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "image/png")
        .bytes(Bytes::from_static(&[0u8; 10]))
        .await;

    assert_eq!(response.status_code(), 201);
    let body: Value = response.json();
    assert_eq!(body["message"], "Upload successful");

    // Key format: {millisecond-timestamp}-{11-char base36 suffix}.png
    let id = body["id"].as_str().expect("id is a string");
    assert!(id.ends_with(".png"), "id {} should end with .png", id);
    let stem = id.strip_suffix(".png").unwrap();
    let (timestamp, suffix) = stem.split_once('-').unwrap();
    assert!(timestamp.parse::<i64>().is_ok());
    assert_eq!(suffix.len(), 11);
}

#[tokio::test]
async fn test_upload_without_content_type_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .bytes(Bytes::from_static(b"some bytes"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Content-Type header is required");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_with_disallowed_content_type_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "application/pdf")
        .bytes(Bytes::from_static(b"%PDF-1.4"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid content type. Only images and videos are allowed"
    );
    assert_eq!(body["code"], "INVALID_ASSET_TYPE");
}

#[tokio::test]
async fn test_upload_rejects_content_type_with_parameters() {
    let app = setup_test_app().await;
    let client = app.client();

    // Exact-match allow-list: a list member with a parameter is not a member.
    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "image/png;charset=utf-8")
        .bytes(Bytes::from_static(b"bytes"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_ASSET_TYPE");
}

#[tokio::test]
async fn test_upload_with_empty_body_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "image/jpeg")
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Request body is required");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_upload_then_get_roundtrip() {
    let app = setup_test_app().await;
    let client = app.client();

    let payload = b"\x89PNG\r\n\x1a\nnot really a png";
    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "image/png")
        .bytes(Bytes::from_static(payload))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let response = client
        .get(&format!("/{}", id))
        .add_header("x-api-key", TEST_API_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), &payload[..]);
    assert_eq!(response.header("content-type").to_str().unwrap(), "image/png");
    assert_eq!(
        response.header("cache-control").to_str().unwrap(),
        "public, max-age=3600"
    );
    assert_eq!(
        response.header("content-length").to_str().unwrap(),
        payload.len().to_string()
    );
}

#[tokio::test]
async fn test_upload_decodes_base64_transfer_encoding() {
    let app = setup_test_app().await;
    let client = app.client();

    let raw = b"GIF89a fake gif body";
    let encoded = {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        STANDARD.encode(raw)
    };

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "image/gif")
        .add_header("Content-Transfer-Encoding", "base64")
        .bytes(Bytes::from(encoded))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    // The stored object holds the decoded bytes, not the base64 text.
    let response = client
        .get(&format!("/{}", id))
        .add_header("x-api-key", TEST_API_KEY)
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.as_bytes().as_ref(), &raw[..]);
}

#[tokio::test]
async fn test_get_missing_asset_is_not_found() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .get("/1754000000000-zzzzzzzzzzz.png")
        .add_header("x-api-key", TEST_API_KEY)
        .await;

    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert_eq!(body["error"], "Asset not found");
    assert_eq!(body["code"], "ASSET_NOT_FOUND");
}

#[tokio::test]
async fn test_delete_never_created_asset_reports_success() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .delete("/abc123")
        .add_header("x-api-key", TEST_API_KEY)
        .await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["message"], "Asset deleted successfully");
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "video/mp4")
        .bytes(Bytes::from_static(b"mp4 bytes"))
        .await;
    assert_eq!(response.status_code(), 201);
    let id = response.json::<Value>()["id"].as_str().unwrap().to_string();

    let first = client
        .delete(&format!("/{}", id))
        .add_header("x-api-key", TEST_API_KEY)
        .await;
    assert_eq!(first.status_code(), 200);

    let second = client
        .delete(&format!("/{}", id))
        .add_header("x-api-key", TEST_API_KEY)
        .await;
    assert_eq!(second.status_code(), 200);

    let get = client
        .get(&format!("/{}", id))
        .add_header("x-api-key", TEST_API_KEY)
        .await;
    assert_eq!(get.status_code(), 404);
}

#[tokio::test]
async fn test_presigned_with_disallowed_content_type_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/presigned")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "application/json")
        .bytes(Bytes::from_static(br#"{"contentType":"application/pdf"}"#))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Invalid content type. Only images and videos are allowed"
    );
    assert_eq!(body["code"], "INVALID_ASSET_TYPE");
}

#[tokio::test]
async fn test_presigned_with_malformed_json_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/presigned")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "application/json")
        .bytes(Bytes::from_static(b"{not json"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid JSON in request body");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_presigned_without_content_type_field_is_rejected() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/presigned")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "application/json")
        .bytes(Bytes::from_static(b"{}"))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "contentType field is required in request body");
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_presigned_requires_s3_backend() {
    // Validation runs before the backend check, so an allow-listed type on
    // the local backend fails on the backend, not on validation.
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/presigned")
        .add_header("x-api-key", TEST_API_KEY)
        .add_header("Content-Type", "application/json")
        .bytes(Bytes::from_static(br#"{"contentType":"image/png"}"#))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("S3"));
}

#[tokio::test]
async fn test_missing_api_key_is_unauthorized() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("Content-Type", "image/png")
        .bytes(Bytes::from_static(b"bytes"))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_wrong_api_key_is_unauthorized() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client
        .get("/some-id.png")
        .add_header("x-api-key", "wrong-key-0123456789abcdef0123456789")
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_disabled_when_no_key_configured() {
    let app = setup_test_app_with_api_key(None).await;
    let client = app.client();

    let response = client
        .post("/upload")
        .add_header("Content-Type", "image/webp")
        .bytes(Bytes::from_static(b"webp bytes"))
        .await;

    assert_eq!(response.status_code(), 201);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = setup_test_app().await;
    let client = app.client();

    let response = client.get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
}

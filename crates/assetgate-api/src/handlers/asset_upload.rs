use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use assetgate_core::AppError;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Response for a completed direct upload.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Server-generated asset id (also the storage key)
    #[schema(example = "1754000000000-a1b2c3d4e5f.png")]
    pub id: String,
    pub message: String,
}

/// Direct body upload: validate the declared content type, mint a fresh key,
/// and store the payload under it.
///
/// Preconditions are checked in a fixed order: Content-Type header present,
/// content type allow-listed, body non-empty. Each upload writes exactly one
/// object; keys are never supplied by the client, so no pre-existing object
/// is ever overwritten.
#[utoipa::path(
    post,
    path = "/upload",
    tag = "assets",
    request_body(content = inline(Object), content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "Asset stored", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, headers, body), fields(operation = "upload_asset"))]
pub async fn upload_asset(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, HttpAppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::InvalidInput("Content-Type header is required".to_string()))?;

    if !state.policy.is_allowed(content_type) {
        return Err(HttpAppError(AppError::InvalidContentType(
            "Invalid content type. Only images and videos are allowed".to_string(),
        )));
    }

    if body.is_empty() {
        return Err(HttpAppError(AppError::InvalidInput(
            "Request body is required".to_string(),
        )));
    }

    // Gateways that base64-wrap binary payloads flag it with
    // Content-Transfer-Encoding; decode back to raw bytes before storage.
    let data = if is_base64_transfer_encoded(&headers) {
        BASE64.decode(body.as_ref()).map_err(|_| {
            AppError::InvalidInput("Request body is not valid base64".to_string())
        })?
    } else {
        body.to_vec()
    };

    let key = state.policy.generate_key(content_type);

    state.storage.put(&key, data, content_type).await?;

    tracing::info!(key = %key, content_type = %content_type, "Asset uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id: key,
            message: "Upload successful".to_string(),
        }),
    ))
}

fn is_base64_transfer_encoded(headers: &HeaderMap) -> bool {
    headers
        .get("content-transfer-encoding")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("base64"))
}

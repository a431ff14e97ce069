use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use assetgate_core::{AppError, StorageBackend};
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use utoipa::ToSchema;

/// Credential lifetime. Clients get exactly one hour to perform the upload.
const PRESIGNED_URL_EXPIRY_SECS: u64 = 3600;

/// Request to mint a presigned upload URL. No binary payload ever touches
/// this endpoint; the client uploads directly to storage with the returned
/// credential.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUploadRequest {
    /// Declared content type of the asset the client intends to upload
    #[schema(example = "image/png")]
    pub content_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUploadResponse {
    /// Server-generated asset id (also the storage key)
    pub id: String,
    /// Time-limited URL the client PUTs the payload to
    pub presigned_url: String,
    pub content_type: String,
    /// Credential lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: u64,
    pub message: String,
}

/// Mint a presigned upload URL for direct-to-storage uploads.
///
/// Runs the identical validation and key-generation policy as the direct
/// upload path, so keys minted here are indistinguishable downstream. This
/// call performs no storage write.
#[utoipa::path(
    post,
    path = "/presigned",
    tag = "assets",
    request_body = PresignedUploadRequest,
    responses(
        (status = 200, description = "Presigned URL generated", body = PresignedUploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "presigned_upload"))]
pub async fn presigned_upload(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<PresignedUploadRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    let content_type = request.content_type.ok_or_else(|| {
        AppError::InvalidInput("contentType field is required in request body".to_string())
    })?;

    if !state.policy.is_allowed(&content_type) {
        return Err(HttpAppError(AppError::InvalidContentType(
            "Invalid content type. Only images and videos are allowed".to_string(),
        )));
    }

    // Validation precedes the backend check so clients get consistent
    // answers regardless of deployment.
    if state.storage.backend_type() != StorageBackend::S3 {
        return Err(HttpAppError(AppError::InvalidInput(
            "Presigned URLs are only available when using the S3 storage backend".to_string(),
        )));
    }

    let key = state.policy.generate_key(&content_type);

    let presigned_url = state
        .storage
        .presigned_put_url(
            &key,
            &content_type,
            Duration::from_secs(PRESIGNED_URL_EXPIRY_SECS),
        )
        .await?;

    tracing::info!(
        key = %key,
        content_type = %content_type,
        expires_in_secs = PRESIGNED_URL_EXPIRY_SECS,
        "Presigned upload URL generated"
    );

    Ok(Json(PresignedUploadResponse {
        id: key,
        presigned_url,
        content_type,
        expires_in: PRESIGNED_URL_EXPIRY_SECS,
        message: "Presigned URL generated successfully".to_string(),
    }))
}

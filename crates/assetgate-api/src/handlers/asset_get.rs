use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use assetgate_core::validate_asset_id;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// Cache directive applied to successful asset reads.
const CACHE_CONTROL_VALUE: &str = "public, max-age=3600";

/// Fallback when storage reports no content type for an object.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Fetch an asset's bytes by id.
///
/// The stored content type travels back on the response; reads are served
/// straight from the blob store, there is no server-side metadata record.
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "assets",
    params(
        ("id" = String, Path, description = "Asset id")
    ),
    responses(
        (status = 200, description = "Asset bytes", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 404, description = "Asset not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_asset", asset_id = %id))]
pub async fn get_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, HttpAppError> {
    validate_asset_id(&id)?;

    let object = state.storage.get(&id).await?;

    let content_type = object
        .content_type
        .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
    let content_length = object.data.len();

    tracing::info!(key = %id, size_bytes = content_length, "Asset served");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_LENGTH, content_length.to_string()),
            (header::CACHE_CONTROL, CACHE_CONTROL_VALUE.to_string()),
        ],
        object.data,
    )
        .into_response())
}

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use assetgate_core::validate_asset_id;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Response for a completed delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
}

/// Delete an asset by id.
///
/// Storage delete is idempotent: deleting a key that never existed still
/// reports success, so this endpoint cannot be used to confirm prior
/// existence.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "assets",
    params(
        ("id" = String, Path, description = "Asset id")
    ),
    responses(
        (status = 200, description = "Asset deleted", body = DeleteResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 401, description = "Missing or invalid API key", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "delete_asset", asset_id = %id))]
pub async fn delete_asset(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    validate_asset_id(&id)?;

    state.storage.delete(&id).await?;

    tracing::info!(key = %id, "Asset deleted");

    Ok(Json(DeleteResponse {
        message: "Asset deleted successfully".to_string(),
    }))
}

//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Assetgate API",
        version = "0.1.0",
        description = "Asset gateway: upload image/video assets to object storage and retrieve or delete them by opaque id. Uploads go either through the direct body endpoint or via presigned URLs minted for direct-to-storage PUTs."
    ),
    paths(
        handlers::asset_upload::upload_asset,
        handlers::presigned_upload::presigned_upload,
        handlers::asset_get::get_asset,
        handlers::asset_delete::delete_asset,
    ),
    components(
        schemas(
            handlers::asset_upload::UploadResponse,
            handlers::presigned_upload::PresignedUploadRequest,
            handlers::presigned_upload::PresignedUploadResponse,
            handlers::asset_delete::DeleteResponse,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "assets", description = "Asset storage operations")
    )
)]
struct ApiDoc;

pub mod asset_delete;
pub mod asset_get;
pub mod asset_upload;
pub mod presigned_upload;

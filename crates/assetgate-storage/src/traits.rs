//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use assetgate_core::StorageBackend;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An object fetched from storage: the raw bytes plus the content type the
/// backend reports, when it reports one.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Storage abstraction trait
///
/// All storage backends (S3, local filesystem) must implement this trait so
/// the HTTP handlers can work against any backend without coupling to
/// implementation details.
///
/// **Key format:** keys are opaque strings minted by the upload policy.
/// They must not contain `..` or a leading `/`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `key` with the declared content type.
    ///
    /// Exactly one write. An existing object under the same key is
    /// overwritten; callers are expected to mint fresh keys.
    async fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<()>;

    /// Fetch the object stored under `key`.
    ///
    /// A missing key yields `StorageError::NotFound`.
    async fn get(&self, key: &str) -> StorageResult<StoredObject>;

    /// Delete the object stored under `key`.
    ///
    /// Idempotent: deleting a key that does not exist reports success, so
    /// callers cannot use delete to confirm prior existence.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Mint a time-limited presigned PUT URL scoped to `key`.
    ///
    /// Clients upload with HTTP PUT to the returned URL, out of band. Only
    /// supported by S3 backends; other backends return a `ConfigError`.
    async fn presigned_put_url(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> StorageResult<String>;

    /// Check whether an object exists under `key`.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

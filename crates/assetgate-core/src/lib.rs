//! Assetgate Core Library
//!
//! This crate provides the domain types shared across all Assetgate
//! components: configuration, error types, the upload policy (content-type
//! allow-list and key generation), and storage backend identifiers.

pub mod config;
pub mod error;
pub mod policy;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use policy::{validate_asset_id, AllowedType, MediaKind, UploadPolicy};
pub use storage_types::StorageBackend;

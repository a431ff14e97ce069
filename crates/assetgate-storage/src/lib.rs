//! Assetgate Storage Library
//!
//! This crate provides the blob-store abstraction for the asset gateway and
//! its implementations: S3 (via `object_store`) and the local filesystem.
//!
//! # Storage keys
//!
//! Keys are opaque identifiers minted by the upload policy
//! (`{timestamp}-{suffix}{extension}`). Keys must not contain `..` or a
//! leading `/`; backends reject such keys instead of resolving them.

pub mod factory;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use assetgate_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};

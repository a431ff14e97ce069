//! Assetgate API Library
//!
//! This crate provides the HTTP surface of the asset gateway: handlers,
//! API-key middleware, error shaping, and application setup.

// Module declarations
mod api_doc;
mod handlers;

// Public modules
pub mod auth;
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;

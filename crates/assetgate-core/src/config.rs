//! Configuration module
//!
//! Environment-driven configuration for the gateway: server, storage
//! backend selection, and request limits.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 10 * 1024 * 1024;
const MIN_API_KEY_LEN: usize = 32;

/// Application configuration, sourced from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    /// Gateway API key. `None` disables authentication (development only).
    pub api_key: Option<String>,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    // Request limits
    pub max_upload_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| s.parse())
            .transpose()?;

        let max_upload_size_bytes = env::var("MAX_UPLOAD_SIZE_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_BYTES);

        Ok(Config {
            server_port,
            environment,
            cors_origins,
            api_key: env::var("API_KEY").ok(),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            max_upload_size_bytes,
        })
    }

    /// Check required settings for the selected storage backend and the API
    /// key shape. Called once at startup, before any storage client is built.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend.unwrap_or(StorageBackend::S3) {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    anyhow::bail!("S3_BUCKET must be set when using the s3 storage backend");
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    anyhow::bail!(
                        "S3_REGION or AWS_REGION must be set when using the s3 storage backend"
                    );
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    );
                }
            }
        }

        if let Some(ref key) = self.api_key {
            if key.len() < MIN_API_KEY_LEN {
                anyhow::bail!("API_KEY must be at least {} characters long", MIN_API_KEY_LEN);
            }
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

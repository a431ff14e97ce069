//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p assetgate-api --test assets_test`
//! or `cargo test -p assetgate-api`. Tests run against local storage in a
//! fresh temp dir; no external services required.

use assetgate_api::setup::routes;
use assetgate_api::state::AppState;
use assetgate_core::{Config, StorageBackend, UploadPolicy};
use assetgate_storage::{LocalStorage, Storage};
use axum_test::TestServer;
use std::sync::Arc;
use tempfile::TempDir;

/// API key used by the default test app (32+ chars, matching the config
/// minimum enforced at startup).
pub const TEST_API_KEY: &str = "test-api-key-0123456789abcdef0123456789";

/// Test application: server plus owned temp storage.
pub struct TestApp {
    pub server: TestServer,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

/// Setup test app with API-key auth enabled and isolated local storage.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_api_key(Some(TEST_API_KEY.to_string())).await
}

/// Setup test app with explicit API-key configuration (`None` disables auth).
pub async fn setup_test_app_with_api_key(api_key: Option<String>) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    let config = create_test_config(api_key, temp_dir.path().to_string_lossy().into_owned());

    let state = Arc::new(AppState {
        config: config.clone(),
        policy: UploadPolicy::default(),
        storage,
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server = TestServer::new(app).expect("Failed to create test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}

fn create_test_config(api_key: Option<String>, storage_path: String) -> Config {
    Config {
        server_port: 3000,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        api_key,
        storage_backend: Some(StorageBackend::Local),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        local_storage_path: Some(storage_path),
        max_upload_size_bytes: 10 * 1024 * 1024,
    }
}

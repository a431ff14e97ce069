//! Application state shared by all handlers.

use assetgate_core::{Config, UploadPolicy};
use assetgate_storage::Storage;
use std::sync::Arc;

/// Main application state: configuration, the upload policy, and the blob
/// store client. Handlers carry no per-request state; the storage client is
/// reused across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub policy: UploadPolicy,
    pub storage: Arc<dyn Storage>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}

//! API key enforcement.
//!
//! Asset routes are fronted by a single opaque API key carried in the
//! `x-api-key` header, the same contract the upstream reverse proxy's usage
//! plans enforce. There is no further authorization model: the key is either
//! present and correct, or the request is rejected.

use crate::error::HttpAppError;
use assetgate_core::AppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware state: the configured API key, if any.
#[derive(Clone)]
pub struct AuthState {
    pub api_key: Option<String>,
}

/// Constant-time comparison so key checks leak no timing information.
fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    request: Request,
    next: Next,
) -> Response {
    // No key configured: authentication disabled (development mode).
    let Some(ref expected) = auth_state.api_key else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());

    match provided {
        Some(key) if secure_compare(key, expected) => next.run(request).await,
        Some(_) => {
            HttpAppError(AppError::Unauthorized("Invalid API key".to_string())).into_response()
        }
        None => HttpAppError(AppError::Unauthorized(
            "Missing x-api-key header".to_string(),
        ))
        .into_response(),
    }
}

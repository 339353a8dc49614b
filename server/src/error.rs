//! Errors raised while forwarding to the authentication backend.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Detail shown to the browser when the backend cannot be reached. It uses
/// the backend's own `{"detail": ...}` shape so the client treats it like any
/// other rejection.
pub const UNAVAILABLE_DETAIL: &str = "Authentication service unavailable";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend request could not be sent or no response arrived.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The backend response could not be turned into a reply.
    #[error("backend response invalid: {0}")]
    Response(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "auth proxy failure");
        (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "detail": UNAVAILABLE_DETAIL }))).into_response()
    }
}

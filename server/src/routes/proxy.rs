//! Same-origin forwarding of the `/auth/*` surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client talks to `/auth/login`, `/auth/register`, `/auth/me`,
//! `/auth/logout` and the Google OAuth entry on its own origin. This handler
//! relays each request to the configured authentication backend and streams
//! the answer back with status, headers and body intact.
//!
//! ERROR HANDLING
//! ==============
//! Backend rejections (4xx/5xx) are not errors here: they are relayed as-is
//! so the client can read `detail`. Only transport failures become
//! `ProxyError` and a 502.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, Response, Uri, header};

use crate::error::ProxyError;
use crate::state::AppState;

/// Connection-scoped headers that must not be relayed in either direction.
static HOP_BY_HOP: [HeaderName; 9] = [
    header::CONNECTION,
    header::HOST,
    header::CONTENT_LENGTH,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Backend URL for an incoming request URI, query string included.
pub(crate) fn upstream_url(backend: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or(uri.path(), |pq| pq.as_str());
    format!("{backend}{path_and_query}")
}

/// Copy of `headers` without hop-by-hop entries.
pub(crate) fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if HOP_BY_HOP.contains(name) || name.as_str() == "keep-alive" {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Relay one request to the authentication backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response<Body>, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding auth request");

    let upstream = state
        .http
        .request(method, &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;

    let mut response = Response::builder()
        .status(status)
        .body(Body::from(bytes))
        .map_err(|e| ProxyError::Response(e.to_string()))?;
    *response.headers_mut() = response_headers;
    Ok(response)
}

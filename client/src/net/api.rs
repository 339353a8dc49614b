//! HTTP client for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call fails with a transport
//! error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Two classes only. A non-success status becomes `ApiError::Rejected` with
//! the backend's `detail` text when present; anything that prevents a usable
//! response (network failure, undecodable success body) becomes
//! `ApiError::Transport`. No retries, no timeouts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};

/// Shown for transport failures regardless of which call failed.
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to the server";

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const PROFILE_PATH: &str = "/auth/me";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const OAUTH_LOGIN_PATH: &str = "/auth/google/login";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    #[error("request rejected: status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// No usable response arrived.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text to surface to the user. `fallback` covers rejections without a
    /// `detail`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { detail: Some(detail), .. } => detail.clone(),
            Self::Rejected { detail: None, .. } => fallback.to_owned(),
            Self::Transport(_) => CONNECTION_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Build the rejection for a non-success `status` with raw response `body`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn rejection(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<super::types::ErrorBody>(body).ok().and_then(|b| b.message());
    ApiError::Rejected { status, detail }
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// The four backend calls the client makes.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError>;

    /// `POST /auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError>;

    /// `GET /auth/me` with the token as bearer credential.
    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError>;

    /// `POST /auth/logout`. Advisory; the client drops its token either way.
    async fn logout(&self, token: &str) -> Result<(), ApiError>;
}

/// `AuthApi` over `fetch`, rooted at `base` (empty for same-origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpAuthApi {
    base: String,
}

impl HttpAuthApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Full-page redirect target that starts the OAuth flow.
    pub fn oauth_login_url(&self) -> String {
        self.endpoint(OAUTH_LOGIN_PATH)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(rejection(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    read_json(resp).await
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint(LOGIN_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json(&self.endpoint(REGISTER_PATH), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(PROFILE_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            read_json(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGOUT_PATH))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(rejection(status, &body));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

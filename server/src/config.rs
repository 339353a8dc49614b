//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is set but does not parse.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The backend URL is not an absolute http(s) URL.
    #[error("AUTH_BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendUrl(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Authentication backend the `/auth/*` surface is forwarded to, without
    /// a trailing slash.
    pub backend_url: String,
    /// Connect timeout for backend calls. There is no overall request timeout.
    pub connect_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url: DEFAULT_BACKEND_URL.to_owned(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_BACKEND_URL`: default `http://127.0.0.1:8000`
    /// - `AUTH_PROXY_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_var(&lookup, "PORT")?.unwrap_or(defaults.port);
        let backend_url = match lookup("AUTH_BACKEND_URL").map(|raw| raw.trim().to_owned()) {
            Some(raw) if !raw.is_empty() => normalize_backend_url(&raw)?,
            _ => defaults.backend_url,
        };
        let connect_timeout = parse_var::<u64, _>(&lookup, "AUTH_PROXY_CONNECT_TIMEOUT_SECS")?
            .map_or(defaults.connect_timeout, Duration::from_secs);

        Ok(Self { port, backend_url, connect_timeout })
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| ConfigError::Invalid { var, value: raw })
}

fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::BackendUrl(raw.to_owned()));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

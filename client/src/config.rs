//! Client configuration baked in at build time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::message::MESSAGE_TTL;

/// Compile-time override for the backend base URL.
const API_BASE_ENV: Option<&str> = option_env!("AUTH_API_BASE");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for `/auth/*` calls; empty means same origin.
    pub api_base: String,
    /// How long transient form messages stay visible.
    pub message_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base: String::new(), message_ttl: MESSAGE_TTL }
    }
}

impl ClientConfig {
    /// Defaults, with `AUTH_API_BASE` applied if it was set when building.
    pub fn from_build_env() -> Self {
        Self::with_api_base(API_BASE_ENV)
    }

    fn with_api_base(raw: Option<&str>) -> Self {
        let api_base = raw.map(str::trim).unwrap_or_default().trim_end_matches('/').to_owned();
        Self { api_base, ..Self::default() }
    }
}

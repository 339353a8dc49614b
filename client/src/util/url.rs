//! OAuth callback token extraction from the page URL.
//!
//! The OAuth provider redirects back to the app root with the session token
//! embedded in the URL, either as `?token=...` or `#token=...`. Both parts use
//! `application/x-www-form-urlencoded` encoding.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

/// Name of the URL parameter carrying the callback token.
pub const TOKEN_PARAM: &str = "token";

/// Path the URL is normalized to once a callback token is consumed.
pub const ROOT_PATH: &str = "/";

/// The parts of `window.location` the controller inspects on start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLocation {
    /// Query string, with or without the leading `?`.
    pub search: String,
    /// Fragment, with or without the leading `#`.
    pub hash: String,
}

impl PageLocation {
    pub fn new(search: impl Into<String>, hash: impl Into<String>) -> Self {
        Self { search: search.into(), hash: hash.into() }
    }

    /// Token from the query string, else from the fragment. Empty values
    /// count as absent.
    pub fn callback_token(&self) -> Option<String> {
        param(&self.search, TOKEN_PARAM).or_else(|| param(&self.hash, TOKEN_PARAM))
    }
}

/// Value of the first `name` parameter in a `?`/`#`-prefixed or bare
/// parameter string, unless it is empty.
pub fn param(raw: &str, name: &str) -> Option<String> {
    let raw = raw.strip_prefix(['?', '#']).unwrap_or(raw);
    url::form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

//! Networking modules for the authentication backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and classifies failures, `types` defines the
//! wire schema shared with the backend.

pub mod api;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;

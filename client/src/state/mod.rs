//! Client-side state.
//!
//! DESIGN
//! ======
//! `controller` is the session/view state machine and the only writer of
//! `session`. It emits `effects::Command`s instead of performing I/O, which
//! keeps every transition testable without a browser.

pub mod controller;
pub mod effects;
pub mod message;
pub mod session;
pub mod view;

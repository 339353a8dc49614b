//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read the shared `AppContext` and render controller state; they
//! never mutate the session directly.

pub mod message_banner;
pub mod nav_bar;
pub mod profile_card;

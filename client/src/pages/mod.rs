//! Page modules, one per controller view.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and turns user actions into controller
//! operations; rendering details live in `components`.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;

//! Screens and navigation controls.
//!
//! DESIGN
//! ======
//! Views form a closed set with exactly one active at a time. Navigation is a
//! direct replace of the displayed view, never a history push.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// One of the mutually exclusive screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    Login,
    Register,
    Profile,
}

impl View {
    /// Views only reachable with a session token.
    pub fn requires_session(self) -> bool {
        matches!(self, Self::Profile)
    }

    /// Views that render the transient message banner.
    pub fn has_message_slot(self) -> bool {
        matches!(self, Self::Home | Self::Login | Self::Register)
    }
}

/// What a navigation control does when activated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Navigate(View),
    Logout,
}

/// A single navigation control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub action: NavAction,
}

const AUTHENTICATED_NAV: &[NavItem] = &[
    NavItem { label: "Profile", action: NavAction::Navigate(View::Profile) },
    NavItem { label: "Logout", action: NavAction::Logout },
];

const ANONYMOUS_NAV: &[NavItem] = &[
    NavItem { label: "Home", action: NavAction::Navigate(View::Home) },
    NavItem { label: "Login", action: NavAction::Navigate(View::Login) },
    NavItem { label: "Register", action: NavAction::Navigate(View::Register) },
];

/// Control set for the given session presence.
pub fn nav_items(authenticated: bool) -> &'static [NavItem] {
    if authenticated { AUTHENTICATED_NAV } else { ANONYMOUS_NAV }
}

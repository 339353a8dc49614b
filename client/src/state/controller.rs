//! Session/view state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single authority for what is on screen. Pages and the nav bar call into the
//! controller; the controller mutates the session and the active view and
//! returns the `Command`s the shell must run (see `state::effects`).
//!
//! DESIGN
//! ======
//! - States: `Home`, `Login`, `Register`, `Profile`. None is terminal.
//! - Transitions happen on explicit user action or on a call outcome:
//!   successful login/registration lands on `Profile`, a failed profile fetch
//!   forces logout to `Home`.
//! - `Profile` is only reachable with a token; navigating there without one
//!   lands on `Home`.
//! - Every transition bumps the generation so responses tied to the previous
//!   view are dropped by `resolve`.
//! - While a login or registration call is in flight, further submissions on
//!   the same view are ignored.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use crate::state::effects::{Call, Command, Outcome, Request, RequestTicket};
use crate::state::message::{MESSAGE_TTL, Message, MessageKind, MessageSlot, MessageTicket};
use crate::state::session::{KeyValueStore, SessionStore};
use crate::state::view::{NavAction, NavItem, View, nav_items};
use crate::util::url::{PageLocation, ROOT_PATH};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed";
pub const PROFILE_FAILED_MESSAGE: &str = "Failed to load profile";

/// Profile view content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileState {
    #[default]
    Idle,
    Loading,
    Loaded(UserProfile),
}

#[derive(Clone, Debug)]
pub struct Controller<S> {
    session: SessionStore<S>,
    view: View,
    profile: ProfileState,
    message: MessageSlot,
    message_ttl: Duration,
    generation: u64,
    submitting: bool,
    started: bool,
}

impl<S: KeyValueStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: SessionStore::new(store),
            view: View::Home,
            profile: ProfileState::Idle,
            message: MessageSlot::default(),
            message_ttl: MESSAGE_TTL,
            generation: 0,
            submitting: false,
            started: false,
        }
    }

    #[must_use]
    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Pick the initial view. Consumes an OAuth callback token from `location`
    /// if present. Runs once; later calls do nothing.
    pub fn start(&mut self, location: &PageLocation) -> Vec<Command> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        let stored = self.session.get().is_some();

        if let Some(token) = location.callback_token() {
            self.session.set(&token);
            let mut commands = vec![Command::ReplaceUrl(ROOT_PATH.to_owned())];
            commands.extend(self.navigate(View::Profile));
            return commands;
        }

        self.navigate(if stored { View::Profile } else { View::Home })
    }

    /// Replace the active view. Entering `Profile` starts a profile fetch.
    pub fn navigate(&mut self, view: View) -> Vec<Command> {
        self.generation += 1;
        self.message.reset();
        self.submitting = false;
        self.profile = ProfileState::Idle;

        if view.requires_session() {
            let Some(token) = self.session.get().map(str::to_owned) else {
                self.view = View::Home;
                return Vec::new();
            };
            self.view = view;
            self.profile = ProfileState::Loading;
            return vec![self.request(Call::FetchProfile { token })];
        }

        self.view = view;
        Vec::new()
    }

    /// Run a nav control.
    pub fn activate(&mut self, action: NavAction) -> Vec<Command> {
        match action {
            NavAction::Navigate(view) => self.navigate(view),
            NavAction::Logout => self.logout(),
        }
    }

    // =========================================================================
    // AUTHENTICATION ACTIONS
    // =========================================================================

    pub fn submit_login(&mut self, email: &str, password: &str) -> Vec<Command> {
        if self.view != View::Login || self.submitting {
            return Vec::new();
        }
        self.submitting = true;
        let request = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        vec![self.request(Call::Login(request))]
    }

    pub fn submit_register(&mut self, email: &str, password: &str, full_name: Option<&str>) -> Vec<Command> {
        if self.view != View::Register || self.submitting {
            return Vec::new();
        }
        self.submitting = true;
        let request = RegisterRequest {
            email: email.to_owned(),
            password: password.to_owned(),
            full_name: full_name.map(str::to_owned),
        };
        vec![self.request(Call::Register(request))]
    }

    /// Leave the page for the backend's OAuth entry point. The token comes
    /// back in the URL and is picked up by `start`.
    pub fn login_with_oauth(&mut self, entry_url: &str) -> Vec<Command> {
        if self.submitting {
            return Vec::new();
        }
        vec![Command::Redirect(entry_url.to_owned())]
    }

    /// Drop the session and return to `Home`. The backend is told about the
    /// logout on a best-effort basis; its answer is ignored.
    pub fn logout(&mut self) -> Vec<Command> {
        let token = self.session.get().map(str::to_owned);
        self.session.clear();
        let mut commands = self.navigate(View::Home);
        if let Some(token) = token {
            commands.push(self.request(Call::Logout { token }));
        }
        commands
    }

    // =========================================================================
    // CALL OUTCOMES
    // =========================================================================

    /// Whether a response issued under `ticket` may still touch state.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a finished call. Stale tickets are dropped.
    pub fn resolve(&mut self, ticket: RequestTicket, outcome: Outcome) -> Vec<Command> {
        if !self.is_current(ticket) {
            return Vec::new();
        }
        match outcome {
            Outcome::Login(result) => self.finish_auth(result, LOGIN_FAILED_MESSAGE),
            Outcome::Register(result) => self.finish_auth(result, REGISTER_FAILED_MESSAGE),
            Outcome::Profile(result) => self.finish_profile(result),
            Outcome::LoggedOut(_) => Vec::new(),
        }
    }

    fn finish_auth(&mut self, result: Result<TokenResponse, ApiError>, fallback: &str) -> Vec<Command> {
        self.submitting = false;
        match result {
            Ok(resp) if !resp.access_token.is_empty() => {
                self.session.set(&resp.access_token);
                self.navigate(View::Profile)
            }
            Ok(_) => self.show_message(fallback, MessageKind::Error),
            Err(err) => self.show_message(err.user_message(fallback), MessageKind::Error),
        }
    }

    fn finish_profile(&mut self, result: Result<UserProfile, ApiError>) -> Vec<Command> {
        match result {
            Ok(user) => {
                self.profile = ProfileState::Loaded(user);
                Vec::new()
            }
            // Only path by which an invalid or expired token is purged.
            Err(_) => {
                self.session.clear();
                let mut commands = self.navigate(View::Home);
                commands.extend(self.show_message(PROFILE_FAILED_MESSAGE, MessageKind::Error));
                commands
            }
        }
    }

    // =========================================================================
    // TRANSIENT MESSAGE
    // =========================================================================

    /// Show `text` in the current view's message slot, replacing any visible
    /// message. No-op on views without a slot.
    pub fn show_message(&mut self, text: impl Into<String>, kind: MessageKind) -> Vec<Command> {
        if !self.view.has_message_slot() {
            return Vec::new();
        }
        let ticket = self.message.show(text, kind);
        vec![Command::ExpireMessage { ticket, after: self.message_ttl }]
    }

    pub fn expire_message(&mut self, ticket: MessageTicket) -> bool {
        self.message.expire(ticket)
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.current().is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.current()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.current()
    }

    /// Navigation controls matching the current session.
    pub fn nav_items(&self) -> &'static [NavItem] {
        nav_items(self.is_authenticated())
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    fn request(&self, call: Call) -> Command {
        Command::Request(Request { ticket: RequestTicket(self.generation), call })
    }
}

//! Commands emitted by the controller and the shell that executes them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Controller` never touches the network, timers or the browser location.
//! It returns `Command`s; `dispatch` runs them on the browser event loop and
//! feeds finished calls back through `Controller::resolve`.
//!
//! DESIGN
//! ======
//! Every request carries the controller generation it was issued under. A
//! view transition bumps the generation, so a response that lands after the
//! user moved on is recognised as stale and dropped instead of overwriting the
//! view that is now on screen.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use std::time::Duration;

use crate::app::AppContext;
use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{LoginRequest, RegisterRequest, TokenResponse, UserProfile};
use crate::state::message::MessageTicket;

/// Controller generation a request was issued under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(pub(crate) u64);

/// A backend call to make.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Login(LoginRequest),
    Register(RegisterRequest),
    FetchProfile { token: String },
    Logout { token: String },
}

impl Call {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login(_) => "login",
            Self::Register(_) => "register",
            Self::FetchProfile { .. } => "profile",
            Self::Logout { .. } => "logout",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub ticket: RequestTicket,
    pub call: Call,
}

/// Side effect requested by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Issue a backend call and resolve its outcome.
    Request(Request),
    /// Replace the current history entry without reloading.
    ReplaceUrl(String),
    /// Leave the page for `url`.
    Redirect(String),
    /// Clear the transient message after `after`, unless superseded.
    ExpireMessage { ticket: MessageTicket, after: Duration },
}

/// Result of a finished `Call`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Login(Result<TokenResponse, ApiError>),
    Register(Result<TokenResponse, ApiError>),
    Profile(Result<UserProfile, ApiError>),
    LoggedOut(Result<(), ApiError>),
}

impl Outcome {
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Login(result) | Self::Register(result) => result.as_ref().err(),
            Self::Profile(result) => result.as_ref().err(),
            Self::LoggedOut(result) => result.as_ref().err(),
        }
    }
}

/// Run `call` against `api`.
pub async fn perform<A: AuthApi + ?Sized>(api: &A, call: Call) -> Outcome {
    match call {
        Call::Login(request) => Outcome::Login(api.login(&request).await),
        Call::Register(request) => Outcome::Register(api.register(&request).await),
        Call::FetchProfile { token } => Outcome::Profile(api.fetch_profile(&token).await),
        Call::Logout { token } => Outcome::LoggedOut(api.logout(&token).await),
    }
}

/// Execute `commands` on the browser event loop. No-op outside the browser.
pub fn dispatch(ctx: &AppContext, commands: Vec<Command>) {
    #[cfg(feature = "hydrate")]
    {
        for command in commands {
            execute(ctx.clone(), command);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, commands);
    }
}

#[cfg(feature = "hydrate")]
fn execute(ctx: AppContext, command: Command) {
    use leptos::prelude::{Update, WithUntracked};

    match command {
        Command::Request(Request { ticket, call }) => {
            leptos::task::spawn_local(async move {
                let label = call.label();
                let outcome = perform(&ctx.api, call).await;
                if let Some(err) = outcome.error() {
                    log::warn!("{label} call failed: {err}");
                }
                let current = ctx.controller.try_with_untracked(|c| c.is_current(ticket)).unwrap_or(false);
                if !current {
                    log::debug!("dropping stale {label} response");
                    return;
                }
                ctx.apply(|c| c.resolve(ticket, outcome));
            });
        }
        Command::ReplaceUrl(path) => crate::util::dom::replace_url(&path),
        Command::Redirect(url) => crate::util::dom::redirect(&url),
        Command::ExpireMessage { ticket, after } => {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(after).await;
                let _ = ctx.controller.try_update(|c| c.expire_message(ticket));
            });
        }
    }
}

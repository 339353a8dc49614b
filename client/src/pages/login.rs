//! Email + password sign-in, with Google OAuth as an alternative.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::message_banner::MessageBanner;
use crate::state::message::MessageKind;
use crate::state::view::View;

pub(crate) const MISSING_CREDENTIALS_MESSAGE: &str = "Enter both email and password.";

/// Trimmed email and raw password, both required.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = ctx.controller;
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = Memo::new(move |_| controller.with(|c| c.is_submitting()));

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok((email_value, password_value)) => {
                submit_ctx.apply(|c| c.submit_login(&email_value, &password_value));
            }
            Err(reason) => submit_ctx.apply(|c| c.show_message(reason, MessageKind::Error)),
        }
    };

    let oauth_ctx = ctx.clone();
    let on_oauth = move |_: leptos::ev::MouseEvent| {
        let entry = oauth_ctx.api.oauth_login_url();
        oauth_ctx.apply(|c| c.login_with_oauth(&entry));
    };

    view! {
        <div class="auth-card">
            <h2 class="auth-card__title">"Sign in"</h2>
            <MessageBanner/>
            <form class="auth-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || busy.get()>"Sign in"</button>
            </form>
            <div class="divider"><span>"or"</span></div>
            <button class="google" disabled=move || busy.get() on:click=on_oauth>
                "Sign in with Google"
            </button>
            <button class="secondary" on:click=move |_| ctx.apply(|c| c.navigate(View::Register))>
                "No account? Register"
            </button>
        </div>
    }
}

//! Email + password registration with an optional display name.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::message_banner::MessageBanner;
use crate::state::message::MessageKind;
use crate::state::view::View;

/// Same floor as the form's `minlength` attribute.
pub(crate) const MIN_PASSWORD_LEN: usize = 6;

pub(crate) const MISSING_EMAIL_MESSAGE: &str = "Enter an email address.";
pub(crate) const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 6 characters.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// A blank name is sent as "no value", never as an empty string.
pub(crate) fn normalize_full_name(raw: &str) -> Option<String> {
    let name = raw.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

pub(crate) fn validate_registration_input(
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<Registration, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(MISSING_EMAIL_MESSAGE);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD_MESSAGE);
    }
    Ok(Registration {
        email: email.to_owned(),
        password: password.to_owned(),
        full_name: normalize_full_name(full_name),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = ctx.controller;
    let email = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = Memo::new(move |_| controller.with(|c| c.is_submitting()));

    let submit_ctx = ctx.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = validate_registration_input(
            &email.get_untracked(),
            &password.get_untracked(),
            &full_name.get_untracked(),
        );
        match input {
            Ok(reg) => {
                submit_ctx.apply(|c| c.submit_register(&reg.email, &reg.password, reg.full_name.as_deref()));
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
            <h2 class="auth-card__title">"Register"</h2>
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
                    <label for="full-name">"Name (optional)"</label>
                    <input
                        id="full-name"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required
                        minlength="6"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" disabled=move || busy.get()>"Register"</button>
            </form>
            <div class="divider"><span>"or"</span></div>
            <button class="google" disabled=move || busy.get() on:click=on_oauth>
                "Register with Google"
            </button>
            <button class="secondary" on:click=move |_| ctx.apply(|c| c.navigate(View::Login))>
                "Already have an account? Sign in"
            </button>
        </div>
    }
}

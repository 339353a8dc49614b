//! Landing view for signed-out visitors.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::message_banner::MessageBanner;
use crate::state::view::View;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="home-welcome">
            <h2>"Welcome!"</h2>
            <MessageBanner/>
            <p>"Sign in with your Google account or with an email and password."</p>
            <div class="features">
                <div class="feature">
                    <h3>"Google OAuth"</h3>
                    <p>"Fast sign-in with an existing Google account"</p>
                </div>
                <div class="feature">
                    <h3>"Email + password"</h3>
                    <p>"Classic registration with an email address"</p>
                </div>
                <div class="feature">
                    <h3>"Bearer tokens"</h3>
                    <p>"Stateless authentication against the API"</p>
                </div>
            </div>
            <button class="home-welcome__start" on:click=move |_| ctx.apply(|c| c.navigate(View::Register))>
                "Get started"
            </button>
        </div>
    }
}

//! Transient message slot for form views.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn MessageBanner() -> impl IntoView {
    let controller = expect_context::<AppContext>().controller;
    let message = Memo::new(move |_| controller.with(|c| c.message().cloned()));

    view! {
        <div class="message" role="status">
            {move || {
                message
                    .get()
                    .map(|m| view! { <div class={m.kind.css_class()}>{m.text}</div> })
            }}
        </div>
    }
}

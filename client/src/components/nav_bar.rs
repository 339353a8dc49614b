//! Header navigation derived from session presence.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::view::NavItem;

/// Profile/Logout when signed in, Home/Login/Register otherwise. Empty until
/// the controller has started and knows the session.
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = ctx.controller;

    let items = Memo::new(move |_| {
        controller.with(|c| if c.is_started() { c.nav_items() } else { &[] as &'static [NavItem] })
    });

    view! {
        <nav class="nav">
            {move || {
                items
                    .get()
                    .iter()
                    .map(|item| {
                        let action = item.action;
                        let ctx = ctx.clone();
                        view! {
                            <button class="nav__item" on:click=move |_| ctx.apply(|c| c.activate(action))>
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

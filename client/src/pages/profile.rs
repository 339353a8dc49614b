//! Signed-in view. Content is fetched every time the view is entered.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::profile_card::ProfileCard;
use crate::state::controller::ProfileState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = ctx.controller;
    let profile = Memo::new(move |_| controller.with(|c| c.profile().clone()));

    view! {
        <div class="profile">
            <h2 class="profile__title">"Profile"</h2>
            {move || match profile.get() {
                ProfileState::Loaded(user) => view! { <ProfileCard profile=user/> }.into_any(),
                ProfileState::Loading | ProfileState::Idle => {
                    view! { <div class="loading">"Loading profile"</div> }.into_any()
                }
            }}
            <button on:click=move |_| ctx.apply(|c| c.logout())>"Logout"</button>
        </div>
    }
}

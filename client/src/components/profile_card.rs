//! Read-only card for the signed-in user.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;

const FALLBACK_NAME: &str = "User";

/// Name to show; blank or missing names fall back to a generic label.
pub(crate) fn display_name(profile: &UserProfile) -> &str {
    profile
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_NAME)
}

pub(crate) fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// Avatar URL, if the profile has a usable one.
pub(crate) fn avatar_url(profile: &UserProfile) -> Option<&str> {
    profile.picture.as_deref().filter(|url| !url.trim().is_empty())
}

#[component]
pub fn ProfileCard(profile: UserProfile) -> impl IntoView {
    let name = display_name(&profile).to_owned();
    let status = status_label(profile.is_active);
    let status_class =
        if profile.is_active { "profile-card__status--active" } else { "profile-card__status--inactive" };
    let avatar = avatar_url(&profile)
        .map(|src| view! { <img class="profile-card__avatar" src={src.to_owned()} alt="Avatar"/> });

    view! {
        <div class="profile-card">
            {avatar}
            <h3>{name}</h3>
            <p><strong>"Email: "</strong>{profile.email.clone()}</p>
            <p><strong>"ID: "</strong>{profile.id.clone()}</p>
            <p>
                <strong>"Status: "</strong>
                <span class=status_class>{status}</span>
            </p>
        </div>
    }
}

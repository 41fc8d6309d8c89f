use leptos::prelude::*;

use crate::app::use_dashboard;
use crate::models::Profile;
use crate::render::{format_date, ProfileListing};

/// Compact row used in the recent-profiles list.
#[component]
pub fn ProfileItem(profile: Profile) -> impl IntoView {
    let dashboard = use_dashboard();
    let name = profile.name.clone();
    let open = move |_| {
        let name = name.clone();
        dashboard.spawn(move |d| async move { d.open_detail(&name).await });
    };

    view! {
        <div class="profile-item" on:click=open>
            <div class="profile-item-info">
                <h4>{profile.name.clone()}</h4>
                <p>{format!("{} \u{2022} {}", profile.career_field, profile.experience_level)}</p>
            </div>
            <span class="profile-item-arrow">"\u{2192}"</span>
        </div>
    }
}

#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let dashboard = use_dashboard();
    let name = profile.name.clone();
    let open = move |_| {
        let name = name.clone();
        dashboard.spawn(move |d| async move { d.open_detail(&name).await });
    };
    let updated = profile
        .updated_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="profile-card" on:click=open>
            <h3>{profile.name.clone()}</h3>
            <div class="profile-info">
                <strong>"Field: "</strong>
                {profile.career_field.clone()}
            </div>
            <div class="profile-info">
                <strong>"Level: "</strong>
                {profile.experience_level.to_string()}
            </div>
            <div class="profile-info">
                <strong>"Updated: "</strong>
                {updated}
            </div>
            <span class="profile-badge">"View Details \u{2192}"</span>
        </div>
    }
}

/// Render a listing as compact items or full cards, with the given
/// placeholder when there is nothing to show.
pub fn listing_view(listing: ProfileListing, compact: bool, empty_text: &'static str) -> AnyView {
    match listing {
        ProfileListing::Loading => view! { <p class="text-muted">"Loading..."</p> }.into_any(),
        ProfileListing::Empty => view! { <p class="text-muted">{empty_text}</p> }.into_any(),
        ProfileListing::Cards(profiles) if compact => profiles
            .into_iter()
            .map(|profile| view! { <ProfileItem profile /> })
            .collect_view()
            .into_any(),
        ProfileListing::Cards(profiles) => profiles
            .into_iter()
            .map(|profile| view! { <ProfileCard profile /> })
            .collect_view()
            .into_any(),
    }
}

use leptos::prelude::*;

use crate::bindings::Bindings;
use crate::components::profile_card::listing_view;
use crate::view::View;

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let bindings = expect_context::<Bindings>();

    view! {
        <section
            id="profiles-view"
            class="view"
            class:active=move || bindings.view.get() == View::Profiles
        >
            <div id="profiles-list" class="profile-grid">
                {move || {
                    listing_view(
                        bindings.profiles.get(),
                        false,
                        "No profiles yet. Create one to get started!",
                    )
                }}
            </div>
        </section>
    }
}

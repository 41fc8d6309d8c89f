use leptos::prelude::*;

use crate::bindings::Bindings;
use crate::components::profile_card::listing_view;
use crate::components::stat_card::StatCard;
use crate::render::StatCards;
use crate::view::View;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let bindings = expect_context::<Bindings>();
    let stat = move |pick: fn(&StatCards) -> String| {
        Signal::derive(move || {
            bindings
                .stats
                .get()
                .as_ref()
                .map(pick)
                .unwrap_or_else(|| "-".to_string())
        })
    };

    view! {
        <section
            id="overview-view"
            class="view"
            class:active=move || bindings.view.get() == View::Overview
        >
            <div class="stats-grid">
                <StatCard
                    id="total-profiles"
                    label="Profiles"
                    value=stat(|s| s.total_profiles.to_string())
                />
                <StatCard
                    id="total-activities"
                    label="Activities"
                    value=stat(|s| s.total_activities.to_string())
                />
                <StatCard
                    id="total-completed"
                    label="Milestones Completed"
                    value=stat(|s| s.total_completed.to_string())
                />
                <StatCard id="completion-rate" label="Completion Rate" value=stat(StatCards::rate_label) />
            </div>

            <div class="overview-grid">
                <div class="card">
                    <h3>"Recent Profiles"</h3>
                    <div id="recent-profiles" class="profile-list">
                        {move || listing_view(bindings.recent.get(), true, "No profiles yet")}
                    </div>
                </div>
                <div class="card chart-card">
                    <h3>"Profile Status"</h3>
                    <canvas id="profileChart" node_ref=bindings.canvases.profile></canvas>
                </div>
                <div class="card chart-card">
                    <h3>"Weekly Activity"</h3>
                    <canvas id="activityChart" node_ref=bindings.canvases.activity></canvas>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::bindings::Bindings;
use crate::view::View;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let bindings = expect_context::<Bindings>();

    view! {
        <section
            id="analytics-view"
            class="view"
            class:active=move || bindings.view.get() == View::Analytics
        >
            <div class="analytics-grid">
                <div class="card chart-card">
                    <h3>"Skills Overview"</h3>
                    <canvas id="skillsChart" node_ref=bindings.canvases.skills></canvas>
                </div>
                <div class="card chart-card">
                    <h3>"Weekly Progress"</h3>
                    <canvas id="progressChart" node_ref=bindings.canvases.progress></canvas>
                </div>
            </div>
        </section>
    }
}

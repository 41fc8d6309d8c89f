use leptos::prelude::*;

#[component]
pub fn StatCard(
    /// Element id of the value, e.g. "total-profiles"
    id: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value" id=id>{move || value.get()}</span>
        </div>
    }
}

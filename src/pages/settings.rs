use leptos::prelude::*;

use crate::app::use_dashboard;
use crate::bindings::Bindings;
use crate::view::View;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let dashboard = use_dashboard();
    let bindings = expect_context::<Bindings>();

    let reset = move |_| dashboard.spawn(|d| async move { d.reset_all().await });

    view! {
        <section
            id="settings-view"
            class="view settings-page"
            class:active=move || bindings.view.get() == View::Settings
        >
            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="form-group checkbox-row">
                    <input
                        id="dark-mode"
                        type="checkbox"
                        prop:checked=move || bindings.dark_mode.get()
                        on:change=move |ev| {
                            let enabled = event_target_checked(&ev);
                            dashboard.run(|d| d.set_dark_mode(enabled));
                        }
                    />
                    <label for="dark-mode">"Dark mode"</label>
                </div>
            </section>

            <section class="settings-section danger-zone">
                <h3>"Data"</h3>
                <p class="section-description">
                    "Delete every profile and all recorded progress. This cannot be undone."
                </p>
                <button id="reset-btn" class="btn btn-danger" on:click=reset>"Reset All Data"</button>
            </section>
        </section>
    }
}

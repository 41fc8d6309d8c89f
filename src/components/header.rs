use leptos::html;
use leptos::prelude::*;
use tracing::{error, warn};
use wasm_bindgen_futures::JsFuture;

use crate::app::use_dashboard;
use crate::bindings::Bindings;

#[component]
pub fn Header() -> impl IntoView {
    let dashboard = use_dashboard();
    let bindings = expect_context::<Bindings>();
    let file_input = NodeRef::<html::Input>::new();

    let sync = move |_| dashboard.spawn(|d| async move { d.load_stats().await });
    let add = move |_| dashboard.run(|d| d.open_create());
    let export = move |_| dashboard.spawn(|d| async move { d.export_profiles().await });
    let pick_file = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    // Read the chosen file and hand its text to the importer
    let import = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        dashboard.spawn(move |d| async move {
            match JsFuture::from(file.text()).await {
                Ok(text) => match text.as_string() {
                    Some(text) => d.import_profiles(&text).await,
                    None => warn!("Import file '{}' is not text", file.name()),
                },
                Err(e) => error!("Failed to read '{}': {:?}", file.name(), e),
            }
        });
    };

    view! {
        <header class="top-bar">
            <h2 id="page-title">{move || bindings.view.get().title()}</h2>
            <div class="top-bar-actions">
                <button id="sync-btn" class="btn btn-secondary" on:click=sync>"Sync"</button>
                <button id="export-all-btn" class="btn btn-secondary" on:click=export>"Export"</button>
                <button id="import-btn" class="btn btn-secondary" on:click=pick_file>"Import"</button>
                <button id="add-profile-btn" class="btn btn-primary" on:click=add>"New Profile"</button>
                <input
                    node_ref=file_input
                    type="file"
                    accept=".json,application/json"
                    class="hidden"
                    on:change=import
                />
            </div>
        </header>
    }
}

use leptos::prelude::*;

use crate::app::use_dashboard;
use crate::bindings::Bindings;
use crate::view::View;

#[component]
pub fn Sidebar() -> impl IntoView {
    let dashboard = use_dashboard();
    let bindings = expect_context::<Bindings>();

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"Career Assistant"</h1>
                <p class="sidebar-subtitle">"Profile Dashboard"</p>
            </div>
            <ul class="nav-list">
                {View::ALL
                    .into_iter()
                    .map(|v| {
                        view! {
                            <li class="nav-item">
                                <a
                                    href="#"
                                    class="nav-link"
                                    class:active=move || bindings.view.get() == v
                                    data-view=v.id()
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        dashboard.spawn(move |d| async move { d.switch_view(v).await });
                                    }
                                >
                                    {v.nav_label()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

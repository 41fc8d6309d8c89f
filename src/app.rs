use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpBackend;
use crate::bindings::Bindings;
use crate::components::header::Header;
use crate::components::profile_modal::ProfileModal;
use crate::components::sidebar::Sidebar;
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::host::BrowserHost;
use crate::pages::analytics::AnalyticsPage;
use crate::pages::overview::OverviewPage;
use crate::pages::profiles::ProfilesPage;
use crate::pages::progress::ProgressPage;
use crate::pages::settings::SettingsPage;
use crate::settings::{LocalStore, Settings};

pub type AppDashboard = Dashboard<HttpBackend, BrowserHost, LocalStore, Bindings>;

/// Context handle to the dashboard controller.
#[derive(Clone, Copy)]
pub struct DashboardHandle(StoredValue<Rc<AppDashboard>, LocalStorage>);

impl DashboardHandle {
    pub fn bindings(&self) -> Option<Bindings> {
        self.0.try_with_value(|dashboard| *dashboard.screen())
    }

    /// Run a synchronous controller action.
    pub fn run(&self, action: impl FnOnce(&AppDashboard)) {
        self.0.try_with_value(|dashboard| action(dashboard));
    }

    /// Spawn a controller action on the browser's task queue.
    pub fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Rc<AppDashboard>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(dashboard) = self.0.try_get_value() {
            spawn_local(task(dashboard));
        }
    }
}

pub fn use_dashboard() -> DashboardHandle {
    expect_context::<DashboardHandle>()
}

#[component]
pub fn App(backend: HttpBackend, config: DashboardConfig) -> impl IntoView {
    let saved = Settings::new(LocalStore, config.dark_mode_key.clone());
    let bindings = Bindings::new(saved.dark_mode());
    let dashboard = Dashboard::new(backend, BrowserHost, LocalStore, bindings, &config);
    let handle = DashboardHandle(StoredValue::new_local(Rc::new(dashboard)));
    provide_context(handle);
    provide_context(bindings);

    // Saved settings first, then the overview
    Effect::new(move |_| {
        handle.spawn(|d| async move { d.start().await });
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="content">
                <Header />
                <OverviewPage />
                <ProfilesPage />
                <ProgressPage />
                <AnalyticsPage />
                <SettingsPage />
            </main>
            <ProfileModal />
        </div>
    }
}

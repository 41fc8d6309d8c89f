mod api;
mod app;
mod bindings;
mod charts;
mod components;
mod config;
mod dashboard;
mod error;
mod generation;
mod host;
mod logging;
mod modal;
mod models;
mod pages;
mod render;
mod screen;
mod settings;
mod theme;
mod transfer;
mod view;

#[cfg(test)]
mod test_support;

use leptos::prelude::*;
use tracing::{error, info};

use api::HttpBackend;
use app::App;
use config::DashboardConfig;
use settings::{LocalStore, Settings};

fn main() {
    console_error_panic_hook::set_once();

    let config = DashboardConfig::from_document();
    logging::init(&config.log_filter);

    // Avoid a light flash before the dashboard mounts
    theme::apply_dark_mode(Settings::new(LocalStore, config.dark_mode_key.clone()).dark_mode());

    let backend = match HttpBackend::new(&config.api_base) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Dashboard not started: {}", e);
            return;
        }
    };
    info!("Career dashboard using API at {}", config.api_base);

    leptos::mount::mount_to_body(move || view! { <App backend config /> });
}

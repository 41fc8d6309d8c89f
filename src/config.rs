//! Dashboard configuration.
//!
//! Values are layered: built-in defaults, then compile-time environment
//! (`DASHBOARD_API_BASE`, `DASHBOARD_LOG`), then `data-api-base` / `data-log`
//! attributes on `<body>` of the host page.

use url::Url;

use crate::error::DashboardError;

/// Default API base, relative to the page origin.
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key holding the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Absolute base URL of the REST API, without a trailing slash.
    pub api_base: String,
    pub dark_mode_key: String,
    pub log_filter: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("DASHBOARD_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            dark_mode_key: DARK_MODE_KEY.to_string(),
            log_filter: option_env!("DASHBOARD_LOG")
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        }
    }
}

impl DashboardConfig {
    /// Build the config for the current page, applying `<body>` overrides and
    /// resolving the API base against `window.location.origin`.
    pub fn from_document() -> Self {
        let mut config = Self::default();
        let Some(window) = web_sys::window() else {
            return config;
        };

        if let Some(body) = window.document().and_then(|doc| doc.body()) {
            if let Some(base) = body.get_attribute("data-api-base").filter(|s| !s.is_empty()) {
                config.api_base = base;
            }
            if let Some(filter) = body.get_attribute("data-log").filter(|s| !s.is_empty()) {
                config.log_filter = filter;
            }
        }

        let origin = window.location().origin().unwrap_or_default();
        match resolve_api_base(&origin, &config.api_base) {
            Ok(base) => config.api_base = base,
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
        config
    }
}

/// Resolve `base` against `origin` unless it is already absolute.
/// The result never ends with a slash.
pub fn resolve_api_base(origin: &str, base: &str) -> Result<String, DashboardError> {
    let url = match Url::parse(base) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(origin)
            .and_then(|o| o.join(base))
            .map_err(|e| DashboardError::Config(format!("invalid API base '{}': {}", base, e)))?,
        Err(e) => {
            return Err(DashboardError::Config(format!(
                "invalid API base '{}': {}",
                base, e
            )))
        }
    };
    Ok(url.as_str().trim_end_matches('/').to_string())
}

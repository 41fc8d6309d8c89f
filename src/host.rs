//! Browser services the dashboard needs besides rendering: blocking dialogs
//! and file downloads.

use wasm_bindgen::JsCast;

use crate::error::DashboardError;

pub trait Host {
    /// Blocking yes/no question. `false` when the user declines.
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);

    /// Offer `contents` to the user as a file named `filename`.
    fn download(&self, filename: &str, contents: &str) -> Result<(), DashboardError>;

    /// Open `url` in a new tab.
    fn open(&self, url: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn download(&self, filename: &str, contents: &str) -> Result<(), DashboardError> {
        let fail = |what: &str| DashboardError::Browser(format!("download failed: {}", what));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| fail("no document"))?;

        let parts = js_sys::Array::of1(&contents.into());
        let blob = web_sys::Blob::new_with_str_sequence(&parts).map_err(|_| fail("blob"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| fail("object url"))?;

        let anchor = document
            .create_element("a")
            .map_err(|_| fail("anchor"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| fail("anchor"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }

    fn open(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
}

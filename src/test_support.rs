//! In-memory stand-ins for the backend, the browser and the page, used by the
//! controller tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::Backend;
use crate::charts::{ChartHandle, ChartSlot, ChartSpec};
use crate::config::DashboardConfig;
use crate::dashboard::Dashboard;
use crate::error::DashboardError;
use crate::host::Host;
use crate::modal::ModalState;
use crate::models::{
    DashboardStats, ExperienceLevel, Profile, ProfileDetail, ProfileFlags, ProgressStats,
};
use crate::render::{ProfileListing, ProgressPanel, StatCards};
use crate::screen::Screen;
use crate::settings::Store;
use crate::view::View;

pub type TestDashboard = Dashboard<FakeBackend, FakeHost, MemoryStore, RecordingScreen>;

pub fn dashboard(backend: FakeBackend) -> TestDashboard {
    dashboard_with_store(backend, MemoryStore::default())
}

pub fn dashboard_with_store(backend: FakeBackend, store: MemoryStore) -> TestDashboard {
    Dashboard::new(
        backend,
        FakeHost::default(),
        store,
        RecordingScreen::default(),
        &DashboardConfig::default(),
    )
}

pub fn profile(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        career_field: "Software Engineering".to_string(),
        experience_level: ExperienceLevel::Intermediate,
        created_at: Some("2024-03-01T09:00:00".to_string()),
        updated_at: Some("2024-03-02T10:30:00".to_string()),
        extra: Default::default(),
    }
}

// -- Backend --

#[derive(Default)]
pub struct FakeBackend {
    pub profiles: RefCell<Vec<Profile>>,
    pub stats: RefCell<DashboardStats>,
    pub progress: RefCell<HashMap<String, ProgressStats>>,
    pub fail_all: Cell<bool>,
    pub fail_delete: Cell<bool>,
    /// The one call that answers with a network error.
    pub fail_on: RefCell<Option<String>>,
    gates: RefCell<HashMap<String, Rc<Notify>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn with_profiles(names: &[&str]) -> Self {
        let backend = Self::default();
        *backend.profiles.borrow_mut() = names.iter().map(|n| profile(n)).collect();
        backend
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| *c == call).count()
    }

    /// Hold `call` until the returned notify fires.
    pub fn gate(&self, call: &str) -> Rc<Notify> {
        let gate = Rc::new(Notify::new());
        self.gates
            .borrow_mut()
            .insert(call.to_string(), gate.clone());
        gate
    }

    async fn record(&self, call: String) -> Result<(), DashboardError> {
        self.calls.borrow_mut().push(call.clone());
        let gate = self.gates.borrow().get(&call).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_all.get() || self.fail_on.borrow().as_deref() == Some(call.as_str()) {
            return Err(DashboardError::Network("HTTP 500".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl Backend for FakeBackend {
    async fn dashboard_stats(&self) -> Result<DashboardStats, DashboardError> {
        self.record("GET stats".to_string()).await?;
        Ok(self.stats.borrow().clone())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, DashboardError> {
        self.record("GET profiles".to_string()).await?;
        Ok(self.profiles.borrow().clone())
    }

    async fn get_profile(&self, name: &str) -> Result<ProfileDetail, DashboardError> {
        self.record(format!("GET profiles/{}", name)).await?;
        let profile = self
            .profiles
            .borrow()
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))?;
        Ok(ProfileDetail {
            profile,
            stats: ProfileFlags {
                has_roadmap: true,
                ..Default::default()
            },
            progress: None,
        })
    }

    async fn delete_profile(&self, name: &str) -> Result<(), DashboardError> {
        self.record(format!("DELETE profiles/{}", name)).await?;
        if self.fail_delete.get() {
            return Err(DashboardError::Network("HTTP 500".to_string()));
        }
        let mut profiles = self.profiles.borrow_mut();
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        if profiles.len() == before {
            return Err(DashboardError::NotFound(name.to_string()));
        }
        Ok(())
    }

    async fn update_profile(
        &self,
        name: &str,
        fields: &serde_json::Value,
    ) -> Result<Profile, DashboardError> {
        self.record(format!("PUT profiles/{}", name)).await?;
        let mut profiles = self.profiles.borrow_mut();
        let existing = profiles
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))?;
        if let Some(field) = fields.get("career_field").and_then(|v| v.as_str()) {
            existing.career_field = field.to_string();
        }
        Ok(existing.clone())
    }

    async fn profile_progress(&self, name: &str) -> Result<ProgressStats, DashboardError> {
        self.record(format!("GET profiles/{}/progress", name)).await?;
        self.progress
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(name.to_string()))
    }
}

// -- Host --

#[derive(Default)]
pub struct FakeHost {
    pub decline: Cell<bool>,
    pub confirms: RefCell<Vec<String>>,
    pub alerts: RefCell<Vec<String>>,
    pub downloads: RefCell<Vec<(String, String)>>,
    pub opened: RefCell<Vec<String>>,
}

impl Host for FakeHost {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        !self.decline.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn download(&self, filename: &str, contents: &str) -> Result<(), DashboardError> {
        self.downloads
            .borrow_mut()
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }

    fn open(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

// -- Store --

/// Clones share the same entries, so a clone stands in for the same browser
/// profile after a reload.
#[derive(Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// -- Screen --

pub struct FakeChart {
    slot: ChartSlot,
    disposed: Rc<RefCell<Vec<ChartSlot>>>,
}

impl ChartHandle for FakeChart {
    fn dispose(&self) {
        self.disposed.borrow_mut().push(self.slot);
    }
}

#[derive(Default)]
pub struct RecordingScreen {
    pub view: Cell<Option<View>>,
    pub stats: Cell<Option<StatCards>>,
    pub recent: RefCell<Option<ProfileListing>>,
    pub profiles: RefCell<Option<ProfileListing>>,
    pub profile_renders: Cell<usize>,
    pub progress: RefCell<ProgressPanel>,
    pub modal: RefCell<ModalState>,
    pub dark_mode: Cell<Option<bool>>,
    pub drawn: RefCell<Vec<ChartSlot>>,
    pub disposed: Rc<RefCell<Vec<ChartSlot>>>,
}

impl Screen for RecordingScreen {
    type Chart = FakeChart;

    fn show_view(&self, view: View) {
        self.view.set(Some(view));
    }

    fn show_stats(&self, cards: StatCards) {
        self.stats.set(Some(cards));
    }

    fn show_recent(&self, listing: ProfileListing) {
        *self.recent.borrow_mut() = Some(listing);
    }

    fn show_profiles(&self, listing: ProfileListing) {
        if listing != ProfileListing::Loading {
            self.profile_renders.set(self.profile_renders.get() + 1);
        }
        *self.profiles.borrow_mut() = Some(listing);
    }

    fn show_progress(&self, panel: ProgressPanel) {
        *self.progress.borrow_mut() = panel;
    }

    fn show_modal(&self, modal: &ModalState) {
        *self.modal.borrow_mut() = modal.clone();
    }

    fn apply_dark_mode(&self, enabled: bool) {
        self.dark_mode.set(Some(enabled));
    }

    fn draw_chart(&self, slot: ChartSlot, _spec: &ChartSpec) -> Option<FakeChart> {
        self.drawn.borrow_mut().push(slot);
        Some(FakeChart {
            slot,
            disposed: self.disposed.clone(),
        })
    }
}

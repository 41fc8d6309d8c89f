//! The dashboard controller.
//!
//! Owns the client-side state (current view, modal, live charts) and keeps
//! what the screen shows in step with the backend. Nothing is cached: every
//! view entry and every write re-fetches from the server. Each fetch carries
//! the view generation it was issued under and is dropped if the user has
//! switched views since.

use std::cell::{Cell, RefCell};

use tracing::{debug, error, info, warn};

use crate::api::Backend;
use crate::charts::{ChartRegistry, ChartSlot, ChartSpec};
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::generation::{Generation, Ticket};
use crate::host::Host;
use crate::modal::{editor_url, ModalState};
use crate::models::{DashboardStats, Profile, ProfileDraft};
use crate::render::{ProfileListing, ProgressPanel, ProgressRow, StatCards};
use crate::screen::Screen;
use crate::settings::{Settings, Store};
use crate::transfer::{self, ImportSummary, EXPORT_FILENAME};
use crate::view::View;

const RESET_PROMPT: &str = "This will delete ALL profiles and data. Are you sure?";

pub struct Dashboard<B, H, S, V: Screen> {
    backend: B,
    host: H,
    settings: Settings<S>,
    screen: V,
    generation: Generation,
    /// Advanced whenever the modal changes, so a slow detail response cannot
    /// replace a newer modal.
    modal_generation: Generation,
    view: Cell<View>,
    modal: RefCell<ModalState>,
    charts: RefCell<ChartRegistry<V::Chart>>,
}

impl<B, H, S, V> Dashboard<B, H, S, V>
where
    B: Backend,
    H: Host,
    S: Store,
    V: Screen,
{
    pub fn new(backend: B, host: H, store: S, screen: V, config: &DashboardConfig) -> Self {
        Self {
            backend,
            host,
            settings: Settings::new(store, config.dark_mode_key.clone()),
            screen,
            generation: Generation::new(),
            modal_generation: Generation::new(),
            view: Cell::new(View::Overview),
            modal: RefCell::new(ModalState::Closed),
            charts: RefCell::new(ChartRegistry::new()),
        }
    }

    pub fn screen(&self) -> &V {
        &self.screen
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn current_view(&self) -> View {
        self.view.get()
    }

    pub fn modal(&self) -> ModalState {
        self.modal.borrow().clone()
    }

    /// Apply saved settings and show the overview.
    pub async fn start(&self) {
        self.apply_saved_settings();
        self.switch_view(View::Overview).await;
    }

    // -- View router --

    /// Unknown ids are ignored.
    pub async fn switch_view_by_id(&self, id: &str) {
        match View::from_id(id) {
            Some(view) => self.switch_view(view).await,
            None => debug!("Ignoring unknown view '{}'", id),
        }
    }

    pub async fn switch_view(&self, view: View) {
        let ticket = self.generation.advance();
        self.view.set(view);
        self.screen.show_view(view);

        match view {
            View::Overview => self.load_stats_for(ticket).await,
            View::Profiles => {
                self.screen.show_profiles(ProfileListing::Loading);
                self.load_profiles_for(ticket).await;
            }
            View::Progress => self.load_progress_for(ticket).await,
            View::Analytics => self.load_analytics(),
            View::Settings => {}
        }
    }

    fn is_stale(&self, ticket: Ticket, what: &str) -> bool {
        let stale = !self.generation.is_current(ticket);
        if stale {
            debug!("Discarding stale {} response", what);
        }
        stale
    }

    // -- Overview --

    pub async fn load_stats(&self) {
        self.load_stats_for(self.generation.current()).await;
    }

    async fn load_stats_for(&self, ticket: Ticket) {
        match self.backend.dashboard_stats().await {
            Ok(stats) => {
                if self.is_stale(ticket, "dashboard stats") {
                    return;
                }
                self.render_stats(&stats);
            }
            Err(e) => error!("Error loading dashboard stats: {}", e),
        }
    }

    fn render_stats(&self, stats: &DashboardStats) {
        self.screen.show_stats(StatCards::from(stats));
        self.screen
            .show_recent(ProfileListing::from(stats.recent_profiles.clone()));
        self.redraw(ChartSlot::ProfileBreakdown, ChartSpec::profile_breakdown(stats));
        self.redraw(ChartSlot::ActivityTrend, ChartSpec::activity_trend(stats));
    }

    fn redraw(&self, slot: ChartSlot, spec: ChartSpec) {
        self.charts
            .borrow_mut()
            .replace_with(slot, || self.screen.draw_chart(slot, &spec));
    }

    // -- Profiles --

    pub async fn list_profiles(&self) {
        self.load_profiles_for(self.generation.current()).await;
    }

    async fn load_profiles_for(&self, ticket: Ticket) {
        match self.backend.list_profiles().await {
            Ok(profiles) => {
                if self.is_stale(ticket, "profile list") {
                    return;
                }
                debug!("Loaded {} profiles", profiles.len());
                self.screen.show_profiles(ProfileListing::from(profiles));
            }
            Err(e) => error!("Error loading profiles: {}", e),
        }
    }

    /// Fetch a profile and show it in the detail modal. Failures are logged
    /// and leave the modal as it was.
    pub async fn open_detail(&self, name: &str) {
        let ticket = self.generation.current();
        let modal_ticket = self.modal_generation.advance();
        match self.backend.get_profile(name).await {
            Ok(detail) => {
                if self.is_stale(ticket, "profile detail") {
                    return;
                }
                if !self.modal_generation.is_current(modal_ticket) {
                    debug!("Discarding detail of '{}', modal has changed", name);
                    return;
                }
                self.set_modal(ModalState::Detail(detail));
            }
            Err(e) => error!("Error loading profile details for '{}': {}", name, e),
        }
    }

    /// Confirm, delete, then close the modal and re-list.
    pub async fn delete_profile(&self, name: &str) {
        match self.try_delete(name).await {
            Ok(()) => info!("Deleted profile '{}'", name),
            Err(DashboardError::Aborted) => debug!("Delete of '{}' cancelled", name),
            Err(e) => {
                error!("Error deleting profile '{}': {}", name, e);
                self.host.alert("Failed to delete profile");
            }
        }
    }

    async fn try_delete(&self, name: &str) -> Result<(), DashboardError> {
        if !self.host.confirm(&format!("Delete profile \"{}\"?", name)) {
            return Err(DashboardError::Aborted);
        }
        self.backend.delete_profile(name).await?;
        self.close_modal();
        self.refresh_after_write().await;
        Ok(())
    }

    async fn refresh_after_write(&self) {
        self.list_profiles().await;
        if self.view.get() == View::Overview {
            self.load_stats().await;
        }
    }

    /// No creation endpoint is available; validated drafts are rejected
    /// without a request.
    pub fn create_profile(&self, draft: &ProfileDraft) -> Result<(), DashboardError> {
        draft.validate()?;
        Err(DashboardError::NotImplemented("Profile creation"))
    }

    /// Submit the creation form. The modal stays open on failure.
    pub async fn submit_create(&self, draft: ProfileDraft) {
        match self.create_profile(&draft) {
            Ok(()) => {
                info!("Created profile '{}'", draft.name);
                self.close_modal();
                self.refresh_after_write().await;
            }
            Err(e) => {
                warn!("Profile '{}' not created: {}", draft.name, e);
                self.host.alert(&e.to_string());
            }
        }
    }

    pub fn edit_profile(&self, name: &str) {
        self.host.open(&editor_url(name));
    }

    // -- Modal --

    pub fn open_create(&self) {
        self.set_modal(ModalState::Create(ProfileDraft::default()));
    }

    pub fn close_modal(&self) {
        self.set_modal(ModalState::Closed);
    }

    fn set_modal(&self, modal: ModalState) {
        self.modal_generation.advance();
        self.screen.show_modal(&modal);
        *self.modal.borrow_mut() = modal;
    }

    // -- Progress & analytics --

    async fn load_progress_for(&self, ticket: Ticket) {
        self.screen.show_progress(ProgressPanel::Loading);

        let profiles = match self.backend.list_profiles().await {
            Ok(profiles) => profiles,
            Err(e) => {
                error!("Error loading progress: {}", e);
                return;
            }
        };

        let mut rows = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            if self.is_stale(ticket, "progress") {
                return;
            }
            match self.backend.profile_progress(&profile.name).await {
                Ok(stats) => rows.push(ProgressRow::new(profile, &stats)),
                Err(e) => warn!("Skipping progress for '{}': {}", profile.name, e),
            }
        }
        if self.is_stale(ticket, "progress") {
            return;
        }

        let panel = if rows.is_empty() {
            ProgressPanel::Empty
        } else {
            ProgressPanel::Rows(rows)
        };
        self.screen.show_progress(panel);
    }

    fn load_analytics(&self) {
        self.redraw(ChartSlot::Skills, ChartSpec::skills());
        self.redraw(ChartSlot::WeeklyProgress, ChartSpec::weekly_progress());
    }

    // -- Data management --

    pub async fn export_profiles(&self) {
        match self.try_export().await {
            Ok(count) => info!("Exported {} profiles", count),
            Err(e) => {
                error!("Error exporting profiles: {}", e);
                self.host.alert(&format!("Failed to export profiles: {}", e));
            }
        }
    }

    async fn try_export(&self) -> Result<usize, DashboardError> {
        let profiles = self.backend.list_profiles().await?;
        let json = transfer::export_json(&profiles)?;
        self.host.download(EXPORT_FILENAME, &json)?;
        Ok(profiles.len())
    }

    /// Import profiles from the text of a JSON file.
    pub async fn import_profiles(&self, text: &str) {
        match self.try_import(text).await {
            Ok(summary) => {
                info!("{}", summary);
                self.host.alert(&summary.to_string());
            }
            Err(e) => {
                error!("Error importing profiles: {}", e);
                self.host.alert(&format!("Error importing profiles: {}", e));
            }
        }
    }

    async fn try_import(&self, text: &str) -> Result<ImportSummary, DashboardError> {
        let entries = transfer::parse_import(text)?;
        let result = self.write_imports(&entries).await;
        // Earlier writes may have landed even when a later one failed
        self.refresh_after_write().await;
        result
    }

    async fn write_imports(
        &self,
        entries: &[serde_json::Value],
    ) -> Result<ImportSummary, DashboardError> {
        let mut summary = ImportSummary::default();
        for entry in entries {
            let Some(name) = transfer::importable_name(entry) else {
                summary.skipped += 1;
                continue;
            };
            match self.backend.update_profile(name, entry).await {
                Ok(_) => summary.updated += 1,
                Err(DashboardError::NotFound(_)) => {
                    warn!("Profile '{}' does not exist on the server, skipped", name);
                    summary.skipped += 1;
                }
                Err(e) => {
                    warn!("Import stopped at '{}' after {} updates", name, summary.updated);
                    return Err(e);
                }
            }
        }
        Ok(summary)
    }

    /// Delete every profile after confirmation.
    pub async fn reset_all(&self) {
        match self.try_reset().await {
            Ok(count) => {
                info!("Reset removed {} profiles", count);
                self.host.alert(&format!("Deleted {} profiles", count));
            }
            Err(DashboardError::Aborted) => debug!("Reset cancelled"),
            Err(e) => {
                error!("Error resetting data: {}", e);
                self.host.alert(&format!("Failed to reset data: {}", e));
            }
        }
    }

    async fn try_reset(&self) -> Result<usize, DashboardError> {
        if !self.host.confirm(RESET_PROMPT) {
            return Err(DashboardError::Aborted);
        }
        let profiles = self.backend.list_profiles().await?;
        let result = self.delete_all(&profiles).await;
        // Refresh even after a partial failure; some deletes may have landed
        self.close_modal();
        self.list_profiles().await;
        self.load_stats().await;
        result.map(|()| profiles.len())
    }

    async fn delete_all(&self, profiles: &[Profile]) -> Result<(), DashboardError> {
        for profile in profiles {
            self.backend.delete_profile(&profile.name).await?;
        }
        Ok(())
    }

    // -- Settings --

    pub fn dark_mode(&self) -> bool {
        self.settings.dark_mode()
    }

    pub fn apply_saved_settings(&self) {
        self.screen.apply_dark_mode(self.settings.dark_mode());
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.settings.set_dark_mode(enabled);
        self.screen.apply_dark_mode(enabled);
        debug!("Dark mode {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode(!self.dark_mode());
    }
}

impl<B, H, S, V: Screen> Drop for Dashboard<B, H, S, V> {
    fn drop(&mut self) {
        self.charts.get_mut().dispose_all();
    }
}

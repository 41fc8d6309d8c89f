//! Reactive page state the dashboard controller writes into.
//!
//! Components read these signals; the controller only ever calls the
//! `Screen` methods.

use leptos::html;
use leptos::prelude::*;
use serde::Serialize;
use tracing::warn;

use crate::charts::{ChartSlot, ChartSpec, JsChart};
use crate::modal::ModalState;
use crate::render::{ProfileListing, ProgressPanel, StatCards};
use crate::screen::Screen;
use crate::theme;
use crate::view::View;

/// Canvas elements, one per chart slot.
#[derive(Clone, Copy)]
pub struct ChartCanvases {
    pub profile: NodeRef<html::Canvas>,
    pub activity: NodeRef<html::Canvas>,
    pub skills: NodeRef<html::Canvas>,
    pub progress: NodeRef<html::Canvas>,
}

impl ChartCanvases {
    fn new() -> Self {
        Self {
            profile: NodeRef::new(),
            activity: NodeRef::new(),
            skills: NodeRef::new(),
            progress: NodeRef::new(),
        }
    }

    pub fn get(&self, slot: ChartSlot) -> NodeRef<html::Canvas> {
        match slot {
            ChartSlot::ProfileBreakdown => self.profile,
            ChartSlot::ActivityTrend => self.activity,
            ChartSlot::Skills => self.skills,
            ChartSlot::WeeklyProgress => self.progress,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Bindings {
    pub view: RwSignal<View>,
    pub stats: RwSignal<Option<StatCards>>,
    pub recent: RwSignal<ProfileListing>,
    pub profiles: RwSignal<ProfileListing>,
    pub progress: RwSignal<ProgressPanel>,
    pub modal: RwSignal<ModalState>,
    pub dark_mode: RwSignal<bool>,
    pub canvases: ChartCanvases,
}

impl Bindings {
    /// `dark_mode` is the stored preference, so the toggle paints in its
    /// saved state before the dashboard starts.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            view: RwSignal::new(View::Overview),
            stats: RwSignal::new(None),
            recent: RwSignal::new(ProfileListing::Loading),
            profiles: RwSignal::new(ProfileListing::Loading),
            progress: RwSignal::new(ProgressPanel::Idle),
            modal: RwSignal::new(ModalState::Closed),
            dark_mode: RwSignal::new(dark_mode),
            canvases: ChartCanvases::new(),
        }
    }
}

impl Screen for Bindings {
    type Chart = JsChart;

    fn show_view(&self, view: View) {
        self.view.set(view);
    }

    fn show_stats(&self, cards: StatCards) {
        self.stats.set(Some(cards));
    }

    fn show_recent(&self, listing: ProfileListing) {
        self.recent.set(listing);
    }

    fn show_profiles(&self, listing: ProfileListing) {
        self.profiles.set(listing);
    }

    fn show_progress(&self, panel: ProgressPanel) {
        self.progress.set(panel);
    }

    fn show_modal(&self, modal: &ModalState) {
        self.modal.set(modal.clone());
    }

    fn apply_dark_mode(&self, enabled: bool) {
        self.dark_mode.set(enabled);
        theme::apply_dark_mode(enabled);
    }

    fn draw_chart(&self, slot: ChartSlot, spec: &ChartSpec) -> Option<JsChart> {
        let Some(canvas) = self.canvases.get(slot).get_untracked() else {
            warn!("Canvas '{}' is not mounted", slot.canvas_id());
            return None;
        };
        let config = match spec
            .config()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not encode {} chart config: {}", slot.canvas_id(), e);
                return None;
            }
        };
        match JsChart::new(&canvas, &config) {
            Ok(chart) => Some(chart),
            Err(e) => {
                warn!("Chart.js rejected {}: {:?}", slot.canvas_id(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, Store};
    use crate::test_support::MemoryStore;

    #[test]
    fn test_seeded_with_saved_dark_mode() {
        let bindings = Bindings::new(true);
        assert!(bindings.dark_mode.get_untracked());
        assert_eq!(bindings.view.get_untracked(), View::Overview);
        assert_eq!(bindings.modal.get_untracked(), ModalState::Closed);

        assert!(!Bindings::new(false).dark_mode.get_untracked());
    }

    #[test]
    fn test_stored_preference_checks_toggle_before_start() {
        let store = MemoryStore::default();
        store.set("darkMode", "true").unwrap();
        let saved = Settings::new(store, "darkMode");

        let bindings = Bindings::new(saved.dark_mode());
        assert!(bindings.dark_mode.get_untracked());
    }
}

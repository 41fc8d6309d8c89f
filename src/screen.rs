use crate::charts::{ChartHandle, ChartSlot, ChartSpec};
use crate::modal::ModalState;
use crate::render::{ProfileListing, ProgressPanel, StatCards};
use crate::view::View;

/// Where the dashboard controller writes its results.
///
/// Implementations own the page elements; the controller never looks anything
/// up by id itself.
pub trait Screen {
    type Chart: ChartHandle;

    /// Show `view`, hide the others, mark its nav entry and set the page title.
    fn show_view(&self, view: View);

    fn show_stats(&self, cards: StatCards);

    fn show_recent(&self, listing: ProfileListing);

    fn show_profiles(&self, listing: ProfileListing);

    fn show_progress(&self, panel: ProgressPanel);

    fn show_modal(&self, modal: &ModalState);

    fn apply_dark_mode(&self, enabled: bool);

    /// Create a chart on the slot's canvas. `None` if the canvas is missing
    /// or the chart library refused the config.
    fn draw_chart(&self, slot: ChartSlot, spec: &ChartSpec) -> Option<Self::Chart>;
}

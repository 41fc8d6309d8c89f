//! Chart configurations and the registry that owns live chart instances.
//!
//! Charts are drawn by Chart.js, which the host page loads as the global
//! `Chart`. A slot's previous instance is always destroyed before the next
//! one is created on the same canvas.

use std::collections::HashMap;

use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::models::DashboardStats;

const DAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const SKILLS: [&str; 5] = [
    "Technical",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Learning",
];
const WEEKS: [&str; 4] = ["Week 1", "Week 2", "Week 3", "Week 4"];

const ACCENT: &str = "#6C63FF";
const SUCCESS: &str = "#43E97B";
const DANGER: &str = "#FF6584";
const LEGEND_TEXT: &str = "#F0F0FF";
const AXIS_TEXT: &str = "#8888AA";
const GRID: &str = "rgba(108, 99, 255, 0.1)";

/// Canvas a chart is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    ProfileBreakdown,
    ActivityTrend,
    Skills,
    WeeklyProgress,
}

impl ChartSlot {
    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartSlot::ProfileBreakdown => "profileChart",
            ChartSlot::ActivityTrend => "activityChart",
            ChartSlot::Skills => "skillsChart",
            ChartSlot::WeeklyProgress => "progressChart",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Line,
    Radar,
    Bar,
}

impl ChartKind {
    fn as_str(self) -> &'static str {
        match self {
            ChartKind::Doughnut => "doughnut",
            ChartKind::Line => "line",
            ChartKind::Radar => "radar",
            ChartKind::Bar => "bar",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<&'static str>,
    pub series_label: &'static str,
    pub values: Vec<u64>,
}

impl ChartSpec {
    /// Active / completed / pending split. "Active" is floored at 1 and
    /// "pending" is a fixed 1 so the doughnut never degenerates.
    pub fn profile_breakdown(stats: &DashboardStats) -> Self {
        let active = stats
            .total_profiles
            .saturating_sub(stats.total_completed)
            .max(1);
        Self {
            kind: ChartKind::Doughnut,
            labels: vec!["Active", "Completed", "Pending"],
            series_label: "Profiles",
            values: vec![active, stats.total_completed, 1],
        }
    }

    /// Placeholder trend: the backend exposes no per-day history, so the
    /// activity total is spread evenly over the week.
    pub fn activity_trend(stats: &DashboardStats) -> Self {
        let base = stats.total_activities / DAYS.len() as u64;
        let remainder = (stats.total_activities % DAYS.len() as u64) as usize;
        let values = (0..DAYS.len())
            .map(|day| base + u64::from(day >= DAYS.len() - remainder))
            .collect();
        Self {
            kind: ChartKind::Line,
            labels: DAYS.to_vec(),
            series_label: "Activities",
            values,
        }
    }

    pub fn skills() -> Self {
        Self {
            kind: ChartKind::Radar,
            labels: SKILLS.to_vec(),
            series_label: "Skills Score",
            values: vec![75, 65, 70, 80, 85],
        }
    }

    pub fn weekly_progress() -> Self {
        Self {
            kind: ChartKind::Bar,
            labels: WEEKS.to_vec(),
            series_label: "Progress Score",
            values: vec![20, 35, 50, 75],
        }
    }

    /// Chart.js configuration object.
    pub fn config(&self) -> serde_json::Value {
        let dataset = match self.kind {
            ChartKind::Doughnut => json!({
                "data": self.values,
                "backgroundColor": [ACCENT, SUCCESS, DANGER],
                "borderColor": "#141528",
                "borderWidth": 2,
            }),
            ChartKind::Line => json!({
                "label": self.series_label,
                "data": self.values,
                "borderColor": ACCENT,
                "backgroundColor": GRID,
                "borderWidth": 2,
                "fill": true,
                "tension": 0.4,
            }),
            ChartKind::Radar => json!({
                "label": self.series_label,
                "data": self.values,
                "borderColor": ACCENT,
                "backgroundColor": GRID,
                "borderWidth": 2,
            }),
            ChartKind::Bar => json!({
                "label": self.series_label,
                "data": self.values,
                "backgroundColor": SUCCESS,
                "borderColor": "#2BC76D",
                "borderWidth": 1,
            }),
        };

        let axis = json!({ "ticks": { "color": AXIS_TEXT }, "grid": { "color": GRID } });
        let scales = match self.kind {
            ChartKind::Doughnut => json!({}),
            ChartKind::Radar => json!({ "r": axis }),
            ChartKind::Line | ChartKind::Bar => json!({ "x": axis, "y": axis }),
        };

        json!({
            "type": self.kind.as_str(),
            "data": { "labels": self.labels, "datasets": [dataset] },
            "options": {
                "responsive": true,
                "maintainAspectRatio": true,
                "plugins": { "legend": { "labels": { "color": LEGEND_TEXT } } },
                "scales": scales,
            },
        })
    }
}

/// A live chart that must be disposed before its canvas is reused.
pub trait ChartHandle {
    fn dispose(&self);
}

/// Live charts keyed by slot.
pub struct ChartRegistry<C: ChartHandle> {
    slots: HashMap<ChartSlot, C>,
}

impl<C: ChartHandle> Default for ChartRegistry<C> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<C: ChartHandle> ChartRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispose the chart in `slot` (if any), then store whatever `draw` creates.
    pub fn replace_with(&mut self, slot: ChartSlot, draw: impl FnOnce() -> Option<C>) {
        if let Some(previous) = self.slots.remove(&slot) {
            previous.dispose();
        }
        if let Some(chart) = draw() {
            self.slots.insert(slot, chart);
        }
    }

    pub fn dispose_all(&mut self) {
        for (_, chart) in self.slots.drain() {
            chart.dispose();
        }
    }

    pub fn contains(&self, slot: ChartSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

// -- Chart.js bindings --

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    pub type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    pub fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

impl ChartHandle for JsChart {
    fn dispose(&self) {
        self.destroy();
    }
}

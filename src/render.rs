//! View models derived from backend data.
//!
//! Nothing here touches the page; the screen bindings turn these values into
//! markup.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{DashboardStats, Profile, ProgressStats};

/// Completion percentage, 0 when nothing has been logged yet.
pub fn completion_rate(completed: u64, activities: u64) -> u32 {
    if activities == 0 {
        return 0;
    }
    (completed as f64 / activities as f64 * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCards {
    pub total_profiles: u64,
    pub total_activities: u64,
    pub total_completed: u64,
    pub completion_rate: u32,
}

impl StatCards {
    pub fn rate_label(&self) -> String {
        format!("{}%", self.completion_rate)
    }
}

impl From<&DashboardStats> for StatCards {
    fn from(stats: &DashboardStats) -> Self {
        Self {
            total_profiles: stats.total_profiles,
            total_activities: stats.total_activities,
            total_completed: stats.total_completed,
            completion_rate: completion_rate(stats.total_completed, stats.total_activities),
        }
    }
}

/// Content of a profile container: a placeholder or one card per profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProfileListing {
    #[default]
    Loading,
    Empty,
    Cards(Vec<Profile>),
}

impl From<Vec<Profile>> for ProfileListing {
    fn from(profiles: Vec<Profile>) -> Self {
        if profiles.is_empty() {
            ProfileListing::Empty
        } else {
            ProfileListing::Cards(profiles)
        }
    }
}

impl ProfileListing {
    pub fn card_count(&self) -> usize {
        match self {
            ProfileListing::Cards(profiles) => profiles.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRow {
    pub name: String,
    pub career_field: String,
    pub activities: u64,
    pub completed: u64,
    pub last_activity: Option<String>,
}

impl ProgressRow {
    pub fn new(profile: &Profile, stats: &ProgressStats) -> Self {
        Self {
            name: profile.name.clone(),
            career_field: profile.career_field.clone(),
            activities: stats.total_activities,
            completed: stats.completed(),
            last_activity: stats.last_activity().map(format_date),
        }
    }

    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.completed, self.activities)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgressPanel {
    #[default]
    Idle,
    Loading,
    Empty,
    Rows(Vec<ProgressRow>),
}

/// Render a backend timestamp as a calendar date. Accepts RFC 3339 and the
/// offset-less ISO form the backend writes; anything else is shown as-is.
pub fn format_date(raw: &str) -> String {
    const DATE_FORMAT: &str = "%b %-d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return dt.format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Activity type the backend logs when a roadmap milestone is finished.
pub const MILESTONE_COMPLETED: &str = "milestone_completed";

/// The `{ "data": ... }` wrapper every backend response uses.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body returned alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: String,
}

// -- Profiles --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    /// Any value written by another client, kept verbatim.
    Other(String),
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Other(s) => s,
        }
    }
}

impl Default for ExperienceLevel {
    fn default() -> Self {
        ExperienceLevel::Beginner
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => ExperienceLevel::Beginner,
            "Intermediate" => ExperienceLevel::Intermediate,
            "Advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Other(value),
        }
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A career profile as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub career_field: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Roadmaps, skills and anything else the assistant stored on the profile.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Which assistant outputs exist for a profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileFlags {
    #[serde(default)]
    pub has_roadmap: bool,
    #[serde(default)]
    pub has_skills: bool,
    #[serde(default)]
    pub has_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProfileDetail {
    pub profile: Profile,
    #[serde(default)]
    pub stats: ProfileFlags,
    #[serde(default)]
    pub progress: Option<ProgressStats>,
}

// -- Dashboard stats --

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardStats {
    pub total_profiles: u64,
    pub total_activities: u64,
    pub total_completed: u64,
    #[serde(default)]
    pub recent_profiles: Vec<Profile>,
}

// -- Progress --

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProgressStats {
    #[serde(default)]
    pub total_activities: u64,
    #[serde(default)]
    pub activity_types: BTreeMap<String, u64>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityEntry>,
}

impl ProgressStats {
    pub fn completed(&self) -> u64 {
        self.activity_types
            .get(MILESTONE_COMPLETED)
            .copied()
            .unwrap_or(0)
    }

    pub fn last_activity(&self) -> Option<&str> {
        self.recent_activity
            .last()
            .and_then(|entry| entry.timestamp.as_deref())
    }
}

/// Body of `GET /profiles/{name}/progress`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressReport {
    #[serde(default)]
    pub stats: ProgressStats,
}

// -- Profile creation form --

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub career_field: String,
    pub experience_level: ExperienceLevel,
}

impl ProfileDraft {
    /// Required-field check; the only client-side validation performed.
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.name.trim().is_empty() {
            return Err(DashboardError::Validation(
                "Profile name is required".to_string(),
            ));
        }
        if self.career_field.trim().is_empty() {
            return Err(DashboardError::Validation(
                "Career field is required".to_string(),
            ));
        }
        Ok(())
    }
}

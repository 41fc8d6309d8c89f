/// Top-level dashboard views. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Overview,
    Profiles,
    Progress,
    Analytics,
    Settings,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Overview,
        View::Profiles,
        View::Progress,
        View::Analytics,
        View::Settings,
    ];

    pub fn from_id(id: &str) -> Option<View> {
        View::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Identifier used in element ids (`{id}-view`) and nav `data-view` attributes.
    pub fn id(self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Profiles => "profiles",
            View::Progress => "progress",
            View::Analytics => "analytics",
            View::Settings => "settings",
        }
    }

    pub fn title(self) -> &'static str {
        page_title(self.id())
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Profiles => "Profiles",
            View::Progress => "Progress",
            View::Analytics => "Analytics",
            View::Settings => "Settings",
        }
    }
}

/// Page title for a view id, "Dashboard" for anything unknown.
pub fn page_title(id: &str) -> &'static str {
    match id {
        "overview" => "Overview",
        "profiles" => "My Profiles",
        "progress" => "Your Progress",
        "analytics" => "Career Analytics",
        "settings" => "Settings",
        _ => "Dashboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_resolve_back() {
        for view in View::ALL {
            assert_eq!(View::from_id(view.id()), Some(view));
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(View::from_id("reports"), None);
        assert_eq!(View::from_id(""), None);
    }

    #[test]
    fn test_titles() {
        assert_eq!(View::Profiles.title(), "My Profiles");
        assert_eq!(View::Analytics.title(), "Career Analytics");
        assert_eq!(page_title("reports"), "Dashboard");
    }
}

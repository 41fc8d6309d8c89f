use leptos::prelude::*;

/// Whether an assistant output exists for a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl From<bool> for CheckStatus {
    fn from(present: bool) -> Self {
        if present {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }
}

#[component]
pub fn StatusBadge(
    /// The label text, e.g. "Roadmap"
    #[prop(into)]
    label: String,
    #[prop(into)]
    status: CheckStatus,
) -> impl IntoView {
    let (icon, class) = match status {
        CheckStatus::Pass => ("\u{2713}", "status-badge status-pass"),
        CheckStatus::Fail => ("\u{2717}", "status-badge status-fail"),
    };

    view! {
        <li class="status-item">
            <span class=class>{icon}</span>
            <span class="status-name">{label}</span>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_flag() {
        assert_eq!(CheckStatus::from(true), CheckStatus::Pass);
        assert_eq!(CheckStatus::from(false), CheckStatus::Fail);
    }
}

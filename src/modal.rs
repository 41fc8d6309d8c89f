use crate::models::{ProfileDetail, ProfileDraft};

/// The single reusable profile dialog.
///
/// Opening either mode replaces whatever is shown; there is no nesting.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Detail(ProfileDetail),
    Create(ProfileDraft),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalState::Closed => "",
            ModalState::Detail(_) => "Profile Details",
            ModalState::Create(_) => "New Profile",
        }
    }

    /// Name of the profile shown in detail mode.
    pub fn detail_name(&self) -> Option<&str> {
        match self {
            ModalState::Detail(detail) => Some(detail.profile.name.as_str()),
            _ => None,
        }
    }
}

/// URL of the external profile editor.
pub fn editor_url(name: &str) -> String {
    let mut url = String::from("/streamlit-app?profile=");
    url.extend(url::form_urlencoded::byte_serialize(name.as_bytes()));
    url
}

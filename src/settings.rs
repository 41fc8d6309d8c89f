use tracing::warn;

use crate::error::DashboardError;

/// String key/value persistence.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError>;
}

/// `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Result<web_sys::Storage, DashboardError> {
        web_sys::window()
            .ok_or_else(|| DashboardError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|_| DashboardError::Storage("local storage is blocked".to_string()))?
            .ok_or_else(|| DashboardError::Storage("local storage unavailable".to_string()))
    }
}

impl Store for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DashboardError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| DashboardError::Storage(format!("{:?}", e)))
    }
}

/// The persisted dark-mode flag.
pub struct Settings<S> {
    store: S,
    key: String,
}

impl<S: Store> Settings<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Only the literal `"true"` enables dark mode.
    pub fn dark_mode(&self) -> bool {
        self.store.get(&self.key).as_deref() == Some("true")
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        let value = if enabled { "true" } else { "false" };
        if let Err(e) = self.store.set(&self.key, value) {
            warn!("Failed to persist dark mode preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let settings = Settings::new(MemoryStore::default(), "darkMode");
        assert!(!settings.dark_mode());
    }

    #[test]
    fn test_persists_across_reload() {
        let store = MemoryStore::default();
        let settings = Settings::new(store.clone(), "darkMode");
        settings.set_dark_mode(true);
        assert_eq!(store.get("darkMode").as_deref(), Some("true"));

        let reloaded = Settings::new(store.clone(), "darkMode");
        assert!(reloaded.dark_mode());

        reloaded.set_dark_mode(false);
        assert_eq!(store.get("darkMode").as_deref(), Some("false"));
        assert!(!Settings::new(store, "darkMode").dark_mode());
    }

    #[test]
    fn test_only_literal_true_enables() {
        let store = MemoryStore::default();
        for value in ["TRUE", "1", "yes", ""] {
            store.set("darkMode", value).unwrap();
            assert!(!Settings::new(store.clone(), "darkMode").dark_mode(), "{value}");
        }
    }
}

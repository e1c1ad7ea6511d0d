//! Currently selected view.
//!
//! A deliberately tiny slice of state, kept separate from the session so the
//! two cannot grow accidental coupling. Any string is accepted as a view
//! identifier; mapping it to something renderable is the consumer's problem.

use std::sync::{Arc, PoisonError, RwLock};

/// View identifier the store starts on when none is configured.
pub const DEFAULT_VIEW: &str = "DashboardComponent";

/// Cloneable handle to the navigation slice.
#[derive(Debug, Clone)]
pub struct NavigationStore {
    current_view: Arc<RwLock<String>>,
}

impl NavigationStore {
    #[must_use]
    pub fn new(initial_view: impl Into<String>) -> Self {
        Self {
            current_view: Arc::new(RwLock::new(initial_view.into())),
        }
    }

    #[must_use]
    pub fn current_view(&self) -> String {
        self.current_view
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_current_view(&self, view: impl Into<String>) {
        *self
            .current_view
            .write()
            .unwrap_or_else(PoisonError::into_inner) = view.into();
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_default_view() {
        assert_eq!(NavigationStore::default().current_view(), DEFAULT_VIEW);
    }

    #[test]
    fn setter_accepts_any_string() {
        let navigation = NavigationStore::default();
        navigation.set_current_view("SettingsComponent");
        assert_eq!(navigation.current_view(), "SettingsComponent");
        navigation.set_current_view("");
        assert_eq!(navigation.current_view(), "");
    }
}

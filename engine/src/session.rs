//! Authenticated-session state.
//!
//! The store holds the authentication flag, the username, and the opaque
//! token / user id handed back by the external auth service. It validates
//! nothing: token issuance and checking live elsewhere, this is only the
//! in-memory record. Callers that set `authenticated` to true are expected
//! to pair it with a non-empty username.
//!
//! Handles are cheap clones of one shared state, so every collaborator that
//! needs the session (guard, logout, views) is handed its own clone instead
//! of reaching for an ambient global.

use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
struct SessionState {
    authenticated: bool,
    username: String,
    token: Option<String>,
    user_id: Option<String>,
}

/// Cloneable handle to the process-wide session record.
///
/// Getters are pure reads; mutations are synchronous writes that run to
/// completion before any other task on the loop can observe them.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().authenticated
    }

    #[must_use]
    pub fn username(&self) -> String {
        self.read().username.clone()
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.read().user_id.clone()
    }

    pub fn set_authenticated(&self, authenticated: bool) {
        self.write().authenticated = authenticated;
    }

    pub fn set_username(&self, username: impl Into<String>) {
        self.write().username = username.into();
    }

    pub fn set_token(&self, token: Option<String>) {
        self.write().token = token;
    }

    pub fn set_user_id(&self, user_id: Option<String>) {
        self.write().user_id = user_id;
    }

    /// Reset every field to its initial value under one write lock, so no
    /// reader can observe a half-cleared session.
    pub fn clear(&self) {
        *self.write() = SessionState::default();
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out() {
        let session = SessionStore::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn last_write_wins() {
        let session = SessionStore::new();
        session.set_authenticated(true);
        session.set_authenticated(false);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let session = SessionStore::new();
        let handle = session.clone();
        session.set_username("admin");
        session.set_token(Some("t0k3n".to_owned()));
        assert_eq!(handle.username(), "admin");
        assert_eq!(handle.token().as_deref(), Some("t0k3n"));
    }

    #[test]
    fn clear_resets_every_field() {
        let session = SessionStore::new();
        session.set_authenticated(true);
        session.set_username("admin");
        session.set_token(Some("t0k3n".to_owned()));
        session.set_user_id(Some("42".to_owned()));

        session.clear();

        assert!(!session.is_authenticated());
        assert_eq!(session.username(), "");
        assert_eq!(session.token(), None);
        assert_eq!(session.user_id(), None);
    }
}

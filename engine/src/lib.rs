//! Core shell engine for Vestibule.
//!
//! This crate holds the parts of the shell with real design content: the
//! injectable session and navigation stores, the pre-navigation route guard,
//! the logout coordinator, and the alert manager. Views, stylesheets, and
//! the actual router/document are external collaborators reached through the
//! host boundary traits ([`AlertHost`], [`Router`]).
//!
//! State never persists: everything lives in memory and dies with the
//! process. The authenticating backend is the source of truth; this is only
//! the page session's record.

mod alerts;
mod guard;
mod host;
mod logout;
mod memory;
mod navigation;
mod routes;
mod session;


pub use alerts::AlertManager;
pub use guard::RouteGuard;
pub use host::{ALERT_CONTAINER_ID, AlertHost, Router};
pub use logout::logout;
pub use memory::{MemoryHost, MemoryRouter};
pub use navigation::{DEFAULT_VIEW, NavigationStore};
pub use routes::RouteTable;
pub use session::SessionStore;

// Config types - passed in from caller
pub use vestibule_config::{ConfigError, ShellConfig, VestibuleConfig};
pub use vestibule_types::{
    AlertId, GuardDecision, GuardPolicy, NotifyOptions, RouteDescriptor, RouteName, Severity,
};

use std::sync::Arc;
use std::time::Duration;

/// Wired-up shell core: one session, one navigation slice, one alert
/// manager, and the guard the embedding router consults before navigating.
#[derive(Debug, Clone)]
pub struct Shell {
    session: SessionStore,
    navigation: NavigationStore,
    alerts: AlertManager,
    guard: RouteGuard,
    entry_route: RouteName,
}

impl Shell {
    /// Assemble the core from configuration and a render host.
    ///
    /// The router is not captured here: it is passed to [`Shell::logout`]
    /// per call, and it consults [`Shell::guard`] itself before completing
    /// each navigation.
    #[must_use]
    pub fn new(config: &ShellConfig, host: Arc<dyn AlertHost>) -> Self {
        let session = SessionStore::new();
        let navigation = NavigationStore::new(config.default_view.clone());
        let alerts = AlertManager::new(host, Duration::from_millis(config.alert_ttl_ms));
        let entry_route = RouteName::from(config.entry_route.clone());
        let guard = RouteGuard::new(session.clone(), config.guard_policy, entry_route.clone());
        Self {
            session,
            navigation,
            alerts,
            guard,
            entry_route,
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationStore {
        &self.navigation
    }

    #[must_use]
    pub fn alerts(&self) -> &AlertManager {
        &self.alerts
    }

    #[must_use]
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    #[must_use]
    pub fn entry_route(&self) -> &RouteName {
        &self.entry_route
    }

    /// Clear the session and navigate to the entry route. See the free
    /// [`logout()`](crate::logout) function for ordering and failure
    /// semantics.
    pub fn logout(&self, router: &dyn Router) {
        logout::logout(&self.session, router, &self.entry_route);
    }
}

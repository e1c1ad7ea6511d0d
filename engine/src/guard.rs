//! Pre-navigation route guard.

use vestibule_types::{GuardDecision, GuardPolicy, RouteName};

use crate::session::SessionStore;

/// Decides, before each navigation, whether an unauthenticated visitor gets
/// redirected to the public entry route.
///
/// This is a pure decision over session state and the requested destination.
/// The guard performs no navigation itself; the router collaborator that
/// registered it acts on the returned [`GuardDecision`].
#[derive(Debug, Clone)]
pub struct RouteGuard {
    session: SessionStore,
    policy: GuardPolicy,
    entry_route: RouteName,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: SessionStore, policy: GuardPolicy, entry_route: RouteName) -> Self {
        Self {
            session,
            policy,
            entry_route,
        }
    }

    #[must_use]
    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }

    /// Evaluate a navigation attempt.
    ///
    /// The source route is accepted for parity with router hook signatures
    /// but does not influence the decision.
    #[must_use]
    pub fn check(&self, target: &RouteName, _current: &RouteName) -> GuardDecision {
        match self.policy {
            GuardPolicy::AllowAll => GuardDecision::Allow,
            GuardPolicy::Enforce => {
                if !self.session.is_authenticated() && *target != self.entry_route {
                    GuardDecision::Redirect(self.entry_route.clone())
                } else {
                    GuardDecision::Allow
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guard(policy: GuardPolicy, session: &SessionStore) -> RouteGuard {
        RouteGuard::new(session.clone(), policy, RouteName::from("home"))
    }

    #[test]
    fn enforce_redirects_unauthenticated_to_entry() {
        let session = SessionStore::new();
        let guard = guard(GuardPolicy::Enforce, &session);
        assert_eq!(
            guard.check(&RouteName::from("dashboard"), &RouteName::from("home")),
            GuardDecision::Redirect(RouteName::from("home"))
        );
    }

    #[test]
    fn enforce_allows_entry_route_itself() {
        let session = SessionStore::new();
        let guard = guard(GuardPolicy::Enforce, &session);
        assert_eq!(
            guard.check(&RouteName::from("home"), &RouteName::from("dashboard")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn enforce_allows_authenticated_anywhere() {
        let session = SessionStore::new();
        session.set_authenticated(true);
        session.set_username("admin");
        let guard = guard(GuardPolicy::Enforce, &session);
        assert_eq!(
            guard.check(&RouteName::from("dashboard"), &RouteName::from("home")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn allow_all_never_redirects() {
        let session = SessionStore::new();
        let guard = guard(GuardPolicy::AllowAll, &session);
        assert_eq!(
            guard.check(&RouteName::from("dashboard"), &RouteName::from("home")),
            GuardDecision::Allow
        );
        assert_eq!(
            guard.check(&RouteName::from("not-found"), &RouteName::from("home")),
            GuardDecision::Allow
        );
    }

    #[test]
    fn decision_tracks_session_changes() {
        let session = SessionStore::new();
        let guard = guard(GuardPolicy::Enforce, &session);
        let dashboard = RouteName::from("dashboard");
        let home = RouteName::from("home");

        assert!(matches!(
            guard.check(&dashboard, &home),
            GuardDecision::Redirect(_)
        ));
        session.set_authenticated(true);
        assert_eq!(guard.check(&dashboard, &home), GuardDecision::Allow);
        session.set_authenticated(false);
        assert!(matches!(
            guard.check(&dashboard, &home),
            GuardDecision::Redirect(_)
        ));
    }
}

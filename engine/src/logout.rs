//! Logout coordination.

use tracing::warn;

use vestibule_types::RouteName;

use crate::host::Router;
use crate::session::SessionStore;

/// Clear the session and send the visitor back to the entry route.
///
/// The session reset happens first and under a single write lock, so no
/// observer sees a half-cleared session. Navigation failure is deliberately
/// not rolled back: a logged-out session stranded on an unreachable route is
/// the lesser failure compared to resurrecting credentials.
pub fn logout(session: &SessionStore, router: &dyn Router, entry_route: &RouteName) {
    session.clear();

    match router.resolve_route_by_name(entry_route) {
        Some(route) => router.push_to(&route),
        None => {
            warn!(
                route = %entry_route,
                "entry route missing from route table; session cleared, navigation skipped"
            );
        }
    }
}

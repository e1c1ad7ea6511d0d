//! Boundaries to the surrounding page: render container and router.
//!
//! The engine never touches a document or a route table directly. Embedders
//! hand it capabilities behind these traits; tests and the headless driver
//! use the in-memory implementations from [`crate::memory`].

use vestibule_types::{AlertId, RouteDescriptor, RouteName};

/// Well-known element id of the alert container in the host document.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// Render and dismissal capability for alerts.
///
/// Alert display is best-effort, never business-critical: implementations
/// must not panic when the container is missing, they report it through the
/// `append` return value instead.
pub trait AlertHost: Send + Sync {
    /// Append a rendered alert fragment under the container.
    ///
    /// Returns false when the container is absent from the document, in
    /// which case nothing was appended.
    fn append(&self, id: &AlertId, markup: &str) -> bool;

    /// Whether an element with this id is still present.
    fn contains(&self, id: &AlertId) -> bool;

    /// Close the alert through the toolkit, so exit animations and cleanup
    /// listeners run, rather than deleting the node outright. Must be a
    /// no-op when the element is already gone.
    fn dismiss(&self, id: &AlertId);
}

/// Navigation capability consumed by the logout coordinator.
pub trait Router: Send + Sync {
    /// Navigate to a resolved destination.
    fn push_to(&self, route: &RouteDescriptor);

    /// Look a destination up by its registered name.
    fn resolve_route_by_name(&self, name: &RouteName) -> Option<RouteDescriptor>;
}

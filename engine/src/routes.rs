//! Named route registry.

use vestibule_types::{RouteDescriptor, RouteName};

/// Ordered list of named routes. Resolution is by name only; paths are
/// opaque to the engine and forwarded to the router untouched.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference route set: public entry, the authenticated dashboard,
    /// and a catch-all.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.register("home", "/");
        table.register("dashboard", "/dashboard");
        table.register("not-found", "/:pathMatch(.*)*");
        table
    }

    /// Register a route. A later registration under the same name shadows
    /// the earlier one.
    pub fn register(&mut self, name: impl Into<RouteName>, path: impl Into<String>) {
        self.routes.insert(0, RouteDescriptor::new(name, path));
    }

    #[must_use]
    pub fn resolve(&self, name: &RouteName) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|route| &route.name == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_entry_and_dashboard() {
        let table = RouteTable::with_defaults();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.resolve(&RouteName::from("home")).unwrap().path,
            "/"
        );
        assert_eq!(
            table.resolve(&RouteName::from("dashboard")).unwrap().path,
            "/dashboard"
        );
        assert!(table.resolve(&RouteName::from("settings")).is_none());
    }

    #[test]
    fn later_registration_shadows_earlier() {
        let mut table = RouteTable::with_defaults();
        table.register("home", "/welcome");
        assert_eq!(
            table.resolve(&RouteName::from("home")).unwrap().path,
            "/welcome"
        );
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a route as registered in the route table.
///
/// Routes are addressed by name rather than path: the guard and the logout
/// coordinator never inspect paths, only names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteName(String);

impl RouteName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A resolvable destination: the name it is registered under plus the path
/// the router collaborator navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    pub name: RouteName,
    pub path: String,
}

impl RouteDescriptor {
    pub fn new(name: impl Into<RouteName>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Outcome of a pre-navigation guard check. The router collaborator performs
/// the actual redirect; the guard only decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Send the visitor to the named route instead.
    Redirect(RouteName),
}

/// Whether the route guard actually enforces authentication.
///
/// The reference implementation shipped with the enforcing hook live, but the
/// disabled variant existed alongside it; both are kept selectable so the
/// deployed policy is a configuration decision rather than a code edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuardPolicy {
    /// Redirect unauthenticated visitors to the entry route.
    #[default]
    Enforce,
    /// Always allow, regardless of session state.
    AllowAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_name_equality_is_by_value() {
        assert_eq!(RouteName::from("home"), RouteName::new("home"));
        assert_ne!(RouteName::from("home"), RouteName::from("dashboard"));
    }

    #[test]
    fn guard_policy_defaults_to_enforce() {
        assert_eq!(GuardPolicy::default(), GuardPolicy::Enforce);
    }

    #[test]
    fn guard_policy_deserializes_kebab_case() {
        let policy: GuardPolicy = serde_json::from_str("\"allow-all\"").unwrap();
        assert_eq!(policy, GuardPolicy::AllowAll);
        let policy: GuardPolicy = serde_json::from_str("\"enforce\"").unwrap();
        assert_eq!(policy, GuardPolicy::Enforce);
    }
}

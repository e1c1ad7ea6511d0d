use std::fmt;

use uuid::Uuid;

/// Unique handle for a rendered alert fragment.
///
/// The id doubles as the element id in the host document, so it carries an
/// `alert-` prefix to keep it out of the way of application element ids. It
/// is the only handle used to locate the fragment later, which is why
/// generation must come from a collision-resistant source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct AlertId(String);

impl AlertId {
    /// Draw a fresh identifier from the OS random source.
    ///
    /// UUID v4 carries 122 random bits, so collisions within a page session
    /// are negligible. Time-based or counter-based ids are not acceptable
    /// here: two alerts raised in the same event-loop turn would collide.
    #[must_use]
    pub fn random() -> Self {
        Self(format!("alert-{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

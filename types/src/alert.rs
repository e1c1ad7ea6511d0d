use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual severity of an alert, mapped onto the toolkit's contextual classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// The class suffix the markup builder appends to `alert-`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-alert behavior knobs. Both default to true, matching the reference
/// markup: a close button is rendered and the entry self-removes after the
/// configured delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Schedule a one-shot expiry that closes the alert after the TTL.
    pub auto_expire: bool,
    /// Render a manual close control. When false the entry persists until
    /// auto-expiry or programmatic dismissal.
    pub dismissible: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            auto_expire: true,
            dismissible: true,
        }
    }
}

impl NotifyOptions {
    #[must_use]
    pub const fn auto_expire(mut self, auto_expire: bool) -> Self {
        self.auto_expire = auto_expire;
        self
    }

    #[must_use]
    pub const fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_expire_and_dismiss() {
        let options = NotifyOptions::default();
        assert!(options.auto_expire);
        assert!(options.dismissible);
    }

    #[test]
    fn builders_override_defaults() {
        let options = NotifyOptions::default().auto_expire(false).dismissible(false);
        assert!(!options.auto_expire);
        assert!(!options.dismissible);
    }

    #[test]
    fn severity_maps_to_class_suffix() {
        assert_eq!(Severity::Danger.as_str(), "danger");
        assert_eq!(Severity::Success.to_string(), "success");
    }

    #[test]
    fn severity_serde_is_lowercase() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}

//! Configuration loading for Vestibule.
//!
//! A single optional TOML file tunes the shell: guard policy, alert TTL, and
//! the entry route / default view identifiers. A missing file is not an error
//! (every field has a shipped default); an unreadable or unparsable file is.

use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

use vestibule_types::GuardPolicy;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "VESTIBULE_CONFIG";

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "vestibule.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Top-level config file shape.
///
/// ```toml
/// [shell]
/// guard_policy = "enforce"
/// alert_ttl_ms = 10000
/// entry_route = "home"
/// default_view = "DashboardComponent"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct VestibuleConfig {
    pub shell: Option<ShellConfig>,
}

/// Tunables for the shell core.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    /// Whether the route guard redirects unauthenticated visitors.
    #[serde(default)]
    pub guard_policy: GuardPolicy,
    /// How long an auto-expiring alert stays up, in milliseconds.
    #[serde(default = "default_alert_ttl_ms")]
    pub alert_ttl_ms: u64,
    /// Name of the public entry route the guard and logout redirect to.
    #[serde(default = "default_entry_route")]
    pub entry_route: String,
    /// View identifier the navigation store starts on.
    #[serde(default = "default_view")]
    pub default_view: String,
}

fn default_alert_ttl_ms() -> u64 {
    10_000
}

fn default_entry_route() -> String {
    "home".to_owned()
}

fn default_view() -> String {
    "DashboardComponent".to_owned()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            guard_policy: GuardPolicy::default(),
            alert_ttl_ms: default_alert_ttl_ms(),
            entry_route: default_entry_route(),
            default_view: default_view(),
        }
    }
}

fn config_path() -> PathBuf {
    env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_FILENAME))
}

impl VestibuleConfig {
    /// Load from `$VESTIBULE_CONFIG` or `./vestibule.toml`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path. Absent file yields `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// The `[shell]` section, or shipped defaults when the section (or the
    /// whole file) is absent.
    #[must_use]
    pub fn shell_or_default(&self) -> ShellConfig {
        self.shell.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let shell = ShellConfig::default();
        assert_eq!(shell.guard_policy, GuardPolicy::Enforce);
        assert_eq!(shell.alert_ttl_ms, 10_000);
        assert_eq!(shell.entry_route, "home");
        assert_eq!(shell.default_view, "DashboardComponent");
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = VestibuleConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn partial_section_fills_in_defaults() {
        let config: VestibuleConfig = toml::from_str(
            r#"
            [shell]
            guard_policy = "allow-all"
            "#,
        )
        .unwrap();
        let shell = config.shell_or_default();
        assert_eq!(shell.guard_policy, GuardPolicy::AllowAll);
        assert_eq!(shell.alert_ttl_ms, 10_000);
        assert_eq!(shell.entry_route, "home");
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config: VestibuleConfig = toml::from_str("").unwrap();
        assert!(config.shell.is_none());
        assert_eq!(config.shell_or_default().alert_ttl_ms, 10_000);
    }

    #[test]
    fn unparsable_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vestibule.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[shell").unwrap();

        let err = VestibuleConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn full_section_parses() {
        let config: VestibuleConfig = toml::from_str(
            r#"
            [shell]
            guard_policy = "enforce"
            alert_ttl_ms = 2500
            entry_route = "login"
            default_view = "HomeComponent"
            "#,
        )
        .unwrap();
        let shell = config.shell_or_default();
        assert_eq!(shell.alert_ttl_ms, 2500);
        assert_eq!(shell.entry_route, "login");
        assert_eq!(shell.default_view, "HomeComponent");
    }
}

//! Configuration for the userdeck TUI.
//!
//! TOML file + `USERDECK_*` environment overrides, layered over built-in
//! defaults with figment, and translation to `userdeck_core::SourceConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use userdeck_core::SourceConfig;
use userdeck_core::config::DEFAULT_BASE_URL;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Where the users collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// API root; `/users` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Animation tick interval.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Redraw interval.
    #[serde(default = "default_frame_rate_ms")]
    pub frame_rate_ms: u64,

    /// Capture the mouse for click-to-select / click-to-delete.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            frame_rate_ms: default_frame_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    250
}
fn default_frame_rate_ms() -> u64 {
    33
}
fn default_mouse() -> bool {
    true
}

impl UiSettings {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(1))
    }
}

impl Config {
    /// Validate the API section and build the core source config.
    pub fn source_config(&self) -> Result<SourceConfig, ConfigError> {
        let base_url: url::Url =
            self.api
                .base_url
                .parse()
                .map_err(|e| ConfigError::Validation {
                    field: "api.base_url".into(),
                    reason: format!("invalid URL '{}': {e}", self.api.base_url),
                })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.api.base_url),
            });
        }

        let mut source = SourceConfig::new(base_url);
        source.timeout = self.api.timeout_secs.map(Duration::from_secs);
        source.user_agent.clone_from(&self.api.user_agent);
        Ok(source)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "userdeck", "userdeck").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("userdeck");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the Config from `path` + environment. A missing file is not an
/// error; defaults fill every gap.
///
/// Environment keys use `__` between sections: `USERDECK_API__BASE_URL`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("USERDECK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parents.
pub fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.api.base_url, DEFAULT_BASE_URL);
        assert!(cfg.ui.mouse);
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"http://localhost:3000\"\ntimeout_secs = 5\n\n[ui]\nmouse = false\n",
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:3000");
        assert_eq!(cfg.api.timeout_secs, Some(5));
        assert!(!cfg.ui.mouse);
        assert_eq!(cfg.ui.tick_rate_ms, 250);

        let source = cfg.source_config().unwrap();
        assert_eq!(source.timeout, Some(Duration::from_secs(5)));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut cfg = Config::default();
        cfg.api.user_agent = Some("custom-agent".into());
        cfg.ui.frame_rate_ms = 50;

        save_config(&cfg, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let mut cfg = Config::default();
        cfg.api.base_url = "not a url".into();
        assert!(matches!(
            cfg.source_config(),
            Err(ConfigError::Validation { .. })
        ));

        cfg.api.base_url = "ftp://example.com".into();
        assert!(matches!(
            cfg.source_config(),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn default_source_has_no_timeout() {
        let source = Config::default().source_config().unwrap();
        assert!(source.timeout.is_none());
        assert_eq!(
            source.base_url.as_str(),
            "https://jsonplaceholder.typicode.com/"
        );
    }
}

// SPDX-License-Identifier: Apache-2.0

//! Configuration management for reposcout.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `REPOSCOUT_`)
//! 2. Config file: `~/.config/reposcout/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Point at a GitHub Enterprise Server instance
//! REPOSCOUT_GITHUB__API_BASE=https://ghe.example.com/api/v3 reposcout list
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ReposcoutError;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Largest page size the repository listing endpoint accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// GitHub API settings.
    pub github: GitHubConfig,
    /// UI preferences.
    pub ui: UiConfig,
}

/// GitHub API settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL, without trailing slash.
    pub api_base: String,
    /// Page size requested from `/user/repos` (clamped to 1..=100).
    pub per_page: u8,
    /// Upper bound on pages followed before the fetch is aborted.
    pub max_pages: usize,
    /// Request timeout in seconds. `None` keeps the HTTP client default.
    pub api_timeout_seconds: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            per_page: MAX_PER_PAGE,
            max_pages: 1000,
            api_timeout_seconds: None,
        }
    }
}

/// UI preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable colored output.
    pub color: bool,
    /// Show a spinner while repositories are loading.
    pub progress_bars: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress_bars: true,
        }
    }
}

/// Returns the reposcout configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/reposcout`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("reposcout");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("reposcout")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `REPOSCOUT_` and double underscore
/// for nested keys (e.g., `REPOSCOUT_GITHUB__MAX_PAGES`).
///
/// # Errors
///
/// Returns `ReposcoutError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, ReposcoutError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("REPOSCOUT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
        }

        let config = load_config().expect("should load with defaults");

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.github.api_base, DEFAULT_API_BASE);
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.max_pages, 1000);
        assert!(config.github.api_timeout_seconds.is_none());
        assert!(config.ui.color);
        assert!(config.ui.progress_bars);
    }

    #[test]
    #[serial]
    fn test_env_overrides_nested_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", dir.path());
            std::env::set_var("REPOSCOUT_GITHUB__MAX_PAGES", "7");
        }

        let config = load_config().expect("should load with env override");

        unsafe {
            std::env::remove_var("REPOSCOUT_GITHUB__MAX_PAGES");
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(config.github.max_pages, 7);
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/xdg-test");
        }

        let dir = config_dir();

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        assert_eq!(dir, PathBuf::from("/tmp/xdg-test/reposcout"));
    }

    #[test]
    #[serial]
    fn test_config_file_path() {
        let path = config_file_path();
        assert!(path.ends_with("reposcout/config.toml"));
    }

    #[test]
    fn test_config_from_toml() {
        let config_str = r#"
[github]
api_base = "https://ghe.example.com/api/v3"
max_pages = 5
api_timeout_seconds = 15

[ui]
color = false
"#;

        let config = Config::builder()
            .add_source(config::File::from_str(config_str, config::FileFormat::Toml))
            .build()
            .expect("should build config");

        let app_config: AppConfig = config.try_deserialize().expect("should deserialize");

        assert_eq!(app_config.github.api_base, "https://ghe.example.com/api/v3");
        assert_eq!(app_config.github.max_pages, 5);
        assert_eq!(app_config.github.per_page, 100);
        assert_eq!(app_config.github.api_timeout_seconds, Some(15));
        assert!(!app_config.ui.color);
        assert!(app_config.ui.progress_bars);
    }

    #[test]
    fn test_invalid_config_is_config_error() {
        let config = Config::builder()
            .add_source(config::File::from_str(
                "[github]\nmax_pages = \"lots\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .expect("should build config");

        let err: ReposcoutError = config
            .try_deserialize::<AppConfig>()
            .expect_err("max_pages is not a number")
            .into();
        assert!(matches!(err, ReposcoutError::Config { .. }));
    }
}

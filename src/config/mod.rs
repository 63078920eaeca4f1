//
//  vela-sdk
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Connection settings for a Vela server, stored as TOML in the platform
//! config directory and overridable from the environment.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/vela/config.toml`
//! - **macOS**: `~/Library/Application Support/vela/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\vela\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! addr = "https://vela.example.com"
//! token = "superSecretToken"
//! user_agent = "my-tool/1.0"
//! timeout_secs = 30
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `VELA_ADDR` | `addr` |
//! | `VELA_TOKEN` | `token` |
//! | `VELA_USERNAME` | `username` |
//! | `VELA_PASSWORD` | `password` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vela_sdk::api::Client;
//! use vela_sdk::config::Config;
//!
//! let mut config = Config::load()?;
//! config.apply_env();
//! let client = Client::from_config(&config)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::AuthCredential;

const APP_NAME: &str = "vela";

/// Settings used to construct a [`Client`](crate::api::Client).
///
/// Every field is optional so a partial file, or no file at all, loads
/// cleanly. Unset fields are omitted when saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the Vela server, e.g. `https://vela.example.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,

    /// Bearer token. Takes precedence over `username`/`password`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Username for HTTP Basic auth. Used only when `password` is also set
    /// and no `token` is configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password for HTTP Basic auth. Used only together with `username`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Overrides the default `User-Agent` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Whole-request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads the configuration from [`Config::config_path`].
    ///
    /// A missing file yields the default (empty) configuration.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads the configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Location of the default config file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Overlays `VELA_ADDR`, `VELA_TOKEN`, `VELA_USERNAME` and
    /// `VELA_PASSWORD` onto the loaded values. Empty variables are ignored.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(addr) = var("VELA_ADDR") {
            self.addr = Some(addr);
        }
        if let Some(token) = var("VELA_TOKEN") {
            self.token = Some(token);
        }
        if let Some(username) = var("VELA_USERNAME") {
            self.username = Some(username);
        }
        if let Some(password) = var("VELA_PASSWORD") {
            self.password = Some(password);
        }
    }

    /// The credential described by this configuration.
    ///
    /// A token wins over basic credentials; basic credentials need both a
    /// username and a password.
    pub fn credential(&self) -> Option<AuthCredential> {
        if let Some(token) = &self.token {
            return Some(AuthCredential::bearer(token.clone()));
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(AuthCredential::basic(username.clone(), password.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            addr: Some("https://vela.example.com".to_string()),
            token: Some("superSecretToken".to_string()),
            timeout_secs: Some(30),
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("addr = \"https://vela.example.com\""));
        assert!(!content.contains("username"));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "addr = \"http://localhost:8080\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.addr.as_deref(), Some("http://localhost:8080"));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(Config::load_from(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_apply_vars_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            ("VELA_ADDR", "https://ci.example.com"),
            ("VELA_TOKEN", ""),
            ("VELA_USERNAME", "octocat"),
        ]
        .into_iter()
        .collect();

        let mut config = Config {
            addr: Some("http://localhost:8080".to_string()),
            token: Some("fromFile".to_string()),
            ..Default::default()
        };
        config.apply_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.addr.as_deref(), Some("https://ci.example.com"));
        assert_eq!(config.token.as_deref(), Some("fromFile"));
        assert_eq!(config.username.as_deref(), Some("octocat"));
        assert!(config.password.is_none());
    }

    #[test]
    fn test_credential_prefers_token() {
        let config = Config {
            token: Some("foobar".to_string()),
            username: Some("octocat".to_string()),
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credential(), Some(AuthCredential::bearer("foobar")));
    }

    #[test]
    fn test_credential_basic_needs_both_fields() {
        let mut config = Config {
            username: Some("octocat".to_string()),
            ..Default::default()
        };
        assert_eq!(config.credential(), None);

        config.password = Some("hunter2".to_string());
        assert_eq!(config.credential(), Some(AuthCredential::basic("octocat", "hunter2")));
    }

    #[test]
    fn test_config_path_ends_with_file_name() {
        if let Ok(path) = Config::config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}

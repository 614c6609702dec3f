//
//  zenhub-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Persistent settings for the `zh` command line: which endpoint to talk to,
//! the request timeout, and the repository and workspace to fall back on when
//! a command is given `.` instead of an id.
//!
//! The API token is never written to the file; see [`crate::auth`].
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/zh/config.toml`
//! - **macOS**: `~/Library/Application Support/zh/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\zh\config\config.toml`
//!
//! The `ZH_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! endpoint = "https://api.zenhub.io"
//! timeout_secs = 30
//!
//! [defaults]
//! repo_id = 1234567
//! workspace_id = "5d0a7a9741fd098f6b7f58ac"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zenhub_cli::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("repo_id", "1234567")?;
//! config.save()?;
//!
//! let options = config.client_options()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::{ClientOptions, DEFAULT_TIMEOUT_SECS};

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "ZH_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["endpoint", "timeout_secs", "repo_id", "workspace_id"];

/// Settings for the `zh` command line.
///
/// # Fields
///
/// * `api` - Endpoint and timeout
/// * `defaults` - Fallback repository and workspace
///
/// # Notes
///
/// - Every field is optional so a partial (or empty) file loads cleanly
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// The `[api]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `https://api.zenhub.io` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds; 0 disables the timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// The `[defaults]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Repository used when a command is given `.`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_id: Option<u64>,

    /// Workspace used when `--workspace` is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Path of the configuration file.
    ///
    /// `ZH_CONFIG` wins when set; otherwise the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a value by key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zenhub_cli::config::Config;
    ///
    /// let mut config = Config::default();
    /// assert_eq!(config.get("repo_id"), None);
    ///
    /// config.set("repo_id", "1234567").unwrap();
    /// assert_eq!(config.get("repo_id"), Some("1234567".to_string()));
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "endpoint" => self.api.endpoint.clone(),
            "timeout_secs" => self.api.timeout_secs.map(|t| t.to_string()),
            "repo_id" => self.defaults.repo_id.map(|r| r.to_string()),
            "workspace_id" => self.defaults.workspace_id.clone(),
            _ => None,
        }
    }

    /// Sets a value by key, validating it first.
    ///
    /// # Errors
    ///
    /// Fails for an unknown key, a malformed endpoint, or a non-numeric
    /// timeout or repository id. The configuration is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "endpoint" => {
                ClientOptions::default().with_endpoint(value)?;
                self.api.endpoint = Some(value.to_string());
            }
            "timeout_secs" => {
                let secs = value
                    .parse()
                    .with_context(|| format!("timeout_secs must be a number, got '{}'", value))?;
                self.api.timeout_secs = Some(secs);
            }
            "repo_id" => {
                let repo_id: u64 = value
                    .parse()
                    .with_context(|| format!("repo_id must be a number, got '{}'", value))?;
                if repo_id == 0 {
                    bail!("repo_id must be non-zero");
                }
                self.defaults.repo_id = Some(repo_id);
            }
            "workspace_id" => {
                if value.is_empty() {
                    bail!("workspace_id must not be empty");
                }
                self.defaults.workspace_id = Some(value.to_string());
            }
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    /// Clears a value by key.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "endpoint" => self.api.endpoint = None,
            "timeout_secs" => self.api.timeout_secs = None,
            "repo_id" => self.defaults.repo_id = None,
            "workspace_id" => self.defaults.workspace_id = None,
            _ => bail!("Unknown config key '{}'. Valid keys: {}", key, KEYS.join(", ")),
        }
        Ok(())
    }

    /// Every key with its current value.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        KEYS.iter().map(|key| (*key, self.get(key))).collect()
    }

    /// Builds client options, with `endpoint_override` taking precedence over
    /// the file.
    pub fn client_options_with(&self, endpoint_override: Option<&str>) -> Result<ClientOptions> {
        let mut options = ClientOptions::default();

        if let Some(endpoint) = endpoint_override.or(self.api.endpoint.as_deref()) {
            options = options.with_endpoint(endpoint)?;
        }

        let timeout = match self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS) {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };

        Ok(options.with_timeout(timeout))
    }

    /// Builds client options from the file alone.
    pub fn client_options(&self) -> Result<ClientOptions> {
        self.client_options_with(None)
    }
}

//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`PLINTH_API_URL`, `PLINTH_PAGES_URL`,
//!    `PLINTH_STARTERS_GIT_BASE`, `PLINTH_TOKEN`)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL of the catalog backend API.
    pub api_base_url: String,
    /// Base URL of the public product pages, used in "not available" notices.
    pub pages_base_url: String,
    /// Base URL under which free starters live as `{slug}.git` repositories.
    pub starters_git_base: String,
    /// Bearer token for paid-product downloads.  Environment-only
    /// (`PLINTH_TOKEN`); never written to the config file.
    #[serde(skip)]
    pub auth_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.plinth.dev".into(),
            pages_base_url: "https://plinth.dev".into(),
            starters_git_base: "https://github.com/plinth-starters".into(),
            auth_token: None,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment
    /// overrides.
    ///
    /// A `--config` path that does not exist is an error; a missing file at
    /// the *default* location is not.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)
                .with_context(|| format!("reading config file {}", path.display()))?,
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                        .with_context(|| format!("reading config file {}", path.display()))?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(url) = std::env::var("PLINTH_API_URL") {
            config.api_base_url = url;
        }
        if let Ok(url) = std::env::var("PLINTH_PAGES_URL") {
            config.pages_base_url = url;
        }
        if let Ok(url) = std::env::var("PLINTH_STARTERS_GIT_BASE") {
            config.starters_git_base = url;
        }
        if let Ok(token) = std::env::var("PLINTH_TOKEN") {
            if !token.is_empty() {
                config.auth_token = Some(token);
            }
        }

        Ok(config)
    }

    fn from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.plinth.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "plinth", "plinth")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".plinth.toml"))
    }
}

//! Configuration file handling for the CLI.
//!
//! Optional defaults live in `$XDG_CONFIG_HOME/gigboard/config.toml`
//! following the XDG Base Directory Specification. Command-line flags win.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use gigboard_business::config::DEFAULT_UNIQUE_ID;
use serde::{Deserialize, Serialize};

use crate::render::TableStyle;

/// CLI configuration stored on disk
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Row key holding the unique id
    pub unique_id: Option<String>,
    /// Default table style
    pub style: Option<TableStyle>,
    /// Show full cell text by default
    pub wide: bool,
}

impl Config {
    /// Get the configuration file path.
    ///
    /// Returns `$XDG_CONFIG_HOME/gigboard/config.toml` on Linux,
    /// appropriate paths on other platforms.
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "gigboard", "gigboard")
            .context("Failed to determine config directory")?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Returns default configuration if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn unique_id(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.unique_id.clone())
            .unwrap_or_else(|| DEFAULT_UNIQUE_ID.to_owned())
    }

    pub fn style(&self, flag: Option<TableStyle>) -> TableStyle {
        flag.or(self.style).unwrap_or_default()
    }

    pub fn wide(&self, flag: bool) -> bool {
        flag || self.wide
    }
}

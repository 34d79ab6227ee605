//! Configuration handling for filed-recipes
//!
//! Configuration is stored in `~/.config/filed-recipes/config.toml` (or the
//! platform equivalent). Every setting has a default, so a missing file is
//! not an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recipe file used when nothing else names one
pub const DEFAULT_RECIPES_FILE: &str = "recipes.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Recipe file used when `--file` is not given
    pub recipes_file: PathBuf,

    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Wait for Enter between recipes when showing all of them
    pub pause_between_recipes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_file: PathBuf::from(DEFAULT_RECIPES_FILE),
            default_format: OutputFormat::Text,
            pause_between_recipes: false,
        }
    }
}

impl Config {
    /// Returns the config directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("se", "filedrecipes", "filed-recipes")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the path of the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Loads configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file, defaulting if it is absent
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Picks the recipe file: explicit choice first, then the configured one
    pub fn resolve_recipes_file(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.recipes_file.clone())
    }
}

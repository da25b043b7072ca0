use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::{LaunchParams, ThemeParams};

/// Overrides `api_base_url`.
pub const API_URL_ENV: &str = "TGCLOUD_API_URL";
/// Overrides `init_data`.
pub const INIT_DATA_ENV: &str = "TGCLOUD_INIT_DATA";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Raw init data string sent with every request for backend authentication.
    #[serde(default)]
    pub init_data: String,
    #[serde(default)]
    pub theme: ThemeParams,
    #[serde(default)]
    pub launch: LaunchParams,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            init_data: String::new(),
            theme: ThemeParams::default(),
            launch: LaunchParams::default(),
        }
    }
}

impl Settings {
    /// Loads `<config_dir>/tgcloud/config.toml` if present, then applies
    /// environment overrides.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined or the
    /// file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            return Self::load_from(&config_path).await;
        }

        debug!("No config file at {:?}, using defaults", config_path);
        Ok(Self::default().apply_overrides(|key| std::env::var(key).ok()))
    }

    /// Loads settings from an explicit file, then applies environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let settings = Self::read(path).await?;
        Ok(settings.apply_overrides(|key| std::env::var(key).ok()))
    }

    async fn read(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let settings: Settings = toml::from_str(&content)?;
        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Replaces fields whose override variable is set and non-empty.
    #[must_use]
    pub fn apply_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            debug!("{} overrides api_base_url", API_URL_ENV);
            self.api_base_url = url;
        }
        if let Some(init_data) = lookup(INIT_DATA_ENV).filter(|v| !v.is_empty()) {
            debug!("{} overrides init_data", INIT_DATA_ENV);
            self.init_data = init_data;
        }
        self
    }

    /// # Errors
    /// Returns an error if the platform config directory is unknown.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
        Ok(config_dir.join("tgcloud").join("config.toml"))
    }
}

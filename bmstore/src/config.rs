use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{instrument, trace, warn};

pub const ENV_DB_URL: &str = "BMSTORE_DB_URL";
pub const ENV_PREFERENCES: &str = "BMSTORE_PREFERENCES";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,

    /// TOML file holding the `[Bookmarks]` preferences
    #[serde(default = "default_preferences_path")]
    pub preferences_path: String,

    /// Connections in the pool; 1 keeps a single shared connection
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/bmstore")
}

fn default_db_path() -> String {
    config_dir().join("bmstore.db").to_string_lossy().into_owned()
}

fn default_preferences_path() -> String {
    config_dir()
        .join("preferences.toml")
        .to_string_lossy()
        .into_owned()
}

fn default_pool_size() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
            preferences_path: default_preferences_path(),
            pool_size: default_pool_size(),
        }
    }
}

fn read_config_file(path: &Path) -> DomainResult<Settings> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| DomainError::Other(format!("Cannot read {}: {}", path.display(), e)))?;
    toml::from_str::<Settings>(&text)
        .map_err(|e| DomainError::Other(format!("Invalid config {}: {}", path.display(), e)))
}

/// Load settings: defaults, then the config file, then environment overrides.
///
/// An explicit `config_file` must exist and parse. The default location
/// `~/.config/bmstore/config.toml` is optional and skipped with a warning when broken.
#[instrument(level = "debug")]
pub fn load_settings(config_file: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = match config_file {
        Some(path) => read_config_file(path)?,
        None => {
            let default_file = config_dir().join("config.toml");
            if default_file.exists() {
                read_config_file(&default_file).unwrap_or_else(|e| {
                    warn!("{}, using defaults", e);
                    Settings::default()
                })
            } else {
                Settings::default()
            }
        }
    };

    if let Ok(db_url) = std::env::var(ENV_DB_URL) {
        trace!("Using {} from environment: {}", ENV_DB_URL, db_url);
        settings.db_url = db_url;
    }

    if let Ok(preferences) = std::env::var(ENV_PREFERENCES) {
        trace!("Using {} from environment: {}", ENV_PREFERENCES, preferences);
        settings.preferences_path = preferences;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

// bmstore/src/infrastructure/preferences.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::error_context::ErrorContext;
use crate::domain::preferences::{Preferences, PreferencesStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Name of the table holding the bookmark preferences
pub const PREFERENCES_GROUP: &str = "Bookmarks";

/// Keeps preferences in the `[Bookmarks]` table of a TOML file.
///
/// Other tables in the same file are left untouched on save.
#[derive(Debug, Clone)]
pub struct TomlPreferencesStore {
    path: PathBuf,
}

impl TomlPreferencesStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> DomainResult<Option<toml::Table>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let table = text.parse::<toml::Table>().map_err(|e| {
            DomainError::Preferences(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(Some(table))
    }
}

impl PreferencesStore for TomlPreferencesStore {
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> DomainResult<Preferences> {
        let Some(mut table) = self.read_table()? else {
            debug!("No preferences file, using defaults");
            return Ok(Preferences::default());
        };

        let Some(toml::Value::Table(mut group)) = table.remove(PREFERENCES_GROUP) else {
            return Ok(Preferences::default());
        };

        // legacy spelling loses against the current key
        if group.contains_key("lastFolder") && group.remove("LastFolder").is_some() {
            warn!("Ignoring legacy key LastFolder, lastFolder is set");
        }

        toml::Value::Table(group)
            .try_into::<Preferences>()
            .map_err(|e| DomainError::Preferences(format!("invalid [{}]: {}", PREFERENCES_GROUP, e)))
    }

    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    fn save(&self, preferences: &Preferences) -> DomainResult<()> {
        let mut table = match self.read_table() {
            Ok(table) => table.unwrap_or_default(),
            Err(e) => {
                warn!("Rewriting unreadable preferences file: {}", e);
                toml::Table::new()
            }
        };

        let group = toml::Value::try_from(preferences)
            .map_err(|e| DomainError::Preferences(e.to_string()))?;
        table.insert(PREFERENCES_GROUP.to_string(), group);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = toml::to_string_pretty(&table)
            .map_err(|e| DomainError::Preferences(e.to_string()))?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

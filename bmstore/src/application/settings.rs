// bmstore/src/application/settings.rs
use crate::application::error::ApplicationResult;
use crate::domain::preferences::{Preferences, PreferencesStore};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, warn};

/// In-memory view of the bookmark preferences, written through on every change.
#[derive(Debug)]
pub struct BookmarkSettings {
    store: Arc<dyn PreferencesStore>,
    current: RwLock<Preferences>,
}

impl BookmarkSettings {
    /// Load from `store`; an unreadable store yields the defaults
    #[instrument(skip_all, level = "debug")]
    pub fn load(store: Arc<dyn PreferencesStore>) -> Self {
        let current = match store.load() {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Using default preferences: {}", e);
                Preferences::default()
            }
        };
        debug!("Preferences: {:?}", current);
        Self {
            store,
            current: RwLock::new(current),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Preferences> {
        self.current.read().unwrap_or_else(|p| p.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Preferences> {
        self.current.write().unwrap_or_else(|p| p.into_inner())
    }

    pub fn snapshot(&self) -> Preferences {
        self.read().clone()
    }

    pub fn show_most_visited(&self) -> bool {
        self.read().show_most_visited
    }

    pub fn show_only_icons_in_toolbar(&self) -> bool {
        self.read().show_only_icons_in_toolbar
    }

    pub fn last_folder(&self) -> String {
        self.read().last_folder.clone()
    }

    pub fn set_show_most_visited(&self, value: bool) -> ApplicationResult<()> {
        self.update(|prefs| prefs.show_most_visited = value)
    }

    pub fn set_show_only_icons_in_toolbar(&self, value: bool) -> ApplicationResult<()> {
        self.update(|prefs| prefs.show_only_icons_in_toolbar = value)
    }

    pub fn set_last_folder(&self, folder: &str) -> ApplicationResult<()> {
        self.update(|prefs| prefs.last_folder = folder.to_string())
    }

    fn update<F: FnOnce(&mut Preferences)>(&self, change: F) -> ApplicationResult<()> {
        let mut current = self.write();
        let mut changed = current.clone();
        change(&mut changed);
        // memory only follows a successful save
        self.store.save(&changed)?;
        *current = changed;
        Ok(())
    }
}

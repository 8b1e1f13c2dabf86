// src/util/testing.rs

use std::env;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crossbeam::channel::Receiver;
use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use crate::application::BookmarkManager;
use crate::config::{ENV_DB_URL, ENV_PREFERENCES};
use crate::domain::event::BookmarkEvent;
use crate::domain::folder::EnglishFolderTranslator;
use crate::domain::icon::{Icon, ICON_SIZE};
use crate::infrastructure::events::ChannelEventSink;
use crate::infrastructure::icon_codec::PngIconCodec;
use crate::infrastructure::preferences::TomlPreferencesStore;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;

static TEST_ENV: OnceLock<()> = OnceLock::new();

/// Initializes the global test environment exactly once (logging only).
pub fn init_test_env() {
    TEST_ENV.get_or_init(|| {
        setup_test_logging();
        info!("Test environment initialized");
    });
}

/// Logging setup only runs once; subsequent calls do nothing if `tracing` is already set.
fn setup_test_logging() {
    debug!("Attempting logger init from testing.rs");
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
        return;
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    subscriber.try_init().unwrap_or_else(|e| {
        eprintln!("Error: Failed to set up logging: {}", e);
    });
}

/// Restores the bmstore environment variables on drop
#[derive(Debug, Clone)]
pub struct EnvGuard {
    db_url: Option<String>,
    preferences: Option<String>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    pub fn new() -> Self {
        Self {
            db_url: env::var(ENV_DB_URL).ok(),
            preferences: env::var(ENV_PREFERENCES).ok(),
        }
    }
}

impl Drop for EnvGuard {
    #[instrument(level = "trace")]
    fn drop(&mut self) {
        env::remove_var(ENV_DB_URL);
        env::remove_var(ENV_PREFERENCES);
        if let Some(val) = &self.db_url {
            env::set_var(ENV_DB_URL, val);
        }
        if let Some(val) = &self.preferences {
            env::set_var(ENV_PREFERENCES, val);
        }
    }
}

/// Creates a repository on a fresh database file inside a temp dir.
/// Keep the `TempDir` alive for as long as the repository is used.
pub fn setup_test_db() -> (TempDir, SqliteBookmarkRepository) {
    init_test_env();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("bmstore.db");
    let repository = SqliteBookmarkRepository::from_url(
        db_path.to_string_lossy().as_ref(),
        1,
        Arc::new(PngIconCodec::new()),
    )
    .expect("Failed to create SqliteBookmarkRepository");
    (dir, repository)
}

/// Solid 16x16 icon of one color
pub fn test_icon(rgba: [u8; 4]) -> Icon {
    Icon::new(RgbaImage::from_pixel(ICON_SIZE, ICON_SIZE, Rgba(rgba)))
}

/// A manager on an isolated database, with its event receiver
pub struct TestManager {
    pub manager: BookmarkManager<SqliteBookmarkRepository>,
    pub events: Receiver<BookmarkEvent>,
    pub preferences_path: PathBuf,
    pub dir: TempDir,
}

pub fn setup_test_manager() -> TestManager {
    let (dir, repository) = setup_test_db();
    let preferences_path = dir.path().join("preferences.toml");
    let (sink, events) = ChannelEventSink::new();

    let manager = BookmarkManager::new(
        Arc::new(repository),
        Arc::new(PngIconCodec::new()),
        Arc::new(sink),
        Arc::new(EnglishFolderTranslator),
        Arc::new(TomlPreferencesStore::new(&preferences_path)),
    );

    TestManager {
        manager,
        events,
        preferences_path,
        dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::repository::BookmarkRepository;

    #[test]
    fn test_setup_test_db() {
        let (dir, repo) = setup_test_db();
        assert!(dir.path().join("bmstore.db").exists());
        assert!(repo.get_connection().is_ok());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_icon_is_solid() {
        let icon = test_icon([1, 2, 3, 4]);
        assert_eq!((icon.width(), icon.height()), (ICON_SIZE, ICON_SIZE));
        assert!(icon.image().pixels().all(|p| p.0 == [1, 2, 3, 4]));
    }
}

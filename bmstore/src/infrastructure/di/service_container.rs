use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::export_service::ExportService;
use crate::application::services::folder_service::FolderService;
use crate::application::services::lookup_service::LookupService;
use crate::application::services::reparent_service::ReparentService;
use crate::application::BookmarkManager;
use crate::config::Settings;
use crate::domain::event::EventSink;
use crate::domain::folder::EnglishFolderTranslator;
use crate::domain::icon::IconCodec;
use crate::infrastructure::events::TracingEventSink;
use crate::infrastructure::icon_codec::PngIconCodec;
use crate::infrastructure::preferences::TomlPreferencesStore;
use crate::infrastructure::repositories::sqlite::repository::SqliteBookmarkRepository;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub bookmark_repository: Arc<SqliteBookmarkRepository>,
    pub manager: Arc<BookmarkManager<SqliteBookmarkRepository>>,

    // Service views on the manager
    pub bookmark_service: Arc<dyn BookmarkService>,
    pub folder_service: Arc<dyn FolderService>,
    pub lookup_service: Arc<dyn LookupService>,
    pub reparent_service: Arc<dyn ReparentService>,
    pub export_service: Arc<dyn ExportService>,
}

impl ServiceContainer {
    /// Wire all services; events are written to the log
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        Self::with_sink(config, Arc::new(TracingEventSink))
    }

    /// Wire all services with an explicit event sink
    #[instrument(skip_all, level = "debug")]
    pub fn with_sink(config: &Settings, sink: Arc<dyn EventSink>) -> ApplicationResult<Self> {
        let codec: Arc<dyn IconCodec> = Arc::new(PngIconCodec::new());
        let bookmark_repository = Self::create_repository(config, codec.clone())?;
        let preferences = Arc::new(TomlPreferencesStore::new(&config.preferences_path));

        let manager = Arc::new(BookmarkManager::new(
            bookmark_repository.clone(),
            codec,
            sink,
            Arc::new(EnglishFolderTranslator),
            preferences,
        ));
        debug!("Service container ready for {}", config.db_url);

        Ok(Self {
            bookmark_repository,
            bookmark_service: manager.clone(),
            folder_service: manager.clone(),
            lookup_service: manager.clone(),
            reparent_service: manager.clone(),
            export_service: manager.clone(),
            manager,
        })
    }

    fn create_repository(
        config: &Settings,
        codec: Arc<dyn IconCodec>,
    ) -> ApplicationResult<Arc<SqliteBookmarkRepository>> {
        if !Path::new(&config.db_url).exists() {
            return Err(ApplicationError::Other(format!(
                "Database not found at '{}'. Create it with 'bmstore create-db {}' or set BMSTORE_DB_URL",
                config.db_url, config.db_url
            )));
        }

        // Create the repository, runs all migrations
        let repository =
            SqliteBookmarkRepository::from_url(&config.db_url, config.pool_size, codec).map_err(
                |e| {
                    ApplicationError::Other(format!(
                        "Failed to create SQLite bookmark repository: {}",
                        e
                    ))
                },
            )?;

        Ok(Arc::new(repository))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("bookmark_repository", &"Arc<SqliteBookmarkRepository>")
            .field("manager", &"Arc<BookmarkManager<SqliteBookmarkRepository>>")
            .field("bookmark_service", &"Arc<dyn BookmarkService>")
            .field("folder_service", &"Arc<dyn FolderService>")
            .field("lookup_service", &"Arc<dyn LookupService>")
            .field("reparent_service", &"Arc<dyn ReparentService>")
            .field("export_service", &"Arc<dyn ExportService>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::events::ChannelEventSink;
    use crate::infrastructure::repositories::sqlite::connection::init_pool;

    fn settings_in(dir: &tempfile::TempDir) -> Settings {
        Settings {
            db_url: dir.path().join("bm.db").to_string_lossy().into_owned(),
            preferences_path: dir.path().join("prefs.toml").to_string_lossy().into_owned(),
            pool_size: 1,
        }
    }

    #[test]
    fn given_missing_database_when_new_then_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ServiceContainer::new(&settings_in(&dir));
        assert!(matches!(result, Err(ApplicationError::Other(_))));
    }

    #[test]
    fn given_existing_database_when_with_sink_then_services_share_store() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(&dir);
        drop(init_pool(&settings.db_url, 1).unwrap());

        let (sink, events) = ChannelEventSink::new();
        let container = ServiceContainer::with_sink(&settings, Arc::new(sink)).unwrap();

        let saved = container
            .bookmark_service
            .save_bookmark("https://a.example", "A", None, "work")
            .unwrap();
        assert!(container.folder_service.is_folder("work").unwrap());
        assert!(container
            .lookup_service
            .get_bookmark(saved.id.unwrap())
            .unwrap()
            .is_some());
        assert!(events.try_iter().count() >= 2);
    }
}

// src/application/services/bookmark_manager.rs
use std::sync::Arc;

use crate::application::settings::BookmarkSettings;
use crate::domain::event::{BookmarkEvent, EventSink};
use crate::domain::folder::FolderTranslator;
use crate::domain::icon::IconCodec;
use crate::domain::preferences::PreferencesStore;
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use tracing::{debug, instrument, warn};

/// The bookmark engine. Implements every bookmark-facing service trait
/// (`BookmarkService`, `FolderService`, `LookupService`, `ReparentService`,
/// `ExportService`) on top of one repository.
///
/// Events are published only after the storage change succeeded.
#[derive(Debug)]
pub struct BookmarkManager<R: BookmarkRepository + FolderRepository> {
    pub(crate) repository: Arc<R>,
    pub(crate) codec: Arc<dyn IconCodec>,
    sink: Arc<dyn EventSink>,
    translator: Arc<dyn FolderTranslator>,
    settings: BookmarkSettings,
}

impl<R: BookmarkRepository + FolderRepository> BookmarkManager<R> {
    pub fn new(
        repository: Arc<R>,
        codec: Arc<dyn IconCodec>,
        sink: Arc<dyn EventSink>,
        translator: Arc<dyn FolderTranslator>,
        preferences: Arc<dyn PreferencesStore>,
    ) -> Self {
        debug!("Creating new BookmarkManager");
        Self {
            repository,
            codec,
            sink,
            translator,
            settings: BookmarkSettings::load(preferences),
        }
    }

    pub fn settings(&self) -> &BookmarkSettings {
        &self.settings
    }

    pub fn codec(&self) -> &Arc<dyn IconCodec> {
        &self.codec
    }

    /// Display label for fixed folders, every other name unchanged
    pub fn to_translated_folder(&self, name: &str) -> String {
        self.translator.to_translated(name)
    }

    /// Canonical name for fixed folder labels, every other name unchanged
    pub fn from_translated_folder(&self, name: &str) -> String {
        self.translator.from_translated(name)
    }

    pub(crate) fn translator(&self) -> &dyn FolderTranslator {
        self.translator.as_ref()
    }

    /// Publish `event` followed by the change broadcast
    #[instrument(skip_all, level = "trace", fields(event = event.name()))]
    pub(crate) fn notify(&self, event: BookmarkEvent) {
        self.sink.publish(event);
        self.broadcast();
    }

    pub(crate) fn publish(&self, event: BookmarkEvent) {
        self.sink.publish(event);
    }

    pub(crate) fn broadcast(&self) {
        self.sink.publish(BookmarkEvent::StoreChanged);
    }

    /// The mutation already happened; a preferences write error must not undo it
    pub(crate) fn remember_last_folder(&self, folder: &str) {
        if let Err(e) = self.settings.set_last_folder(folder) {
            warn!("Could not persist last folder {}: {}", folder, e);
        }
    }
}

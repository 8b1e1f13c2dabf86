// src/application/services/reparent_service_impl.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_manager::BookmarkManager;
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::reparent_service::ReparentService;
use crate::domain::bookmark::Bookmark;
use crate::domain::event::BookmarkEvent;
use crate::domain::folder::FolderKind;
use crate::domain::icon::{Icon, IconCodec};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use tracing::{debug, instrument};

impl<R: BookmarkRepository + FolderRepository> ReparentService for BookmarkManager<R> {
    #[instrument(skip(self), level = "debug")]
    fn change_bookmark_parent(
        &self,
        id: i32,
        new_parent: &str,
        old_parent: &str,
    ) -> ApplicationResult<Bookmark> {
        if new_parent.is_empty() {
            return Err(ApplicationError::Validation(
                "New parent folder must not be empty".to_string(),
            ));
        }

        let mut bookmark = self
            .repository
            .get_by_id(id)?
            .ok_or(ApplicationError::BookmarkNotFound(id))?;
        let icon = match self.repository.get_icon_blob(id)? {
            Some(blob) if !blob.is_empty() => blob,
            _ => self.codec.encode_or_placeholder(&bookmark.icon)?,
        };
        let new_parent = self.from_translated_folder(new_parent);
        let old_parent = self.from_translated_folder(old_parent);

        if !self.repository.update_folder(id, &new_parent)? {
            return Err(ApplicationError::BookmarkNotFound(id));
        }
        bookmark.folder = new_parent.clone();
        bookmark.in_subfolder = self
            .repository
            .get_folder(&new_parent)?
            .is_some_and(|folder| folder.is_subfolder());

        debug!("Moved bookmark {} from {} to {}", id, old_parent, new_parent);

        self.notify(BookmarkEvent::BookmarkParentChanged {
            id,
            title: bookmark.title.clone(),
            url: bookmark.url.clone(),
            icon,
            old_parent,
            new_parent,
        });
        Ok(bookmark)
    }

    #[instrument(skip(self), level = "debug")]
    fn change_folder_parent(&self, name: &str, is_subfolder: bool) -> ApplicationResult<bool> {
        if name.is_empty() {
            debug!("Ignoring parent change of unnamed folder");
            return Ok(false);
        }

        let name = self.from_translated_folder(name);
        if !self
            .repository
            .set_folder_kind(&name, FolderKind::from_flag(is_subfolder))?
        {
            return Err(ApplicationError::FolderNotFound(name));
        }

        self.notify(BookmarkEvent::FolderParentChanged { name, is_subfolder });
        Ok(true)
    }

    #[instrument(skip(self, icon), level = "debug")]
    fn bookmark_dropped_link(
        &self,
        url: &str,
        title: &str,
        icon: Option<Icon>,
        folder: &str,
    ) -> ApplicationResult<Bookmark> {
        let icon = self.codec.sanitize(icon);
        let folder = self.from_translated_folder(folder);
        self.save_bookmark(url, title, Some(icon), &folder)
    }
}

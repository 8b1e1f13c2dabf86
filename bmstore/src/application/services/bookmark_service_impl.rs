// src/application/services/bookmark_service_impl.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_manager::BookmarkManager;
use crate::application::services::bookmark_service::BookmarkService;
use crate::application::services::folder_service::FolderService;
use crate::domain::bookmark::{Bookmark, BrowsingContext};
use crate::domain::event::BookmarkEvent;
use crate::domain::icon::{Icon, IconCodec};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use tracing::{debug, info, instrument};

impl<R: BookmarkRepository + FolderRepository> BookmarkManager<R> {
    fn require_bookmark(&self, id: i32) -> ApplicationResult<Bookmark> {
        self.repository
            .get_by_id(id)?
            .ok_or(ApplicationError::BookmarkNotFound(id))
    }
}

impl<R: BookmarkRepository + FolderRepository> BookmarkService for BookmarkManager<R> {
    #[instrument(skip(self), level = "trace")]
    fn is_bookmarked(&self, url: &str) -> ApplicationResult<bool> {
        Ok(self.repository.exists_by_url(url)?)
    }

    #[instrument(skip(self, icon), level = "debug")]
    fn save_bookmark(
        &self,
        url: &str,
        title: &str,
        icon: Option<Icon>,
        folder: &str,
    ) -> ApplicationResult<Bookmark> {
        let folder = self.from_translated_folder(folder);
        let icon = self.codec.sanitize(icon);
        let mut bookmark =
            Bookmark::new(url, title, &folder, icon).map_err(ApplicationError::from_validation)?;

        if !self.is_folder(&folder)? {
            self.create_folder(&folder)?;
        }

        self.repository.add(&mut bookmark)?;
        info!("Saved bookmark {}", bookmark);

        self.remember_last_folder(&folder);
        self.notify(BookmarkEvent::BookmarkAdded(bookmark.clone()));
        Ok(bookmark)
    }

    #[instrument(skip_all, level = "debug")]
    fn save_current_page(
        &self,
        context: &dyn BrowsingContext,
        folder: Option<&str>,
    ) -> ApplicationResult<Bookmark> {
        let folder = match folder {
            Some(folder) if !folder.is_empty() => self.from_translated_folder(folder),
            _ => self.settings().last_folder(),
        };
        debug!("Saving current page into {}", folder);
        self.save_bookmark(&context.url(), &context.title(), context.icon(), &folder)
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_bookmark(&self, id: i32) -> ApplicationResult<Bookmark> {
        self.remove_bookmarks(&[id])?
            .pop()
            .ok_or(ApplicationError::BookmarkNotFound(id))
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_bookmarks(&self, ids: &[i32]) -> ApplicationResult<Vec<Bookmark>> {
        let deleted = self.repository.delete_many(ids)?;
        debug!("Deleted {} of {} bookmarks", deleted.len(), ids.len());

        if deleted.is_empty() {
            return Ok(deleted);
        }
        for bookmark in &deleted {
            self.publish(BookmarkEvent::BookmarkDeleted(bookmark.clone()));
        }
        self.broadcast();
        Ok(deleted)
    }

    #[instrument(skip(self), level = "debug")]
    fn edit_bookmark(
        &self,
        id: i32,
        title: &str,
        url: &str,
        folder: &str,
    ) -> ApplicationResult<(Bookmark, Bookmark)> {
        if title.is_empty() && url.is_empty() && folder.is_empty() {
            return Err(ApplicationError::Validation(
                "Nothing to edit: title, url and folder are empty".to_string(),
            ));
        }

        let folder = self.from_translated_folder(folder);
        let before = self.require_bookmark(id)?;
        let after = before
            .with_edits(title, url, &folder)
            .map_err(ApplicationError::from_validation)?;

        if !self.repository.update(&after)? {
            return Err(ApplicationError::BookmarkNotFound(id));
        }

        self.notify(BookmarkEvent::BookmarkEdited {
            before: before.clone(),
            after: after.clone(),
        });
        Ok((before, after))
    }

    #[instrument(skip(self, icon), level = "debug")]
    fn change_icon(&self, id: i32, icon: Icon) -> ApplicationResult<(Bookmark, Bookmark)> {
        let before = self.require_bookmark(id)?;
        let icon = self.codec.sanitize(Some(icon));

        if !self.repository.update_icon(id, &icon)? {
            return Err(ApplicationError::BookmarkNotFound(id));
        }

        let mut after = before.clone();
        after.icon = icon;
        self.notify(BookmarkEvent::BookmarkEdited {
            before: before.clone(),
            after: after.clone(),
        });
        Ok((before, after))
    }
}

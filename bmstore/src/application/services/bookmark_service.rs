// src/application/services/bookmark_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::{Bookmark, BrowsingContext};
use crate::domain::icon::Icon;
use std::fmt::Debug;

/// Service interface for bookmark records
pub trait BookmarkService: Send + Sync + Debug {
    /// True if any bookmark has exactly this url
    fn is_bookmarked(&self, url: &str) -> ApplicationResult<bool>;

    /// Store a new bookmark, creating `folder` when it does not exist yet.
    ///
    /// A missing or empty icon is replaced by the placeholder. The folder
    /// becomes the last-used folder.
    fn save_bookmark(
        &self,
        url: &str,
        title: &str,
        icon: Option<Icon>,
        folder: &str,
    ) -> ApplicationResult<Bookmark>;

    /// Bookmark the page shown by `context`; without a folder the last-used one is taken
    fn save_current_page(
        &self,
        context: &dyn BrowsingContext,
        folder: Option<&str>,
    ) -> ApplicationResult<Bookmark>;

    /// Delete one bookmark and return its last state
    fn remove_bookmark(&self, id: i32) -> ApplicationResult<Bookmark>;

    /// Delete a batch in one transaction. Unknown ids are skipped.
    fn remove_bookmarks(&self, ids: &[i32]) -> ApplicationResult<Vec<Bookmark>>;

    /// Empty arguments keep the current value; at least one must be given.
    /// Returns the bookmark before and after the edit.
    fn edit_bookmark(
        &self,
        id: i32,
        title: &str,
        url: &str,
        folder: &str,
    ) -> ApplicationResult<(Bookmark, Bookmark)>;

    /// Replace the icon only
    fn change_icon(&self, id: i32, icon: Icon) -> ApplicationResult<(Bookmark, Bookmark)>;
}

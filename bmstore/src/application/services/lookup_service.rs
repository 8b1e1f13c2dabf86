// src/application/services/lookup_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;
use std::fmt::Debug;

pub trait LookupService: Send + Sync + Debug {
    fn get_bookmark(&self, id: i32) -> ApplicationResult<Option<Bookmark>>;

    /// First match in the menu, then the toolbar, then anywhere (lowest id)
    fn get_bookmark_by_url(&self, url: &str) -> ApplicationResult<Option<Bookmark>>;

    /// Bookmarks of one folder in insertion order
    fn get_folder_bookmarks(&self, name: &str) -> ApplicationResult<Vec<Bookmark>>;

    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>>;
}

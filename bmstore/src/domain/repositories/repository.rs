// src/domain/repositories/repository

use crate::domain::bookmark::Bookmark;
use crate::domain::error::DomainError;
use crate::domain::folder::{Folder, FolderKind};
use crate::domain::icon::Icon;

/// Repository trait for bookmark persistence operations.
///
/// Reads return bookmarks with `in_subfolder` already derived from the folder
/// table. Ordering is ascending id, i.e. insertion order.
pub trait BookmarkRepository: std::fmt::Debug + Send + Sync {
    /// Get a bookmark by its ID
    fn get_by_id(&self, id: i32) -> Result<Option<Bookmark>, DomainError>;

    /// First bookmark with exactly this url, optionally restricted to one folder
    fn get_first_by_url(
        &self,
        url: &str,
        folder: Option<&str>,
    ) -> Result<Option<Bookmark>, DomainError>;

    /// All bookmarks whose folder equals `folder`
    fn get_by_folder(&self, folder: &str) -> Result<Vec<Bookmark>, DomainError>;

    /// Bookmarks with an empty folder or in `unsorted`
    fn get_unfiled(&self) -> Result<Vec<Bookmark>, DomainError>;

    /// Get all bookmarks
    fn get_all(&self) -> Result<Vec<Bookmark>, DomainError>;

    /// Check if a bookmark with exactly this url exists
    fn exists_by_url(&self, url: &str) -> Result<bool, DomainError>;

    /// Insert a new bookmark and assign its id
    fn add(&self, bookmark: &mut Bookmark) -> Result<(), DomainError>;

    /// Write url, title and folder. The icon column is left untouched.
    fn update(&self, bookmark: &Bookmark) -> Result<bool, DomainError>;

    /// Replace only the icon blob
    fn update_icon(&self, id: i32, icon: &Icon) -> Result<bool, DomainError>;

    /// Icon blob exactly as stored; `None` for a missing row or a NULL blob
    fn get_icon_blob(&self, id: i32) -> Result<Option<Vec<u8>>, DomainError>;

    /// Re-point a bookmark to another folder
    fn update_folder(&self, id: i32, folder: &str) -> Result<bool, DomainError>;

    /// Delete all given ids inside one transaction.
    ///
    /// Missing ids and rows whose delete fails are skipped. Returns the
    /// pre-delete snapshots of the rows that were actually removed.
    fn delete_many(&self, ids: &[i32]) -> Result<Vec<Bookmark>, DomainError>;

    fn count(&self) -> Result<usize, DomainError>;
}

/// Repository trait for custom folder rows
pub trait FolderRepository: std::fmt::Debug + Send + Sync {
    fn folder_exists(&self, name: &str) -> Result<bool, DomainError>;

    fn get_folder(&self, name: &str) -> Result<Option<Folder>, DomainError>;

    /// All folder rows in store order
    fn get_all_folders(&self) -> Result<Vec<Folder>, DomainError>;

    fn add_folder(&self, folder: &Folder) -> Result<(), DomainError>;

    /// Delete every bookmark in `name` and then the folder row, in one transaction.
    /// Returns the snapshots of the removed bookmarks.
    fn delete_folder_cascade(&self, name: &str) -> Result<Vec<Bookmark>, DomainError>;

    /// Rename the folder row and move its bookmarks, in one transaction.
    /// Returns the number of bookmarks moved.
    fn rename_folder(&self, before: &str, after: &str) -> Result<usize, DomainError>;

    /// Returns false when no folder row matched
    fn set_folder_kind(&self, name: &str, kind: FolderKind) -> Result<bool, DomainError>;
}

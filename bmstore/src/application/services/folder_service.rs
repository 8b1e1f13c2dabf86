// src/application/services/folder_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::folder::Folder;
use std::fmt::Debug;

/// Service interface for the folder registry
pub trait FolderService: Send + Sync + Debug {
    /// Fixed folder (canonical or translated) or an existing folder row
    fn is_folder(&self, name: &str) -> ApplicationResult<bool>;

    /// False for fixed and unknown folders
    fn is_subfolder(&self, name: &str) -> ApplicationResult<bool>;

    /// Custom folders in store order
    fn folders(&self) -> ApplicationResult<Vec<Folder>>;

    fn create_folder(&self, name: &str) -> ApplicationResult<()>;

    fn create_subfolder(&self, name: &str) -> ApplicationResult<()>;

    /// Delete a folder together with its bookmarks.
    ///
    /// Returns `false` without touching anything for the menu and toolbar folders.
    fn remove_folder(&self, name: &str) -> ApplicationResult<bool>;

    /// Rename a custom folder and move its bookmarks along
    fn rename_folder(&self, before: &str, after: &str) -> ApplicationResult<()>;
}

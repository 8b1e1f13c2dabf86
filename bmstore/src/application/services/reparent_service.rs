// src/application/services/reparent_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::bookmark::Bookmark;
use crate::domain::icon::Icon;
use std::fmt::Debug;

/// Moves bookmarks and folders between parents.
///
/// Parent names may be given as translated labels; they are stored canonical.
pub trait ReparentService: Send + Sync + Debug {
    fn change_bookmark_parent(
        &self,
        id: i32,
        new_parent: &str,
        old_parent: &str,
    ) -> ApplicationResult<Bookmark>;

    /// Returns `false` for an empty name, nothing is changed then
    fn change_folder_parent(&self, name: &str, is_subfolder: bool) -> ApplicationResult<bool>;

    /// Save a link dropped onto `folder`
    fn bookmark_dropped_link(
        &self,
        url: &str,
        title: &str,
        icon: Option<Icon>,
        folder: &str,
    ) -> ApplicationResult<Bookmark>;
}

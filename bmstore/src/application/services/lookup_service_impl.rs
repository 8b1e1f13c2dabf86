// src/application/services/lookup_service_impl.rs
use crate::application::error::ApplicationResult;
use crate::application::services::bookmark_manager::BookmarkManager;
use crate::application::services::lookup_service::LookupService;
use crate::domain::bookmark::Bookmark;
use crate::domain::folder::{BOOKMARKS_MENU, BOOKMARKS_TOOLBAR};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use tracing::instrument;

impl<R: BookmarkRepository + FolderRepository> LookupService for BookmarkManager<R> {
    #[instrument(skip(self), level = "debug")]
    fn get_bookmark(&self, id: i32) -> ApplicationResult<Option<Bookmark>> {
        Ok(self.repository.get_by_id(id)?)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_bookmark_by_url(&self, url: &str) -> ApplicationResult<Option<Bookmark>> {
        for folder in [Some(BOOKMARKS_MENU), Some(BOOKMARKS_TOOLBAR), None] {
            if let Some(bookmark) = self.repository.get_first_by_url(url, folder)? {
                return Ok(Some(bookmark));
            }
        }
        Ok(None)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_folder_bookmarks(&self, name: &str) -> ApplicationResult<Vec<Bookmark>> {
        let name = self.from_translated_folder(name);
        Ok(self.repository.get_by_folder(&name)?)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_all_bookmarks(&self) -> ApplicationResult<Vec<Bookmark>> {
        Ok(self.repository.get_all()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::bookmark_service::BookmarkService;
    use crate::application::services::folder_service::FolderService;
    use crate::util::testing::setup_test_manager;

    #[test]
    fn given_copies_in_several_folders_when_lookup_then_menu_wins() {
        let ctx = setup_test_manager();
        let url = "https://dup.example";
        ctx.manager.save_bookmark(url, "Custom", None, "work").unwrap();
        ctx.manager
            .save_bookmark(url, "Toolbar", None, BOOKMARKS_TOOLBAR)
            .unwrap();
        ctx.manager.save_bookmark(url, "Menu", None, BOOKMARKS_MENU).unwrap();

        let found = ctx.manager.get_bookmark_by_url(url).unwrap().unwrap();
        assert_eq!(found.title, "Menu");
        assert_eq!(found.folder, BOOKMARKS_MENU);
    }

    #[test]
    fn given_no_menu_copy_when_lookup_then_toolbar_wins() {
        let ctx = setup_test_manager();
        let url = "https://dup.example";
        ctx.manager.save_bookmark(url, "Custom", None, "work").unwrap();
        ctx.manager
            .save_bookmark(url, "Toolbar", None, BOOKMARKS_TOOLBAR)
            .unwrap();

        let found = ctx.manager.get_bookmark_by_url(url).unwrap().unwrap();
        assert_eq!(found.title, "Toolbar");
    }

    #[test]
    fn given_only_custom_copies_when_lookup_then_lowest_id() {
        let ctx = setup_test_manager();
        let url = "https://dup.example";
        ctx.manager.save_bookmark(url, "First", None, "b").unwrap();
        ctx.manager.save_bookmark(url, "Second", None, "a").unwrap();

        let found = ctx.manager.get_bookmark_by_url(url).unwrap().unwrap();
        assert_eq!(found.title, "First");
        assert!(ctx
            .manager
            .get_bookmark_by_url("https://missing.example")
            .unwrap()
            .is_none());
    }

    #[test]
    fn given_subfolder_when_listing_folder_then_annotated_in_order() {
        let ctx = setup_test_manager();
        ctx.manager.create_subfolder("tools").unwrap();
        ctx.manager
            .save_bookmark("https://1.example", "One", None, "tools")
            .unwrap();
        ctx.manager
            .save_bookmark("https://2.example", "Two", None, "tools")
            .unwrap();

        let bookmarks = ctx.manager.get_folder_bookmarks("tools").unwrap();
        let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
        assert!(bookmarks.iter().all(|b| b.in_subfolder));
    }

    #[test]
    fn given_translated_label_when_listing_folder_then_canonical_used() {
        let ctx = setup_test_manager();
        ctx.manager
            .save_bookmark("https://1.example", "One", None, BOOKMARKS_TOOLBAR)
            .unwrap();

        let bookmarks = ctx
            .manager
            .get_folder_bookmarks("Bookmarks In ToolBar")
            .unwrap();
        assert_eq!(bookmarks.len(), 1);
        assert!(!bookmarks[0].in_subfolder);
    }
}

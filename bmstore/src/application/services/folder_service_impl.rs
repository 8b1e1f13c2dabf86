// src/application/services/folder_service_impl.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_manager::BookmarkManager;
use crate::application::services::folder_service::FolderService;
use crate::domain::event::BookmarkEvent;
use crate::domain::folder::{Folder, FolderKind, UNSORTED};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use tracing::{debug, info, instrument};

impl<R: BookmarkRepository + FolderRepository> BookmarkManager<R> {
    fn insert_folder(&self, name: &str, kind: FolderKind) -> ApplicationResult<()> {
        if name.is_empty() {
            return Err(ApplicationError::Validation(
                "Folder name must not be empty".to_string(),
            ));
        }
        if self.is_folder(name)? {
            return Err(ApplicationError::FolderExists(name.to_string()));
        }

        self.repository.add_folder(&Folder::new(name, kind))?;

        let event = match kind {
            FolderKind::TopLevel => BookmarkEvent::FolderAdded(name.to_string()),
            FolderKind::Subfolder => BookmarkEvent::SubfolderAdded(name.to_string()),
        };
        self.notify(event);
        Ok(())
    }
}

impl<R: BookmarkRepository + FolderRepository> FolderService for BookmarkManager<R> {
    #[instrument(skip(self), level = "trace")]
    fn is_folder(&self, name: &str) -> ApplicationResult<bool> {
        if self.translator().resolve_fixed(name).is_some() {
            return Ok(true);
        }
        Ok(self.repository.folder_exists(name)?)
    }

    #[instrument(skip(self), level = "trace")]
    fn is_subfolder(&self, name: &str) -> ApplicationResult<bool> {
        Ok(self
            .repository
            .get_folder(name)?
            .is_some_and(|folder| folder.is_subfolder()))
    }

    #[instrument(skip(self), level = "debug")]
    fn folders(&self) -> ApplicationResult<Vec<Folder>> {
        Ok(self.repository.get_all_folders()?)
    }

    #[instrument(skip(self), level = "debug")]
    fn create_folder(&self, name: &str) -> ApplicationResult<()> {
        self.insert_folder(name, FolderKind::TopLevel)
    }

    #[instrument(skip(self), level = "debug")]
    fn create_subfolder(&self, name: &str) -> ApplicationResult<()> {
        self.insert_folder(name, FolderKind::Subfolder)
    }

    #[instrument(skip(self), level = "debug")]
    fn remove_folder(&self, name: &str) -> ApplicationResult<bool> {
        if self
            .translator()
            .resolve_fixed(name)
            .is_some_and(|fixed| fixed.is_protected())
        {
            debug!("Refusing to remove fixed folder {}", name);
            return Ok(false);
        }

        let name = self.from_translated_folder(name);
        if !self.is_folder(&name)? && self.repository.get_by_folder(&name)?.is_empty() {
            return Err(ApplicationError::FolderNotFound(name));
        }

        let deleted = self.repository.delete_folder_cascade(&name)?;
        info!("Removed folder {} with {} bookmarks", name, deleted.len());

        if self.settings().last_folder() == name {
            self.remember_last_folder(UNSORTED);
        }

        if !deleted.is_empty() {
            for bookmark in deleted {
                self.publish(BookmarkEvent::BookmarkDeleted(bookmark));
            }
            self.broadcast();
        }
        self.notify(BookmarkEvent::FolderDeleted(name));
        Ok(true)
    }

    #[instrument(skip(self), level = "debug")]
    fn rename_folder(&self, before: &str, after: &str) -> ApplicationResult<()> {
        if after.is_empty() {
            return Err(ApplicationError::Validation(
                "New folder name must not be empty".to_string(),
            ));
        }
        if self.translator().resolve_fixed(before).is_some() {
            return Err(ApplicationError::Validation(format!(
                "Fixed folder {} cannot be renamed",
                before
            )));
        }
        // only custom rows are checked, a fixed name is accepted as target
        if self.repository.folder_exists(after)? {
            return Err(ApplicationError::FolderExists(after.to_string()));
        }

        let moved = self.repository.rename_folder(before, after)?;
        debug!("Renamed folder {} to {}, moved {} bookmarks", before, after, moved);

        if self.settings().last_folder() == before {
            self.remember_last_folder(after);
        }

        self.notify(BookmarkEvent::FolderRenamed {
            before: before.to_string(),
            after: after.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::bookmark_service::BookmarkService;
    use crate::application::services::lookup_service::LookupService;
    use crate::domain::folder::{BOOKMARKS_MENU, BOOKMARKS_TOOLBAR};
    use crate::util::testing::{setup_test_manager, TestManager};

    fn events(ctx: &TestManager) -> Vec<BookmarkEvent> {
        ctx.events.try_iter().collect()
    }

    #[test]
    fn given_fixed_names_when_is_folder_then_true() {
        let ctx = setup_test_manager();
        let manager = &ctx.manager;

        assert!(manager.is_folder(BOOKMARKS_MENU).unwrap());
        assert!(manager.is_folder("unsorted").unwrap());
        assert!(manager.is_folder("Bookmarks In ToolBar").unwrap());
        assert!(!manager.is_folder("work").unwrap());
    }

    #[test]
    fn given_new_folder_when_create_then_row_and_events() {
        let ctx = setup_test_manager();
        ctx.manager.create_folder("work").unwrap();

        assert!(ctx.manager.is_folder("work").unwrap());
        assert!(!ctx.manager.is_subfolder("work").unwrap());
        assert_eq!(
            events(&ctx),
            vec![
                BookmarkEvent::FolderAdded("work".to_string()),
                BookmarkEvent::StoreChanged
            ]
        );
    }

    #[test]
    fn given_fixed_or_existing_name_when_create_then_folder_exists() {
        let ctx = setup_test_manager();
        ctx.manager.create_folder("work").unwrap();
        let _ = events(&ctx);

        for name in [BOOKMARKS_MENU, "unsorted", "work"] {
            let result = ctx.manager.create_folder(name);
            assert!(
                matches!(result, Err(ApplicationError::FolderExists(_))),
                "{} should be rejected",
                name
            );
        }
        assert!(events(&ctx).is_empty());
    }

    #[test]
    fn given_empty_name_when_create_subfolder_then_validation() {
        let ctx = setup_test_manager();
        assert!(matches!(
            ctx.manager.create_subfolder(""),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn given_subfolder_when_created_then_flag_and_event() {
        let ctx = setup_test_manager();
        ctx.manager.create_subfolder("tools").unwrap();

        assert!(ctx.manager.is_subfolder("tools").unwrap());
        assert!(!ctx.manager.is_subfolder(BOOKMARKS_TOOLBAR).unwrap());
        assert_eq!(
            events(&ctx),
            vec![
                BookmarkEvent::SubfolderAdded("tools".to_string()),
                BookmarkEvent::StoreChanged
            ]
        );
    }

    #[test]
    fn given_protected_folder_when_remove_then_noop_without_events() {
        let ctx = setup_test_manager();
        let b = ctx
            .manager
            .save_bookmark("https://a.example", "A", None, BOOKMARKS_TOOLBAR)
            .unwrap();
        let _ = events(&ctx);

        assert!(!ctx.manager.remove_folder(BOOKMARKS_TOOLBAR).unwrap());
        assert!(!ctx.manager.remove_folder("Bookmarks In Menu").unwrap());
        assert!(events(&ctx).is_empty());
        assert!(ctx.manager.get_bookmark(b.id.unwrap()).unwrap().is_some());
    }

    #[test]
    fn given_folder_with_bookmarks_when_remove_then_cascade() {
        let ctx = setup_test_manager();
        for i in 0..3 {
            ctx.manager
                .save_bookmark(&format!("https://{}.example", i), "T", None, "work")
                .unwrap();
        }
        ctx.manager
            .save_bookmark("https://keep.example", "Keep", None, "other")
            .unwrap();
        assert_eq!(ctx.manager.settings().last_folder(), "other");
        let _ = events(&ctx);

        assert!(ctx.manager.remove_folder("work").unwrap());

        assert!(!ctx.manager.is_folder("work").unwrap());
        assert!(ctx.manager.get_folder_bookmarks("work").unwrap().is_empty());
        assert_eq!(ctx.manager.get_all_bookmarks().unwrap().len(), 1);

        let names: Vec<&str> = events(&ctx).iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec![
                "BookmarkDeleted",
                "BookmarkDeleted",
                "BookmarkDeleted",
                "StoreChanged",
                "FolderDeleted",
                "StoreChanged"
            ]
        );
    }

    #[test]
    fn given_last_folder_removed_when_remove_then_last_folder_reset() {
        let ctx = setup_test_manager();
        ctx.manager
            .save_bookmark("https://a.example", "A", None, "work")
            .unwrap();
        assert_eq!(ctx.manager.settings().last_folder(), "work");

        ctx.manager.remove_folder("work").unwrap();
        assert_eq!(ctx.manager.settings().last_folder(), UNSORTED);
    }

    #[test]
    fn given_empty_folder_when_remove_then_folder_deleted_event() {
        let ctx = setup_test_manager();
        ctx.manager.create_folder("empty").unwrap();
        let _ = events(&ctx);

        assert!(ctx.manager.remove_folder("empty").unwrap());
        assert_eq!(
            events(&ctx),
            vec![
                BookmarkEvent::FolderDeleted("empty".to_string()),
                BookmarkEvent::StoreChanged
            ]
        );
    }

    #[test]
    fn given_unknown_folder_when_remove_then_not_found() {
        let ctx = setup_test_manager();
        assert!(matches!(
            ctx.manager.remove_folder("nowhere"),
            Err(ApplicationError::FolderNotFound(_))
        ));
    }

    #[test]
    fn given_existing_target_when_rename_then_folder_exists() {
        let ctx = setup_test_manager();
        ctx.manager.create_folder("work").unwrap();
        ctx.manager.create_folder("projects").unwrap();
        let _ = events(&ctx);

        assert!(matches!(
            ctx.manager.rename_folder("work", "projects"),
            Err(ApplicationError::FolderExists(_))
        ));
        assert!(events(&ctx).is_empty());
    }

    #[test]
    fn given_fixed_source_or_empty_target_when_rename_then_validation() {
        let ctx = setup_test_manager();
        assert!(matches!(
            ctx.manager.rename_folder(BOOKMARKS_MENU, "menu"),
            Err(ApplicationError::Validation(_))
        ));
        assert!(matches!(
            ctx.manager.rename_folder("work", ""),
            Err(ApplicationError::Validation(_))
        ));
    }

    #[test]
    fn given_folder_with_bookmarks_when_rename_then_bookmarks_follow() {
        let ctx = setup_test_manager();
        let a = ctx
            .manager
            .save_bookmark("https://a.example", "A", None, "work")
            .unwrap();
        let b = ctx
            .manager
            .save_bookmark("https://b.example", "B", None, "work")
            .unwrap();
        let _ = events(&ctx);

        ctx.manager.rename_folder("work", "projects").unwrap();

        assert!(ctx.manager.is_folder("projects").unwrap());
        assert!(!ctx.manager.is_folder("work").unwrap());
        for id in [a.id.unwrap(), b.id.unwrap()] {
            let bm = ctx.manager.get_bookmark(id).unwrap().unwrap();
            assert_eq!(bm.folder, "projects");
        }
        assert_eq!(ctx.manager.settings().last_folder(), "projects");
        assert_eq!(
            events(&ctx),
            vec![
                BookmarkEvent::FolderRenamed {
                    before: "work".to_string(),
                    after: "projects".to_string()
                },
                BookmarkEvent::StoreChanged
            ]
        );
    }

    #[test]
    fn given_folders_when_listed_then_store_order() {
        let ctx = setup_test_manager();
        ctx.manager.create_folder("b").unwrap();
        ctx.manager.create_subfolder("a").unwrap();

        let folders = ctx.manager.folders().unwrap();
        let names: Vec<&str> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(folders[1].is_subfolder());
    }
}

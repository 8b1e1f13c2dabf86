// tests/test_bookmark_manager.rs
use std::sync::Arc;

use bmstore::application::error::ApplicationError;
use bmstore::application::{
    BookmarkService, ExportService, FolderService, LookupService, ReparentService,
};
use bmstore::config::Settings;
use bmstore::domain::event::BookmarkEvent;
use bmstore::domain::folder::{BOOKMARKS_MENU, BOOKMARKS_TOOLBAR, UNSORTED};
use bmstore::infrastructure::di::ServiceContainer;
use bmstore::infrastructure::events::ChannelEventSink;
use bmstore::infrastructure::repositories::sqlite::connection::init_pool;
use bmstore::util::testing::{init_test_env, test_icon};
use crossbeam::channel::Receiver;
use tempfile::TempDir;

struct Fixture {
    services: ServiceContainer,
    events: Receiver<BookmarkEvent>,
    _dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        init_test_env();
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            db_url: dir.path().join("bm.db").to_string_lossy().into_owned(),
            preferences_path: dir
                .path()
                .join("preferences.toml")
                .to_string_lossy()
                .into_owned(),
            pool_size: 1,
        };
        drop(init_pool(&settings.db_url, 1).unwrap());

        let (sink, events) = ChannelEventSink::new();
        let services = ServiceContainer::with_sink(&settings, Arc::new(sink)).unwrap();
        Self {
            services,
            events,
            _dir: dir,
        }
    }

    fn event_names(&self) -> Vec<&'static str> {
        self.events.try_iter().map(|e| e.name()).collect()
    }
}

#[test]
fn given_saved_bookmark_when_looked_up_by_url_then_found() {
    let fx = Fixture::new();
    let saved = fx
        .services
        .bookmark_service
        .save_bookmark("https://www.rust-lang.org", "Rust", None, "dev")
        .unwrap();

    let found = fx
        .services
        .lookup_service
        .get_bookmark_by_url("https://www.rust-lang.org")
        .unwrap()
        .unwrap();
    assert_eq!(found.id, saved.id);
    assert_eq!(found.title, "Rust");
    assert_eq!(found.folder, "dev");
    assert!(fx
        .services
        .bookmark_service
        .is_bookmarked("https://www.rust-lang.org")
        .unwrap());
}

#[test]
fn given_new_folder_when_saving_twice_then_folder_created_once() {
    let fx = Fixture::new();
    let service = &fx.services.bookmark_service;
    service
        .save_bookmark("https://a.example", "A", None, "reading")
        .unwrap();
    service
        .save_bookmark("https://b.example", "B", None, "reading")
        .unwrap();

    let folder_events = fx
        .event_names()
        .into_iter()
        .filter(|name| *name == "FolderAdded")
        .count();
    assert_eq!(folder_events, 1);
    assert_eq!(fx.services.folder_service.folders().unwrap().len(), 1);
}

#[test]
fn given_fixed_folder_names_when_create_folder_then_rejected() {
    let fx = Fixture::new();
    for name in [BOOKMARKS_MENU, UNSORTED] {
        assert!(matches!(
            fx.services.folder_service.create_folder(name),
            Err(ApplicationError::FolderExists(_))
        ));
    }
    assert!(fx.event_names().is_empty());
}

#[test]
fn given_same_url_in_menu_and_toolbar_when_lookup_then_menu_copy_wins() {
    let fx = Fixture::new();
    let service = &fx.services.bookmark_service;
    let url = "https://twice.example";
    service
        .save_bookmark(url, "toolbar copy", None, BOOKMARKS_TOOLBAR)
        .unwrap();
    service
        .save_bookmark(url, "menu copy", None, BOOKMARKS_MENU)
        .unwrap();

    let found = fx
        .services
        .lookup_service
        .get_bookmark_by_url(url)
        .unwrap()
        .unwrap();
    assert_eq!(found.title, "menu copy");
}

#[test]
fn given_folder_with_bookmarks_when_removed_then_rows_and_folder_gone() {
    let fx = Fixture::new();
    let service = &fx.services.bookmark_service;
    for i in 0..4 {
        service
            .save_bookmark(&format!("https://{}.example", i), "x", None, "work")
            .unwrap();
    }
    service
        .save_bookmark("https://tb.example", "tb", None, BOOKMARKS_TOOLBAR)
        .unwrap();
    let before = fx.services.lookup_service.get_all_bookmarks().unwrap().len();
    let _ = fx.event_names();

    assert!(fx.services.folder_service.remove_folder("work").unwrap());

    let after = fx.services.lookup_service.get_all_bookmarks().unwrap().len();
    assert_eq!(before - after, 4);
    assert!(!fx.services.folder_service.is_folder("work").unwrap());
    let names = fx.event_names();
    assert_eq!(names.iter().filter(|n| **n == "BookmarkDeleted").count(), 4);
    assert!(names.contains(&"FolderDeleted"));

    assert!(!fx
        .services
        .folder_service
        .remove_folder(BOOKMARKS_TOOLBAR)
        .unwrap());
    assert!(fx.event_names().is_empty());
    assert_eq!(
        fx.services
            .lookup_service
            .get_folder_bookmarks(BOOKMARKS_TOOLBAR)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn given_folder_only_edit_when_edit_then_other_fields_kept() {
    let fx = Fixture::new();
    let saved = fx
        .services
        .bookmark_service
        .save_bookmark("https://a.example", "A", Some(test_icon([1, 1, 1, 255])), "old")
        .unwrap();
    let id = saved.id.unwrap();

    fx.services
        .bookmark_service
        .edit_bookmark(id, "", "", "newFolder")
        .unwrap();

    let loaded = fx.services.lookup_service.get_bookmark(id).unwrap().unwrap();
    assert_eq!(loaded.folder, "newFolder");
    assert_eq!(loaded.title, "A");
    assert_eq!(loaded.url, "https://a.example");
    assert_eq!(loaded.icon, test_icon([1, 1, 1, 255]));
}

#[test]
fn given_taken_target_when_rename_then_fails_else_bookmarks_move() {
    let fx = Fixture::new();
    let folders = &fx.services.folder_service;
    let service = &fx.services.bookmark_service;
    service
        .save_bookmark("https://w1.example", "w1", None, "work")
        .unwrap();
    service
        .save_bookmark("https://w2.example", "w2", None, "work")
        .unwrap();
    folders.create_folder("projects").unwrap();

    assert!(matches!(
        folders.rename_folder("work", "projects"),
        Err(ApplicationError::FolderExists(_))
    ));

    folders.remove_folder("projects").unwrap();
    folders.rename_folder("work", "projects").unwrap();

    let moved = fx
        .services
        .lookup_service
        .get_folder_bookmarks("projects")
        .unwrap();
    assert_eq!(moved.len(), 2);
    assert!(fx
        .services
        .lookup_service
        .get_folder_bookmarks("work")
        .unwrap()
        .is_empty());
}

#[test]
fn given_batch_with_missing_id_when_removed_then_two_events_one_broadcast() {
    let fx = Fixture::new();
    let service = &fx.services.bookmark_service;
    let id1 = service
        .save_bookmark("https://1.example", "1", None, UNSORTED)
        .unwrap()
        .id
        .unwrap();
    let id3 = service
        .save_bookmark("https://3.example", "3", None, UNSORTED)
        .unwrap()
        .id
        .unwrap();
    let _ = fx.event_names();

    let deleted = service.remove_bookmarks(&[id1, 424242, id3]).unwrap();

    assert_eq!(deleted.len(), 2);
    assert_eq!(
        fx.event_names(),
        vec!["BookmarkDeleted", "BookmarkDeleted", "StoreChanged"]
    );
}

#[test]
fn given_deleted_bookmark_when_new_one_saved_then_ids_not_resequenced() {
    let fx = Fixture::new();
    let service = &fx.services.bookmark_service;
    let first = service
        .save_bookmark("https://1.example", "1", None, UNSORTED)
        .unwrap();
    let second = service
        .save_bookmark("https://2.example", "2", None, UNSORTED)
        .unwrap();

    service.remove_bookmark(first.id.unwrap()).unwrap();
    let third = service
        .save_bookmark("https://3.example", "3", None, UNSORTED)
        .unwrap();

    let still_there = fx
        .services
        .lookup_service
        .get_bookmark(second.id.unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(still_there.title, "2");
    assert!(third.id.unwrap() > second.id.unwrap());
}

#[test]
fn given_bookmark_moved_to_subfolder_when_read_then_in_subfolder() {
    let fx = Fixture::new();
    fx.services.folder_service.create_subfolder("tools").unwrap();
    let saved = fx
        .services
        .bookmark_service
        .save_bookmark("https://t.example", "t", None, UNSORTED)
        .unwrap();

    fx.services
        .reparent_service
        .change_bookmark_parent(saved.id.unwrap(), "tools", UNSORTED)
        .unwrap();
    let loaded = fx
        .services
        .lookup_service
        .get_bookmark(saved.id.unwrap())
        .unwrap()
        .unwrap();
    assert!(loaded.in_subfolder);

    fx.services
        .reparent_service
        .change_folder_parent("tools", false)
        .unwrap();
    let loaded = fx
        .services
        .lookup_service
        .get_bookmark(saved.id.unwrap())
        .unwrap()
        .unwrap();
    assert!(!loaded.in_subfolder);
}

#[test]
fn given_store_when_exported_to_memory_then_well_formed() {
    let fx = Fixture::new();
    fx.services
        .bookmark_service
        .save_bookmark("https://a.example/?q=1&r=2", "A <b>", None, "work")
        .unwrap();

    let mut out = Vec::new();
    fx.services.export_service.export_to_writer(&mut out).unwrap();
    let html = String::from_utf8(out).unwrap();

    assert!(html.contains("<DT><H3 TOOLBAR_SUBFOLDER=\"no\">work</H3>"));
    assert!(html.contains("<A HREF=\"https://a.example/?q=1&amp;r=2\">A &lt;b&gt;</A>"));
    assert!(html.ends_with("</DL><p>\n"));
}

#[test]
fn given_translated_menu_label_when_saved_then_exported_in_menu_block() {
    let fx = Fixture::new();
    fx.services
        .bookmark_service
        .save_bookmark("https://a.example", "A", None, "Bookmarks In Menu")
        .unwrap();

    let menu = fx
        .services
        .lookup_service
        .get_folder_bookmarks(BOOKMARKS_MENU)
        .unwrap();
    assert_eq!(menu.len(), 1);
    assert!(fx.services.folder_service.folders().unwrap().is_empty());

    let mut out = Vec::new();
    fx.services.export_service.export_to_writer(&mut out).unwrap();
    let html = String::from_utf8(out).unwrap();

    let menu_block = concat!(
        "    <DT><H3 TOOLBAR_SUBFOLDER=\"no\">bookmarksMenu</H3>\n",
        "    <DL><p>\n",
        "        <DT><A HREF=\"https://a.example\">A</A>\n",
        "    </DL><p>\n",
    );
    assert!(html.contains(menu_block));
    assert_eq!(html.matches("<DT><A ").count(), 1);
}

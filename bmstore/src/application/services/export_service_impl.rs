// src/application/services/export_service_impl.rs
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::bookmark_manager::BookmarkManager;
use crate::application::services::export_service::ExportService;
use crate::domain::folder::{FixedFolder, BOOKMARKS_MENU, BOOKMARKS_TOOLBAR};
use crate::domain::repositories::repository::{BookmarkRepository, FolderRepository};
use crate::infrastructure::netscape::NetscapeHtmlWriter;
use tracing::{info, instrument, warn};

impl<R: BookmarkRepository + FolderRepository> ExportService for BookmarkManager<R> {
    #[instrument(skip_all, level = "debug")]
    fn export_to_writer(&self, out: &mut dyn Write) -> ApplicationResult<()> {
        let menu = self.repository.get_by_folder(BOOKMARKS_MENU)?;
        let toolbar = self.repository.get_by_folder(BOOKMARKS_TOOLBAR)?;
        let mut custom = Vec::new();
        for folder in self.repository.get_all_folders()? {
            if FixedFolder::from_canonical(&folder.name).is_some() {
                continue;
            }
            let bookmarks = self.repository.get_by_folder(&folder.name)?;
            custom.push((folder, bookmarks));
        }
        let unfiled = self.repository.get_unfiled()?;

        let write = |out: &mut dyn Write| -> io::Result<()> {
            let mut writer = NetscapeHtmlWriter::new(out);
            writer.write_header()?;
            writer.write_folder(BOOKMARKS_MENU, false, &menu)?;
            writer.write_folder(BOOKMARKS_TOOLBAR, false, &toolbar)?;
            for (folder, bookmarks) in &custom {
                writer.write_folder(&folder.name, folder.is_subfolder(), bookmarks)?;
            }
            writer.write_unfiled(&unfiled)?;
            writer.write_footer()
        };
        write(out).map_err(|e| ApplicationError::Export(e.to_string()))
    }

    #[instrument(skip(self), level = "debug")]
    fn export_to_html(&self, path: &Path) -> ApplicationResult<()> {
        let mut html = Vec::new();
        self.export_to_writer(&mut html)?;

        let mut file = File::create(path).map_err(|e| {
            warn!("Cannot open {} for export: {}", path.display(), e);
            ApplicationError::Export(format!("{}: {}", path.display(), e))
        })?;
        file.write_all(&html).map_err(|e| {
            warn!("Writing export to {} failed: {}", path.display(), e);
            ApplicationError::Export(format!("{}: {}", path.display(), e))
        })?;

        info!("Exported bookmarks to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::bookmark_service::BookmarkService;
    use crate::application::services::folder_service::FolderService;
    use crate::domain::folder::UNSORTED;
    use crate::util::testing::setup_test_manager;
    use std::fs;

    #[test]
    fn given_folders_when_export_then_block_order() {
        let ctx = setup_test_manager();
        ctx.manager.create_subfolder("tools").unwrap();
        ctx.manager
            .save_bookmark("https://b1.example", "b1", None, BOOKMARKS_TOOLBAR)
            .unwrap();
        ctx.manager
            .save_bookmark("https://b2.example", "b2", None, "tools")
            .unwrap();
        ctx.manager
            .save_bookmark("https://b3.example", "b3", None, UNSORTED)
            .unwrap();

        let mut out = Vec::new();
        ctx.manager.export_to_writer(&mut out).unwrap();
        let html = String::from_utf8(out).unwrap();

        let body = html
            .split_once("<DL><p>\n")
            .map(|(_, rest)| rest)
            .unwrap();
        let expected = "    <DT><H3 TOOLBAR_SUBFOLDER=\"no\">bookmarksMenu</H3>
    <DL><p>
    </DL><p>
    <DT><H3 TOOLBAR_SUBFOLDER=\"no\">bookmarksToolbar</H3>
    <DL><p>
        <DT><A HREF=\"https://b1.example\">b1</A>
    </DL><p>
    <DT><H3 TOOLBAR_SUBFOLDER=\"yes\">tools</H3>
    <DL><p>
        <DT><A HREF=\"https://b2.example\">b2</A>
    </DL><p>
    <DT><A HREF=\"https://b3.example\">b3</A>
</DL><p>
";
        assert_eq!(body, expected);
        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
    }

    #[test]
    fn given_existing_file_when_export_then_truncated() {
        let ctx = setup_test_manager();
        let path = ctx.dir.path().join("bookmarks.html");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        ctx.manager.export_to_html(&path).unwrap();

        let html = fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE"));
        assert!(html.ends_with("</DL><p>\n"));
        assert!(!html.contains("xxx"));
    }

    #[test]
    fn given_unopenable_target_when_export_then_export_error() {
        let ctx = setup_test_manager();
        let path = ctx.dir.path().join("missing").join("bookmarks.html");
        assert!(matches!(
            ctx.manager.export_to_html(&path),
            Err(ApplicationError::Export(_))
        ));
        assert!(!path.exists());
    }
}

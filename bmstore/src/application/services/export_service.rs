// src/application/services/export_service.rs
use crate::application::error::ApplicationResult;
use std::fmt::Debug;
use std::io::Write;
use std::path::Path;

/// Netscape bookmark file export
pub trait ExportService: Send + Sync + Debug {
    /// Render all folders and bookmarks into `out`
    fn export_to_writer(&self, out: &mut dyn Write) -> ApplicationResult<()>;

    /// Write the export to `path`, replacing any existing file
    fn export_to_html(&self, path: &Path) -> ApplicationResult<()>;
}

// bmstore/src/application/mod.rs
pub mod error;
pub mod services;
pub mod settings;

// Re-export key services for easier imports
pub use services::bookmark_manager::BookmarkManager;
pub use services::bookmark_service::BookmarkService;
pub use services::export_service::ExportService;
pub use services::folder_service::FolderService;
pub use services::lookup_service::LookupService;
pub use services::reparent_service::ReparentService;

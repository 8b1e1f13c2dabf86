pub mod bookmark;
pub mod error;
pub mod error_context;
pub mod event;
pub mod folder;
pub mod icon;
pub mod preferences;
pub mod repositories;

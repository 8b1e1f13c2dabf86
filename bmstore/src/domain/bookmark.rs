// bmstore/src/domain/bookmark.rs
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::icon::Icon;
use derive_builder::Builder;
use std::fmt;
use url::Url;

/// Represents a bookmark domain entity
///
/// `in_subfolder` is derived from the folder registry whenever the bookmark is
/// read; it is never stored with the bookmark itself.
#[derive(Builder, Clone, PartialEq)]
#[builder(setter(into))]
pub struct Bookmark {
    #[builder(default)]
    pub id: Option<i32>,
    pub url: String,
    pub title: String,
    pub folder: String,
    pub icon: Icon,
    #[builder(default = "false")]
    pub in_subfolder: bool,
}

impl Bookmark {
    /// Create an unsaved bookmark after validating url, title and folder
    pub fn new<S: AsRef<str>>(url: S, title: S, folder: S, icon: Icon) -> DomainResult<Self> {
        let url = url.as_ref();
        let title = title.as_ref();
        let folder = folder.as_ref();

        validate_url(url)?;
        if title.is_empty() {
            return Err(DomainError::BookmarkOperationFailed(
                "Bookmark title must not be empty".to_string(),
            ));
        }
        if folder.is_empty() {
            return Err(DomainError::InvalidFolder(
                "Bookmark folder must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: None,
            url: url.to_string(),
            title: title.to_string(),
            folder: folder.to_string(),
            icon,
            in_subfolder: false,
        })
    }

    /// Rebuild a stored bookmark
    pub fn from_storage(
        id: i32,
        url: String,
        title: String,
        folder: String,
        icon: Icon,
        in_subfolder: bool,
    ) -> DomainResult<Self> {
        Ok(BookmarkBuilder::default()
            .id(Some(id))
            .url(url)
            .title(title)
            .folder(folder)
            .icon(icon)
            .in_subfolder(in_subfolder)
            .build()?)
    }

    /// Set the ID (typically used after storage)
    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }

    /// Apply a partial edit; empty arguments keep the current value
    pub fn with_edits(&self, title: &str, url: &str, folder: &str) -> DomainResult<Self> {
        if !url.is_empty() {
            validate_url(url)?;
        }
        let mut edited = self.clone();
        if !title.is_empty() {
            edited.title = title.to_string();
        }
        if !url.is_empty() {
            edited.url = url.to_string();
        }
        if !folder.is_empty() {
            edited.folder = folder.to_string();
        }
        Ok(edited)
    }

    /// Bookmarks with an empty folder or in `unsorted` are unfiled
    pub fn is_unfiled(&self) -> bool {
        self.folder.is_empty() || self.folder == crate::domain::folder::UNSORTED
    }
}

/// The url must be non-empty and absolute. It is stored exactly as given.
pub fn validate_url(url: &str) -> DomainResult<()> {
    if url.is_empty() {
        return Err(DomainError::InvalidUrl("URL must not be empty".to_string()));
    }
    Url::parse(url)
        .map(|_| ())
        .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.id.map_or("-".to_string(), |id| id.to_string()),
            self.title,
            self.url,
            self.folder
        )
    }
}

impl fmt::Debug for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bookmark")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("title", &self.title)
            .field("folder", &self.folder)
            .field("icon", &self.icon)
            .field("in_subfolder", &self.in_subfolder)
            .finish()
    }
}

/// Source of the page a user is currently looking at
pub trait BrowsingContext {
    fn url(&self) -> String;
    fn title(&self) -> String;
    fn icon(&self) -> Option<Icon>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon() -> Icon {
        Icon::from_rgba(1, 1, vec![255, 0, 0, 255]).unwrap()
    }

    #[test]
    fn given_valid_input_when_new_then_creates_unsaved_bookmark() {
        let bm = Bookmark::new("https://example.com", "Example", "work", icon()).unwrap();
        assert_eq!(bm.id, None);
        assert_eq!(bm.url, "https://example.com");
        assert_eq!(bm.folder, "work");
        assert!(!bm.in_subfolder);
    }

    #[test]
    fn given_empty_fields_when_new_then_rejected() {
        assert!(matches!(
            Bookmark::new("", "t", "f", icon()),
            Err(DomainError::InvalidUrl(_))
        ));
        assert!(Bookmark::new("https://example.com", "", "f", icon()).is_err());
        assert!(matches!(
            Bookmark::new("https://example.com", "t", "", icon()),
            Err(DomainError::InvalidFolder(_))
        ));
    }

    #[test]
    fn given_relative_url_when_new_then_rejected() {
        assert!(matches!(
            Bookmark::new("example.com/page", "t", "f", icon()),
            Err(DomainError::InvalidUrl(_))
        ));
    }

    #[test]
    fn given_url_with_trailing_slash_missing_when_new_then_stored_verbatim() {
        let bm = Bookmark::new("https://example.com", "Example", "work", icon()).unwrap();
        assert_eq!(bm.url, "https://example.com");
    }

    #[test]
    fn given_partial_edit_when_with_edits_then_only_non_empty_fields_change() {
        let mut bm = Bookmark::new("https://example.com", "Example", "work", icon()).unwrap();
        bm.set_id(3);

        let edited = bm.with_edits("", "", "projects").unwrap();
        assert_eq!(edited.id, Some(3));
        assert_eq!(edited.title, "Example");
        assert_eq!(edited.url, "https://example.com");
        assert_eq!(edited.folder, "projects");
        assert_eq!(edited.icon, bm.icon);
    }

    #[test]
    fn given_stored_row_when_from_storage_then_all_fields_kept() {
        let bm = Bookmark::from_storage(
            3,
            "https://example.com".to_string(),
            "Example".to_string(),
            "tools".to_string(),
            icon(),
            true,
        )
        .unwrap();
        assert_eq!(bm.id, Some(3));
        assert_eq!(bm.folder, "tools");
        assert!(bm.in_subfolder);
        assert_eq!(bm.icon, icon());
    }

    #[test]
    fn given_missing_field_when_build_then_domain_error() {
        let result: DomainResult<Bookmark> = BookmarkBuilder::default()
            .url("https://example.com")
            .build()
            .map_err(DomainError::from);
        assert!(matches!(
            result,
            Err(DomainError::BookmarkOperationFailed(_))
        ));
    }

    #[test]
    fn test_is_unfiled() {
        let mut bm = BookmarkBuilder::default()
            .id(Some(1))
            .url("https://example.com")
            .title("Example")
            .folder("")
            .icon(icon())
            .build()
            .unwrap();
        assert!(bm.is_unfiled());
        bm.folder = "unsorted".to_string();
        assert!(bm.is_unfiled());
        bm.folder = "bookmarksMenu".to_string();
        assert!(!bm.is_unfiled());
    }
}

// bmstore/src/domain/error.rs
use crate::domain::bookmark::BookmarkBuilderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid folder name: {0}")]
    InvalidFolder(String),

    #[error("Bookmark operation failed: {0}")]
    BookmarkOperationFailed(String),

    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),

    #[error("Folder operation failed: {0}")]
    FolderOperationFailed(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Icon conversion failed: {0}")]
    IconConversion(String),

    #[error("Preferences error: {0}")]
    Preferences(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Prefix the message with `context`, keeping the variant where it carries text
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        let context = context.into();
        match self {
            DomainError::BookmarkOperationFailed(msg) => {
                DomainError::BookmarkOperationFailed(format!("{}: {}", context, msg))
            }
            DomainError::FolderOperationFailed(msg) => {
                DomainError::FolderOperationFailed(format!("{}: {}", context, msg))
            }
            DomainError::RepositoryError(msg) => {
                DomainError::RepositoryError(format!("{}: {}", context, msg))
            }
            DomainError::Preferences(msg) => {
                DomainError::Preferences(format!("{}: {}", context, msg))
            }
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context, msg)),
            err => DomainError::Other(format!("{}: {}", context, err)),
        }
    }
}

impl From<BookmarkBuilderError> for DomainError {
    fn from(e: BookmarkBuilderError) -> Self {
        DomainError::BookmarkOperationFailed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_operation_error_when_context_then_prefixes_message() {
        let err = DomainError::BookmarkOperationFailed("disk full".to_string()).context("save");
        assert_eq!(err.to_string(), "Bookmark operation failed: save: disk full");
    }

    #[test]
    fn given_not_found_error_when_context_then_becomes_other() {
        let err = DomainError::BookmarkNotFound("7".to_string()).context("edit");
        assert!(matches!(err, DomainError::Other(_)));
        assert_eq!(err.to_string(), "Other error: edit: Bookmark not found: 7");
    }
}

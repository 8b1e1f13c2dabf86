// bmstore/src/application/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Bookmark not found with ID {0}")]
    BookmarkNotFound(i32),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Folder already exists: {0}")]
    FolderExists(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}

impl ApplicationError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            ApplicationError::Other(msg) => {
                ApplicationError::Other(format!("{}: {}", context.into(), msg))
            }
            ApplicationError::Domain(err) => ApplicationError::Domain(err.context(context)),
            ApplicationError::Validation(msg) => {
                ApplicationError::Validation(format!("{}: {}", context.into(), msg))
            }
            ApplicationError::Export(msg) => {
                ApplicationError::Export(format!("{}: {}", context.into(), msg))
            }
            err => ApplicationError::Other(format!("{}: {}", context.into(), err)),
        }
    }

    /// Validation failures coming up from the domain entities
    pub(crate) fn from_validation(err: DomainError) -> Self {
        match err {
            DomainError::InvalidUrl(_)
            | DomainError::InvalidFolder(_)
            | DomainError::BookmarkOperationFailed(_) => {
                ApplicationError::Validation(err.to_string())
            }
            other => ApplicationError::Domain(other),
        }
    }
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        ApplicationError::Domain(DomainError::Io(err))
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;

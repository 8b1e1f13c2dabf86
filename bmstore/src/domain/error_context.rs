use crate::cli::error::CliError;
use crate::domain::error::DomainError;

/// Prefix the error of a fallible storage call with what was being done
pub trait ErrorContext<T> {
    fn with_context<F>(self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce() -> String;
}

/// Same as [`ErrorContext`] for command handlers
pub trait CliErrorContext<T> {
    fn with_cli_context<F>(self, f: F) -> Result<T, CliError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<DomainError>,
{
    fn with_context<F>(self, f: F) -> Result<T, DomainError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().context(f()))
    }
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CliError>,
{
    fn with_cli_context<F>(self, f: F) -> Result<T, CliError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().context(f()))
    }
}

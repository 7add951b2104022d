//! Error types for calmon core operations.

use thiserror::Error;

/// Errors that can occur in calmon operations.
///
/// Store operations are total (unknown ids answer with `None`), so the
/// only fallible core surface today is input parsing.
#[derive(Error, Debug)]
pub enum CalmonError {
    #[error("Invalid time \"{0}\", expected HH:MM")]
    InvalidTime(String),
}

/// Result type alias for calmon operations.
pub type CalmonResult<T> = Result<T, CalmonError>;

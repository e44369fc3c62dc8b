use thiserror::Error;

use crate::models::RecordId;

/// Main error type for search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Check if the caller can re-prompt and carry on after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SearchError::UnknownStrategy(_) | SearchError::RecordNotFound(_)
        )
    }
}

//! Domain errors for the Orbit essay editor.

use thiserror::Error;

/// Domain-level errors that can occur in the editor backend.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Rewrite pattern failed to compile: {0}")]
    PatternCompilation(String),

    #[error("Essay not found: {0}")]
    EssayNotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DomainError {
    /// Whether the error stems from the caller rather than from the backend.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::EssayNotFound(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl From<regex::Error> for DomainError {
    fn from(err: regex::Error) -> Self {
        DomainError::PatternCompilation(err.to_string())
    }
}

use thiserror::Error;

/// Rule violations raised by the domain layer.
///
/// The message is the user-facing text; the server maps each variant onto an
/// HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Failure while moving a row inside its sort scope.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReorderError<E> {
    /// The adjacent position the row should swap with is empty.
    #[error("No sibling at position {sort_order}")]
    NoNeighbor { sort_order: i32 },

    #[error("Storage error: {0}")]
    Store(E),
}

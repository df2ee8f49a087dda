use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The store call itself failed. Never retried here.
    #[error("Transport error: {0}")]
    Transport(String),
    /// A stored record is missing a required attribute or holds a malformed value.
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RepositoryError {
    pub fn course_not_found(id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity_type: "Course",
            id: id.to_string(),
        }
    }

    pub fn course_exists(id: impl ToString) -> Self {
        RepositoryError::AlreadyExists {
            entity_type: "Course",
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

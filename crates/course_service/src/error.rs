use skillvo_core::course::CourseError;
use skillvo_core::events::EventError;
use skillvo_core::storage::{repository_error_to_status_code, RepositoryError};
use thiserror::Error;
use uuid::Uuid;

/// Errors returned by [`CourseService`](crate::service::CourseService).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Course not found: {0}")]
    NotFound(Uuid),
    #[error(transparent)]
    Validation(#[from] CourseError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    /// The write succeeded but the event could not be published.
    #[error(transparent)]
    Event(#[from] EventError),
}

impl ServiceError {
    /// HTTP status code a caller would answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 404,
            ServiceError::Validation(CourseError::InvalidTransition { .. }) => 409,
            ServiceError::Validation(_) => 400,
            ServiceError::Repository(err) => repository_error_to_status_code(err),
            ServiceError::Event(_) => 502,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `AlreadyExists` -> 409 (Conflict)
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `Transport`, `Decode`, `Serialization` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use skillvo_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::course_not_found("abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::Transport(_) => 500,
        RepositoryError::Decode(_) => 500,
        RepositoryError::Serialization(_) => 500,
    }
}

//! Error types for DynamoDB operations.

use skillvo_core::course::CourseError;
use skillvo_core::storage::RepositoryError;
use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Timeout waiting for table to become active")]
    TableActivationTimeout,

    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl DynamodbError {
    pub(crate) fn sdk(err: impl std::fmt::Display) -> Self {
        DynamodbError::AwsSdk(err.to_string())
    }
}

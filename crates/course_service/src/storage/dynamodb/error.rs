//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `skillvo_core::storage`.
//! Nothing is retried here; throttling surfaces as `Transport`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use skillvo_core::storage::RepositoryError;

const ENTITY_TYPE: &str = "Course";

/// What a conditional put was guarding against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutCondition {
    /// `attribute_not_exists`: a failed check means the course already exists.
    Create,
    /// `attribute_exists`: a failed check means the course is missing.
    Replace,
}

/// Errors raised before the request reached DynamoDB.
fn connection_error<E, R>(err: &SdkError<E, R>) -> Option<RepositoryError> {
    match err {
        SdkError::ConstructionFailure(_) => Some(RepositoryError::ConnectionFailed(
            "Failed to build request".to_string(),
        )),
        SdkError::TimeoutError(_) => Some(RepositoryError::ConnectionFailed(
            "Request timed out".to_string(),
        )),
        SdkError::DispatchFailure(failure) => Some(RepositoryError::ConnectionFailed(format!(
            "Dispatch failed: {:?}",
            failure
        ))),
        _ => None,
    }
}

fn transport(message: &str) -> RepositoryError {
    RepositoryError::Transport(message.to_string())
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    if let Some(mapped) = connection_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => transport("Table not found"),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            transport("Throughput exceeded")
        }
        GetItemError::RequestLimitExceeded(_) => transport("Request limit exceeded"),
        GetItemError::InternalServerError(_) => transport("DynamoDB internal server error"),
        err => RepositoryError::Transport(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    if let Some(mapped) = connection_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => transport("Table or index not found"),
        QueryError::ProvisionedThroughputExceededException(_) => transport("Throughput exceeded"),
        QueryError::RequestLimitExceeded(_) => transport("Request limit exceeded"),
        QueryError::InternalServerError(_) => transport("DynamoDB internal server error"),
        err => RepositoryError::Transport(format!("Query failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    if let Some(mapped) = connection_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => transport("Table not found"),
        ScanError::ProvisionedThroughputExceededException(_) => transport("Throughput exceeded"),
        ScanError::RequestLimitExceeded(_) => transport("Request limit exceeded"),
        ScanError::InternalServerError(_) => transport("DynamoDB internal server error"),
        err => RepositoryError::Transport(format!("Scan failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    condition: PutCondition,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(mapped) = connection_error(&err) {
        return mapped;
    }
    let id = id.into();
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => match condition {
            PutCondition::Create => RepositoryError::AlreadyExists {
                entity_type: ENTITY_TYPE,
                id,
            },
            PutCondition::Replace => RepositoryError::NotFound {
                entity_type: ENTITY_TYPE,
                id,
            },
        },
        PutItemError::ResourceNotFoundException(_) => transport("Table not found"),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            transport("Throughput exceeded")
        }
        PutItemError::RequestLimitExceeded(_) => transport("Request limit exceeded"),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            transport("Item collection size limit exceeded")
        }
        PutItemError::TransactionConflictException(_) => transport("Transaction conflict"),
        PutItemError::InternalServerError(_) => transport("DynamoDB internal server error"),
        err => RepositoryError::Transport(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    id: impl Into<String>,
) -> RepositoryError {
    if let Some(mapped) = connection_error(&err) {
        return mapped;
    }
    match err.into_service_error() {
        DeleteItemError::ConditionalCheckFailedException(_) => RepositoryError::NotFound {
            entity_type: ENTITY_TYPE,
            id: id.into(),
        },
        DeleteItemError::ResourceNotFoundException(_) => transport("Table not found"),
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            transport("Throughput exceeded")
        }
        DeleteItemError::RequestLimitExceeded(_) => transport("Request limit exceeded"),
        DeleteItemError::TransactionConflictException(_) => transport("Transaction conflict"),
        DeleteItemError::InternalServerError(_) => transport("DynamoDB internal server error"),
        err => RepositoryError::Transport(format!("DeleteItem failed: {:?}", err)),
    }
}

//! Storage backend implementations.
//!
//! Concrete implementations of `skillvo_core::storage::CourseRepository`.
//!
//! - `dynamodb`: AWS DynamoDB, the production backend
//! - `inmemory`: process-local store for tests and local runs

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::DynamoDbCourseRepository;
pub use inmemory::InMemoryCourseRepository;

//! In-memory storage backend for testing.
//!
//! Stores courses in a `HashMap` wrapped in `Arc<RwLock<_>>`. Listing
//! evaluates the same query plan the DynamoDB backend sends to the store, so
//! both backends answer a filter identically.
//!
//! # Example
//!
//! ```rust,ignore
//! use course_service::storage::inmemory::InMemoryCourseRepository;
//!
//! let repo = InMemoryCourseRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryCourseRepository;

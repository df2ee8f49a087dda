//! DynamoDB storage backend.
//!
//! Courses live in a single table keyed by `courseId`, with four global
//! secondary indexes: `TenantIdIndex` (tenantId, marketplace),
//! `StatusIndex` (status), `LevelIndex` (level) and `TagsIndex` (tag).

mod conversions;
mod error;
mod repository;
mod request;

pub use conversions::{course_to_item, item_to_course};
pub use repository::DynamoDbCourseRepository;

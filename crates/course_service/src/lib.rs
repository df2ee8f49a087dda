//! Course catalog service.
//!
//! The imperative shell around `skillvo_core`: DynamoDB and in-memory
//! repositories, SQS event publishing, configuration and the
//! [`CourseService`](service::CourseService) that ties them together.

pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod output;
pub mod service;
pub mod storage;

pub use config::Config;
pub use error::ServiceError;
pub use service::CourseService;

//! Functional core for the skillvo course catalog.
//!
//! Pure domain types, validation, state transitions, domain events and the
//! filter-to-query-plan translation. Everything here is free of I/O; the
//! storage and messaging backends live in `course_service`.

pub mod course;
pub mod events;
pub mod query;
pub mod storage;

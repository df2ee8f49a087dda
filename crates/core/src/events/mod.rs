//! Domain events emitted by the course service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::course::{Course, LearningMode, Level};

/// Envelope around every published event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEvent {
    pub event_id: Uuid,
    pub occurred_on: DateTime<Utc>,
    pub payload: CourseEvent,
}

impl DomainEvent {
    pub fn new(payload: CourseEvent) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_on: Utc::now(),
            payload,
        }
    }

    /// Name of the event type, as written in the `type` tag.
    pub fn event_type(&self) -> &'static str {
        match self.payload {
            CourseEvent::CourseCreated(_) => "CourseCreated",
            CourseEvent::CoursePublished(_) => "CoursePublished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CourseEvent {
    CourseCreated(CourseSnapshot),
    CoursePublished(CourseSnapshot),
}

impl CourseEvent {
    pub fn created(course: &Course) -> Self {
        Self::CourseCreated(CourseSnapshot::from(course))
    }

    pub fn published(course: &Course) -> Self {
        Self::CoursePublished(CourseSnapshot::from(course))
    }
}

/// The course fields carried by course events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSnapshot {
    pub course_id: Uuid,
    pub tenant_id: String,
    pub title: String,
    pub description: String,
    pub topic_code: String,
    pub level: Level,
    pub learning_mode: LearningMode,
    /// Author display names.
    pub authors: Vec<String>,
}

impl From<&Course> for CourseSnapshot {
    fn from(course: &Course) -> Self {
        Self {
            course_id: course.id,
            tenant_id: course.tenant_id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            topic_code: course.topic_code.clone(),
            level: course.level,
            learning_mode: course.learning_mode,
            authors: course.author_names(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Failed to serialize event: {0}")]
    Serialization(String),
    #[error("Failed to deliver event: {0}")]
    Delivery(String),
}

impl From<serde_json::Error> for EventError {
    fn from(err: serde_json::Error) -> Self {
        EventError::Serialization(err.to_string())
    }
}

/// Sink for domain events.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &DomainEvent) -> Result<(), EventError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::course::Author;

    fn course() -> Course {
        Course::new("t1", "Rust 101", Level::Beginner).with_author(Author {
            id: Uuid::nil(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        })
    }

    #[test]
    fn test_snapshot_from_course() {
        let course = course();
        let snapshot = CourseSnapshot::from(&course);

        assert_eq!(snapshot.course_id, course.id);
        assert_eq!(snapshot.authors, vec!["Ada Lovelace".to_string()]);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = DomainEvent::new(CourseEvent::published(&course()));
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["payload"]["type"], "CoursePublished");
        assert_eq!(json["payload"]["tenantId"], "t1");
        assert_eq!(json["payload"]["level"], "BEGINNER");
        assert!(json["eventId"].is_string());
        assert_eq!(event.event_type(), "CoursePublished");
    }

    #[test]
    fn test_event_round_trip() {
        let event = DomainEvent::new(CourseEvent::created(&course()));
        let json = serde_json::to_string(&event).unwrap();
        let parsed: DomainEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, event);
    }
}

use async_trait::async_trait;

use skillvo_core::events::{DomainEvent, EventError, EventPublisher};

/// Logs domain events instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingEventPublisher;

#[async_trait]
impl EventPublisher for LoggingEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), EventError> {
        let body = serde_json::to_string(event)?;
        tracing::info!(
            event_id = %event.event_id,
            event_type = event.event_type(),
            body = %body,
            "Domain event (not delivered)"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillvo_core::course::{Course, Level};
    use skillvo_core::events::CourseEvent;

    #[tokio::test]
    async fn test_logging_publisher_accepts_events() {
        let course = Course::new("t1", "Rust 101", Level::Beginner);
        let event = DomainEvent::new(CourseEvent::created(&course));

        assert!(LoggingEventPublisher.publish(&event).await.is_ok());
    }
}

use async_trait::async_trait;
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::MessageAttributeValue;
use aws_sdk_sqs::Client;

use skillvo_core::events::{DomainEvent, EventError, EventPublisher};

/// Publishes domain events to an SQS queue.
///
/// The message body is the JSON event; the event type is also attached as
/// the `eventType` message attribute so consumers can filter without parsing.
/// Failures are returned, not logged; the caller owns the error log.
pub struct SqsEventPublisher {
    client: Client,
    queue_url: String,
}

impl SqsEventPublisher {
    pub fn new(client: Client, queue_url: impl Into<String>) -> Self {
        Self {
            client,
            queue_url: queue_url.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for SqsEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), EventError> {
        let body = serde_json::to_string(event)?;
        let event_type = MessageAttributeValue::builder()
            .data_type("String")
            .string_value(event.event_type())
            .build()
            .map_err(|e| EventError::Delivery(e.to_string()))?;

        let output = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .message_attributes("eventType", event_type)
            .send()
            .await
            .map_err(|e| EventError::Delivery(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(
            event_id = %event.event_id,
            event_type = event.event_type(),
            message_id = output.message_id().unwrap_or_default(),
            "Published domain event"
        );
        Ok(())
    }
}

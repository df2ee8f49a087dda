//! Domain event publishers.
//!
//! Implementations of `skillvo_core::events::EventPublisher`:
//!
//! - [`SqsEventPublisher`]: sends each event as a JSON message to an SQS queue
//! - [`LoggingEventPublisher`]: logs events, used when no queue is configured
//! - [`InMemoryEventPublisher`]: records events, used in tests

mod logging;
mod memory;
mod sqs;

pub use logging::LoggingEventPublisher;
pub use memory::InMemoryEventPublisher;
pub use sqs::SqsEventPublisher;

use std::sync::Arc;

use skillvo_core::events::EventPublisher;

use crate::config::Config;

/// Builds the publisher selected by configuration.
pub async fn publisher_from_config(config: &Config) -> Arc<dyn EventPublisher> {
    match &config.events_queue_url {
        Some(queue_url) => {
            let sdk_config = config.aws_config().await;
            Arc::new(SqsEventPublisher::new(
                aws_sdk_sqs::Client::new(&sdk_config),
                queue_url.clone(),
            ))
        }
        None => {
            tracing::info!("No events queue configured, domain events will only be logged");
            Arc::new(LoggingEventPublisher)
        }
    }
}

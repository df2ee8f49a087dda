use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use skillvo_core::events::{DomainEvent, EventError, EventPublisher};

/// Records published events in memory.
///
/// Can be switched to fail every publish, to exercise error paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEventPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
    fail: bool,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher whose every publish fails with `EventError::Delivery`.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns a snapshot of the events published so far.
    pub async fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().await.clone()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), EventError> {
        if self.fail {
            return Err(EventError::Delivery("publisher unavailable".to_string()));
        }
        self.events.lock().await.push(event.clone());
        Ok(())
    }
}

use async_trait::async_trait;
use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::ShopError;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the structured log instead of a message broker.
#[derive(Debug)]
pub struct LogPublisher {
    source: String,
}

impl LogPublisher {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), ShopError> {
        let json = serde_json::to_string(event)?;
        info!(source = self.source.as_str(), event_id = event.event_id.as_str(),
            name = event.name.as_str(), key = event.key.as_str(), event = json.as_str(), "domain event");
        Ok(())
    }
}

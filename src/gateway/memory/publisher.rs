use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::events::DomainEvent;
use crate::core::library::{ShopError, ShopResult};
use crate::gateway::events::EventPublisher;

// MemoryPublisher keeps published events in process; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> ShopResult<Vec<DomainEvent>> {
        let events = self.events.lock()
            .map_err(|err| ShopError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        Ok(events.clone())
    }
}

#[async_trait]
impl EventPublisher for MemoryPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), ShopError> {
        let mut events = self.events.lock()
            .map_err(|err| ShopError::runtime(format!("event buffer poisoned {:?}", err).as_str(), None))?;
        events.push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;

    #[tokio::test]
    async fn test_should_keep_published_events() {
        let publisher = MemoryPublisher::new();
        let observer = publisher.clone();
        let event = DomainEvent::added("name", "group", "key", &HashMap::new(), &"data").expect("build event");
        publisher.publish(&event).await.expect("should publish");
        let events = observer.events().expect("should return events");
        assert_eq!(vec![event], events);
    }
}

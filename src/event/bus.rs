use tokio::sync::broadcast;
use tracing::debug;

use super::events::TrackerEvent;

pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Fan-out of tracker events to every live subscriber
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<TrackerEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes to current subscribers; having none is not an error
    pub fn emit(&self, event: TrackerEvent) {
        match self.sender.send(event) {
            Ok(receivers) => debug!(receivers, "Tracker event emitted"),
            Err(_) => debug!("Tracker event emitted with no receivers"),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

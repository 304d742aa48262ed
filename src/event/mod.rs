// Tracker event distribution
//
// Events produced by the polling pipeline are published on a broadcast bus
// that websocket clients subscribe to.

pub use bus::{EventBus, DEFAULT_EVENT_CAPACITY};
pub use events::TrackerEvent;

mod bus;
mod events;

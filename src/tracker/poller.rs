use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, instrument};

use super::pipeline::Tracker;
use crate::event::{EventBus, TrackerEvent};
use crate::snapshot::SnapshotSource;

/// Configuration for the snapshot polling task
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Time between two snapshot reads
    pub tick_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
        }
    }
}

/// Starts the background loop that reads one snapshot per tick
#[instrument(skip(source, tracker, event_bus))]
pub async fn start_polling_task(
    source: Arc<dyn SnapshotSource>,
    tracker: Arc<Tracker>,
    event_bus: EventBus,
    config: PollConfig,
) {
    info!(
        tick_interval_ms = config.tick_interval.as_millis() as u64,
        "Starting snapshot polling task"
    );

    let mut ticker = interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        poll_once(source.as_ref(), &tracker, &event_bus).await;
    }
}

/// Runs a single tick; an unavailable or failing source makes it a no-op
pub async fn poll_once(
    source: &dyn SnapshotSource,
    tracker: &Tracker,
    event_bus: &EventBus,
) -> Vec<TrackerEvent> {
    if !source.is_live().await {
        return Vec::new();
    }

    let snapshot = match source.snapshot().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            debug!(error = %e, "Snapshot unavailable, skipping tick");
            return Vec::new();
        }
    };

    let events = tracker.process_snapshot(&snapshot, Utc::now()).await;
    for event in &events {
        log_event(event);
        event_bus.emit(event.clone());
    }
    events
}

fn log_event(event: &TrackerEvent) {
    match event {
        TrackerEvent::MonsterKilled {
            unit_id,
            category,
            total_kills,
        } => debug!(unit_id, %category, total_kills, "Monster killed"),
        TrackerEvent::ItemFiltered { name } => debug!(item = %name, "Consumable filtered"),
        other => info!(event = ?other, "Tracker event"),
    }
}

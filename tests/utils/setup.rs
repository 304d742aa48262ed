use axum::Router;
use chrono::{DateTime, TimeDelta, Utc};
use std::sync::Arc;
use std::time::Duration;

use runtracker::{
    api,
    event::TrackerEvent,
    snapshot::Snapshot,
    store::{ProfileRepository, ViewSettings, DEFAULT_PROFILE},
    AppState, EventBus, InMemoryProfileRepository, StaticTables, Tracker, TrackerStore,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub store: Arc<TrackerStore>,
    pub tracker: Tracker,
    pub tables: Arc<StaticTables>,
    pub event_bus: EventBus,
    /// Simulated clock, advanced by every `feed`
    pub clock: DateTime<Utc>,
    pub tick: TimeDelta,
}

pub struct TestSetupBuilder {
    repository: Option<Arc<dyn ProfileRepository>>,
    pickup_window: Option<Duration>,
    tick: TimeDelta,
}

#[allow(dead_code)]
impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            repository: None,
            pickup_window: None,
            tick: TimeDelta::milliseconds(200),
        }
    }

    pub fn with_repository(mut self, repository: Arc<dyn ProfileRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn with_pickup_window(mut self, window: Duration) -> Self {
        self.pickup_window = Some(window);
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryProfileRepository::new()));
        let tables = Arc::new(StaticTables::default());
        let store = Arc::new(TrackerStore::new(repository, ViewSettings::default()));
        store
            .load_profile(DEFAULT_PROFILE)
            .await
            .expect("default profile should load");

        let mut builder = Tracker::builder(Arc::clone(&store), Arc::clone(&tables));
        if let Some(window) = self.pickup_window {
            builder = builder.with_pickup_window(window);
        }

        TestSetup {
            store,
            tracker: builder.build(),
            tables,
            event_bus: EventBus::default(),
            clock: Utc::now(),
            tick: self.tick,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestSetup {
    /// Processes each snapshot one tick apart and returns every event produced
    pub async fn feed(&mut self, snapshots: Vec<Snapshot>) -> Vec<TrackerEvent> {
        let mut events = Vec::new();
        for snapshot in snapshots {
            self.clock += self.tick;
            events.extend(self.tracker.process_snapshot(&snapshot, self.clock).await);
        }
        events
    }

    pub fn advance(&mut self, by: TimeDelta) {
        self.clock += by;
    }

    pub fn app(&self) -> Router {
        api::router(AppState::new(
            Arc::clone(&self.store),
            Arc::clone(&self.tables),
            self.event_bus.clone(),
        ))
    }
}

// Library crate for the run tracker
// This file exposes the public API for integration tests

pub mod api;
pub mod config;
pub mod event;
pub mod experience;
pub mod shared;
pub mod snapshot;
pub mod store;
pub mod tables;
pub mod tracker;

// Re-export commonly used types for easier access in tests
pub use config::{ConfigError, TrackerConfig};
pub use event::{EventBus, TrackerEvent};
pub use experience::ExperienceEstimator;
pub use shared::{AppError, AppState};
pub use snapshot::{DetachedSource, ScriptedSource, Snapshot, SnapshotSource};
pub use store::{FileProfileRepository, InMemoryProfileRepository, ProfileRepository, TrackerStore};
pub use tables::StaticTables;
pub use tracker::{PollConfig, Tracker};

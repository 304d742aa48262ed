pub mod filter;
pub mod items;
pub mod kills;
pub mod pipeline;
pub mod poller;
pub mod run_state;

pub use filter::ConsumableFilter;
pub use items::{GroundWindow, ItemBaseline, ItemTracker, PickupOutcome, DEFAULT_PICKUP_WINDOW};
pub use kills::{count_new_kills, CorpseRegistry};
pub use pipeline::{Tracker, TrackerBuilder};
pub use poller::{poll_once, start_polling_task, PollConfig};
pub use run_state::{observe_run_state, RunPhase, RunTransition};

/// Diff state scoped to a single run, replaced wholesale when a run starts
#[derive(Debug, Clone, Default)]
pub struct RunRegistries {
    pub corpses: CorpseRegistry,
    pub baseline: ItemBaseline,
    pub ground_window: GroundWindow,
}

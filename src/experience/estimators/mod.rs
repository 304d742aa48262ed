pub mod current_run;
pub mod history;
pub mod level_band;
pub mod session;

pub use current_run::CurrentRunEstimator;
pub use history::HistoryEstimator;
pub use level_band::LevelBandEstimator;
pub use session::SessionEstimator;

use std::collections::VecDeque;

/// Priority constants for runs-to-next-level estimators.
/// Lower values are tried first; the first estimator that produces a
/// result wins.
pub mod estimator_priority {
    /// Average over the stored per-run history
    pub const HISTORY: u32 = 100;
    /// Session XP spread over completed runs
    pub const SESSION: u32 = 200;
    /// Projection from the run in progress
    pub const CURRENT_RUN: u32 = 300;
    /// Assumed XP per run for levels 85 and up
    pub const HIGH_LEVEL_BAND: u32 = 400;
    /// Assumed XP per run below level 85
    pub const LOW_LEVEL_BAND: u32 = 500;
}

/// What an estimator may look at
#[derive(Debug, Clone, Copy)]
pub struct EstimateInput<'a> {
    pub level: u32,
    pub xp_to_next_level: u64,
    pub xp_run_history: &'a VecDeque<u64>,
    pub session_xp_gained: u64,
    pub completed_runs: usize,
    pub run_active: bool,
    pub xp_this_run: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunsEstimate {
    pub runs: u64,
    pub average_xp_per_run: u64,
    pub method: String,
    /// Lower-confidence projections are also reported as `estimated_runs_to_next`
    pub projected: bool,
}

pub trait RunsEstimator: Send + Sync {
    fn estimate(&self, input: &EstimateInput) -> Option<RunsEstimate>;

    fn priority(&self) -> u32;
}

/// Whole runs of `per_run` XP that fit into `xp_to_next_level`
pub(crate) fn whole_runs(xp_to_next_level: u64, per_run: u64) -> u64 {
    xp_to_next_level.checked_div(per_run).unwrap_or_default()
}

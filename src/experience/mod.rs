pub mod estimators;
pub mod levels;

pub use estimators::{
    estimator_priority, CurrentRunEstimator, EstimateInput, HistoryEstimator, LevelBandEstimator,
    RunsEstimate, RunsEstimator, SessionEstimator,
};
pub use levels::{xp_to_next_level, MAX_LEVEL};

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

use crate::snapshot::PlayerStats;
use crate::store::{ProfileData, TrackerState};
use crate::tables::StaticTables;

pub const NO_DATA: &str = "No data";
pub const MAX_LEVEL_REACHED: &str = "Max level reached";
pub const INSUFFICIENT_DATA: &str = "Insufficient data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub from: u32,
    pub to: u32,
}

/// Tracks XP deltas per snapshot and keeps the runs-to-next-level estimate current
pub struct ExperienceEstimator {
    tables: Arc<StaticTables>,
    estimators: Vec<Arc<dyn RunsEstimator>>,
}

impl ExperienceEstimator {
    pub fn builder(tables: Arc<StaticTables>) -> ExperienceEstimatorBuilder {
        ExperienceEstimatorBuilder::new(tables)
    }

    pub fn new(tables: Arc<StaticTables>) -> Self {
        Self::builder(tables).build()
    }

    /// Folds one snapshot's player stats into the XP state.
    ///
    /// The first non-zero reading only initializes; later increases count toward
    /// both the session and the current run.
    pub fn observe(
        &self,
        state: &mut TrackerState,
        player: &PlayerStats,
        now: DateTime<Utc>,
    ) -> Option<LevelUp> {
        let session = &state.session;
        let profile = &mut state.profile;
        let xp = &mut profile.xp_tracking;
        let mut level_up = None;

        if xp.current_xp == 0 && player.experience > 0 {
            xp.run_start_xp = player.experience;
            info!(
                level = player.level,
                experience = player.experience,
                "XP tracking initialized"
            );
        } else if player.experience > xp.current_xp {
            let gained = player.experience - xp.current_xp;
            xp.session_xp_gained += gained;
            xp.xp_this_run += gained;
            debug!(
                gained,
                session = xp.session_xp_gained,
                this_run = xp.xp_this_run,
                "XP gained"
            );

            if player.level > xp.current_level {
                info!(from = xp.current_level, to = player.level, "Level up");
                level_up = Some(LevelUp {
                    from: xp.current_level,
                    to: player.level,
                });
            }
        }

        xp.current_xp = player.experience;
        xp.current_level = player.level;
        xp.xp_to_next_level = xp_to_next_level(&self.tables, player.experience, player.level);

        let hours = (now - session.session_started_at).num_milliseconds() as f64 / 3_600_000.0;
        xp.xp_per_hour = if hours > 0.0 {
            xp.session_xp_gained as f64 / hours
        } else {
            0.0
        };

        self.estimate_runs(profile, session.run_active());
        level_up
    }

    /// First estimator in priority order that has enough data decides
    fn estimate_runs(&self, profile: &mut ProfileData, run_active: bool) {
        let xp = &mut profile.xp_tracking;
        xp.runs_to_next_level = 0;
        xp.estimated_runs_to_next = 0;
        xp.runs_calculation_method = NO_DATA.to_string();

        if xp.current_level >= MAX_LEVEL || xp.xp_to_next_level == 0 {
            xp.runs_calculation_method = MAX_LEVEL_REACHED.to_string();
            return;
        }

        let input = EstimateInput {
            level: xp.current_level,
            xp_to_next_level: xp.xp_to_next_level,
            xp_run_history: &profile.xp_run_history,
            session_xp_gained: xp.session_xp_gained,
            completed_runs: profile.run_times.len(),
            run_active,
            xp_this_run: xp.xp_this_run,
        };

        match self.estimators.iter().find_map(|e| e.estimate(&input)) {
            Some(estimate) => {
                xp.runs_to_next_level = estimate.runs;
                xp.average_xp_per_run = estimate.average_xp_per_run;
                if estimate.projected {
                    xp.estimated_runs_to_next = estimate.runs;
                }
                xp.runs_calculation_method = estimate.method;
            }
            None => {
                xp.runs_calculation_method = INSUFFICIENT_DATA.to_string();
            }
        }
    }
}

pub struct ExperienceEstimatorBuilder {
    tables: Arc<StaticTables>,
    estimators: Vec<Arc<dyn RunsEstimator>>,
}

impl ExperienceEstimatorBuilder {
    fn new(tables: Arc<StaticTables>) -> Self {
        Self {
            tables,
            estimators: vec![
                Arc::new(HistoryEstimator::new()),
                Arc::new(SessionEstimator::new()),
                Arc::new(CurrentRunEstimator::new()),
                Arc::new(LevelBandEstimator::high_levels()),
                Arc::new(LevelBandEstimator::low_levels()),
            ],
        }
    }

    pub fn with_estimator(mut self, estimator: Arc<dyn RunsEstimator>) -> Self {
        self.estimators.push(estimator);
        self
    }

    /// Drops the built-in strategies so only explicitly added ones run
    pub fn without_defaults(mut self) -> Self {
        self.estimators.clear();
        self
    }

    pub fn build(mut self) -> ExperienceEstimator {
        self.estimators.sort_by_key(|e| e.priority());
        ExperienceEstimator {
            tables: self.tables,
            estimators: self.estimators,
        }
    }
}

use super::{estimator_priority, whole_runs, EstimateInput, RunsEstimate, RunsEstimator};

/// Treats the run in progress as representative
pub struct CurrentRunEstimator;

impl CurrentRunEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CurrentRunEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RunsEstimator for CurrentRunEstimator {
    fn estimate(&self, input: &EstimateInput) -> Option<RunsEstimate> {
        if !input.run_active || input.xp_this_run == 0 {
            return None;
        }

        Some(RunsEstimate {
            runs: whole_runs(input.xp_to_next_level, input.xp_this_run),
            average_xp_per_run: input.xp_this_run,
            method: "Current run estimate".to_string(),
            projected: true,
        })
    }

    fn priority(&self) -> u32 {
        estimator_priority::CURRENT_RUN
    }
}

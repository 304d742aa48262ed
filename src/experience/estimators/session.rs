use super::{estimator_priority, whole_runs, EstimateInput, RunsEstimate, RunsEstimator};

/// Spreads this session's XP evenly over the completed runs
pub struct SessionEstimator;

impl SessionEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SessionEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RunsEstimator for SessionEstimator {
    fn estimate(&self, input: &EstimateInput) -> Option<RunsEstimate> {
        if input.completed_runs == 0 || input.session_xp_gained == 0 {
            return None;
        }

        let average = input.session_xp_gained / input.completed_runs as u64;
        if average == 0 {
            return None;
        }

        Some(RunsEstimate {
            runs: whole_runs(input.xp_to_next_level, average),
            average_xp_per_run: average,
            method: format!("Session ({} runs)", input.completed_runs),
            projected: false,
        })
    }

    fn priority(&self) -> u32 {
        estimator_priority::SESSION
    }
}

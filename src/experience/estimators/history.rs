use super::{estimator_priority, whole_runs, EstimateInput, RunsEstimate, RunsEstimator};

const MIN_SAMPLES: usize = 3;

/// Averages the non-zero entries of the per-run XP history
pub struct HistoryEstimator;

impl HistoryEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HistoryEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RunsEstimator for HistoryEstimator {
    fn estimate(&self, input: &EstimateInput) -> Option<RunsEstimate> {
        let samples: Vec<u64> = input
            .xp_run_history
            .iter()
            .copied()
            .filter(|xp| *xp > 0)
            .collect();
        if samples.len() < MIN_SAMPLES {
            return None;
        }

        let average = samples.iter().sum::<u64>() / samples.len() as u64;
        if average == 0 {
            return None;
        }

        Some(RunsEstimate {
            runs: whole_runs(input.xp_to_next_level, average),
            average_xp_per_run: average,
            method: format!("History ({} runs)", samples.len()),
            projected: false,
        })
    }

    fn priority(&self) -> u32 {
        estimator_priority::HISTORY
    }
}

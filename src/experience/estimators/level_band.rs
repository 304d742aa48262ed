use super::{estimator_priority, whole_runs, EstimateInput, RunsEstimate, RunsEstimator};

pub const HIGH_LEVEL_FLOOR: u32 = 85;

/// (minimum level, assumed XP per run), highest band first
const HIGH_LEVEL_BANDS: &[(u32, u64)] = &[
    (96, 100_000_000),
    (93, 75_000_000),
    (90, 50_000_000),
    (87, 30_000_000),
    (85, 20_000_000),
];

const LOW_LEVEL_BANDS: &[(u32, u64)] = &[
    (70, 10_000_000),
    (50, 5_000_000),
    (30, 1_000_000),
    (0, 100_000),
];

/// Falls back to a fixed XP-per-run assumption for the character's level band
pub struct LevelBandEstimator {
    label: &'static str,
    bands: &'static [(u32, u64)],
    levels: std::ops::Range<u32>,
    priority: u32,
}

impl LevelBandEstimator {
    pub fn high_levels() -> Self {
        Self {
            label: "Level-based estimate",
            bands: HIGH_LEVEL_BANDS,
            levels: HIGH_LEVEL_FLOOR..u32::MAX,
            priority: estimator_priority::HIGH_LEVEL_BAND,
        }
    }

    pub fn low_levels() -> Self {
        Self {
            label: "General estimate",
            bands: LOW_LEVEL_BANDS,
            levels: 0..HIGH_LEVEL_FLOOR,
            priority: estimator_priority::LOW_LEVEL_BAND,
        }
    }

    fn xp_per_run(&self, level: u32) -> Option<u64> {
        self.bands
            .iter()
            .find(|(floor, _)| level >= *floor)
            .map(|(_, xp)| *xp)
    }
}

impl RunsEstimator for LevelBandEstimator {
    fn estimate(&self, input: &EstimateInput) -> Option<RunsEstimate> {
        if !self.levels.contains(&input.level) {
            return None;
        }

        let per_run = self.xp_per_run(input.level)?;
        let runs = whole_runs(input.xp_to_next_level, per_run);
        if runs == 0 {
            return None;
        }

        Some(RunsEstimate {
            runs,
            average_xp_per_run: per_run,
            method: format!("{} (L{})", self.label, input.level),
            projected: true,
        })
    }

    fn priority(&self) -> u32 {
        self.priority
    }
}

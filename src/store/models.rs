use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

use crate::snapshot::MonsterCategory;

pub const DEFAULT_PROFILE: &str = "default";

/// Completed-run XP samples kept for the history-based estimate
pub const XP_RUN_HISTORY_LIMIT: usize = 20;

/// One confirmed pickup; only `name` may change after creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub original_name: String,
    pub quality: String,
    pub run_index: u32,
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub affixes: String,
    #[serde(default)]
    pub is_ethereal: bool,
    #[serde(default)]
    pub is_identified: bool,
    #[serde(default)]
    pub item_level: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XpState {
    pub current_xp: u64,
    pub current_level: u32,
    pub xp_to_next_level: u64,
    pub xp_this_run: u64,
    pub xp_per_hour: f64,
    pub runs_to_next_level: u64,
    pub average_xp_per_run: u64,
    pub session_xp_gained: u64,
    pub run_start_xp: u64,
    pub estimated_runs_to_next: u64,
    pub runs_calculation_method: String,
}

/// Durable subset of the tracker state, persisted once per profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub kill_counts: BTreeMap<MonsterCategory, u64>,
    #[serde(default)]
    pub total_kills: u64,
    /// Completed run durations in milliseconds
    #[serde(default)]
    pub run_times: Vec<u64>,
    #[serde(default)]
    pub items: Vec<ItemRecord>,
    #[serde(default = "default_filters_enabled")]
    pub filters_enabled: bool,
    #[serde(default)]
    pub xp_tracking: XpState,
    #[serde(default)]
    pub xp_run_history: VecDeque<u64>,
}

fn default_filters_enabled() -> bool {
    true
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            kill_counts: BTreeMap::new(),
            total_kills: 0,
            run_times: Vec::new(),
            items: Vec::new(),
            filters_enabled: true,
            xp_tracking: XpState::default(),
            xp_run_history: VecDeque::new(),
        }
    }
}

impl ProfileData {
    pub fn record_kill(&mut self, category: MonsterCategory) {
        *self.kill_counts.entry(category).or_insert(0) += 1;
        self.total_kills += 1;
    }

    pub fn kills(&self, category: MonsterCategory) -> u64 {
        self.kill_counts.get(&category).copied().unwrap_or_default()
    }

    /// Appends a run's XP, evicting the oldest sample past the limit
    pub fn record_run_xp(&mut self, xp: u64) {
        self.xp_run_history.push_back(xp);
        while self.xp_run_history.len() > XP_RUN_HISTORY_LIMIT {
            self.xp_run_history.pop_front();
        }
    }

    pub fn completed_runs(&self) -> usize {
        self.run_times.len()
    }

    pub fn reset_statistics(&mut self) {
        self.kill_counts.clear();
        self.total_kills = 0;
        self.run_times.clear();
    }

    /// Brings data read from disk back in line with the in-memory invariants
    pub(crate) fn normalize(&mut self) {
        self.total_kills = self.kill_counts.values().sum();
        while self.xp_run_history.len() > XP_RUN_HISTORY_LIMIT {
            self.xp_run_history.pop_front();
        }
    }

    /// Session-scoped XP counters do not survive a reload
    pub(crate) fn start_session(&mut self) {
        self.xp_tracking.session_xp_gained = 0;
        self.xp_tracking.xp_this_run = 0;
        self.xp_tracking.xp_per_hour = 0.0;
    }
}

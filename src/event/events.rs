use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::MonsterCategory;

/// Facts derived from the difference between two snapshots
///
/// Events describe something that already happened; they are broadcast to
/// websocket clients and never fed back into the tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrackerEvent {
    /// The player entered a game
    RunStarted {
        run_index: u32,
        started_at: DateTime<Utc>,
    },

    /// The player returned to the menu
    RunCompleted {
        run_index: u32,
        duration_ms: u64,
        xp_gained: u64,
    },

    /// A corpse that had not been counted yet
    MonsterKilled {
        unit_id: u32,
        category: MonsterCategory,
        total_kills: u64,
    },

    /// A ground pickup that made it into the item log
    ItemPickedUp {
        index: usize,
        name: String,
        quality: String,
        run_index: u32,
    },

    /// A ground pickup dropped by the consumable filter
    ItemFiltered { name: String },

    LevelUp { from: u32, to: u32 },
}

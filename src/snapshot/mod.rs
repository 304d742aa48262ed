// Snapshot contract consumed from the observed game process
//
// Nothing in here knows how memory is read; the tracker only sees the
// `SnapshotSource` trait and the plain data it returns.

pub use models::{
    Corpse, ItemLocation, ItemQuality, LocationKind, MonsterCategory, PlayerStats, Position,
    Snapshot, SnapshotItem,
};
pub use source::{DetachedSource, ScriptedSource, SnapshotSource, SourceError};

mod models;
mod source;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::Path;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::models::Snapshot;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Snapshot source unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid snapshot data: {0}")]
    Decode(String),
}

/// Supplier of full world-state snapshots from the observed process
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Whether the observed process can currently be read
    async fn is_live(&self) -> bool;

    /// Read the complete current world state
    async fn snapshot(&self) -> Result<Snapshot, SourceError>;
}

/// Source used when no game process is attached; every tick idles
pub struct DetachedSource;

#[async_trait]
impl SnapshotSource for DetachedSource {
    async fn is_live(&self) -> bool {
        false
    }

    async fn snapshot(&self) -> Result<Snapshot, SourceError> {
        Err(SourceError::Unavailable("no game process attached".to_string()))
    }
}

/// Replays a fixed queue of snapshots, one per read
///
/// Used by tests and for replaying recorded sessions from a JSON-lines file.
/// The source stops being live once the queue is drained.
#[derive(Default)]
pub struct ScriptedSource {
    frames: Mutex<VecDeque<Snapshot>>,
}

impl ScriptedSource {
    pub fn new(frames: impl IntoIterator<Item = Snapshot>) -> Self {
        Self {
            frames: Mutex::new(frames.into_iter().collect()),
        }
    }

    /// Parses one snapshot per non-empty line
    pub fn from_json_lines(text: &str) -> Result<Self, SourceError> {
        let frames = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(number, line)| {
                serde_json::from_str::<Snapshot>(line)
                    .map_err(|e| SourceError::Decode(format!("line {}: {}", number + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(frames))
    }

    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SourceError::Unavailable(format!("{}: {}", path.display(), e)))?;
        let source = Self::from_json_lines(&text)?;
        info!(
            path = %path.display(),
            frames = text.lines().filter(|line| !line.trim().is_empty()).count(),
            "Loaded snapshot replay"
        );
        Ok(source)
    }

    pub async fn push(&self, frame: Snapshot) {
        self.frames.lock().await.push_back(frame);
    }

    pub async fn remaining(&self) -> usize {
        self.frames.lock().await.len()
    }
}

#[async_trait]
impl SnapshotSource for ScriptedSource {
    async fn is_live(&self) -> bool {
        self.remaining().await > 0
    }

    async fn snapshot(&self) -> Result<Snapshot, SourceError> {
        let frame = self.frames.lock().await.pop_front();
        match frame {
            Some(frame) => {
                debug!(in_game = frame.in_game, area = frame.area, "Replaying snapshot");
                Ok(frame)
            }
            None => Err(SourceError::Unavailable("replay exhausted".to_string())),
        }
    }
}

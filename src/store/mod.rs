mod errors;
pub mod export;
pub mod items;
pub mod models;
pub mod pagination;
pub mod profiles;
pub mod repository;
pub mod state;
pub mod stats;

pub use errors::StoreError;
pub use models::{ItemRecord, ProfileData, XpState, DEFAULT_PROFILE, XP_RUN_HISTORY_LIMIT};
pub use pagination::{IndexedItem, ItemsPage};
pub use repository::{FileProfileRepository, InMemoryProfileRepository, ProfileRepository};
pub use state::{CharacterInfo, SessionState, TrackerState, ViewSettings};
pub use stats::GameStats;

use chrono::Utc;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, instrument, warn};

/// Single source of truth for counters, run timings, the item log and XP state.
///
/// `state` is shared by readers and taken exclusively by the polling pipeline and
/// bulk mutations. `edit_lock` serializes item renames and `save_lock`
/// serializes writes to the profile repository.
pub struct TrackerStore {
    state: RwLock<TrackerState>,
    edit_lock: Mutex<()>,
    save_lock: Mutex<()>,
    repository: Arc<dyn ProfileRepository>,
}

impl TrackerStore {
    pub fn new(repository: Arc<dyn ProfileRepository>, view: ViewSettings) -> Self {
        Self {
            state: RwLock::new(TrackerState::new(view, Utc::now())),
            edit_lock: Mutex::new(()),
            save_lock: Mutex::new(()),
            repository,
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, TrackerState> {
        self.state.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, TrackerState> {
        self.state.write().await
    }

    pub fn repository(&self) -> &Arc<dyn ProfileRepository> {
        &self.repository
    }

    pub async fn current_profile_name(&self) -> String {
        self.state.read().await.profile_name.clone()
    }

    /// Writes the active profile; concurrent callers are serialized
    #[instrument(skip(self))]
    pub async fn save_current_profile(&self) -> Result<(), StoreError> {
        let _guard = self.save_lock.lock().await;

        let (name, profile) = {
            let state = self.state.read().await;
            (state.profile_name.clone(), state.profile.clone())
        };

        self.repository.save(&name, &profile).await?;
        debug!(profile = %name, items = profile.items.len(), "Profile persisted");
        Ok(())
    }

    /// Fire-and-forget save; failures are only logged
    pub fn persist_in_background(self: &Arc<Self>) {
        let store = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = store.save_current_profile().await {
                warn!(error = %e, "Background profile save failed");
            }
        });
    }

    /// Activates `name`, falling back to a fresh profile when nothing usable is stored
    #[instrument(skip(self))]
    pub async fn load_profile(&self, name: &str) -> Result<(), StoreError> {
        let profile = match self.repository.load(name).await {
            Ok(Some(mut profile)) => {
                profile.normalize();
                info!(
                    profile = %name,
                    items = profile.items.len(),
                    runs = profile.completed_runs(),
                    "Profile loaded"
                );
                profile
            }
            Ok(None) => {
                info!(profile = %name, "No saved data, starting a fresh profile");
                ProfileData::default()
            }
            Err(e) => {
                warn!(profile = %name, error = %e, "Saved profile unusable, starting fresh");
                ProfileData::default()
            }
        };

        let mut state = self.state.write().await;
        state.install_profile(name, profile, Utc::now());
        Ok(())
    }
}

use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::models::{ProfileData, DEFAULT_PROFILE};
use super::{StoreError, TrackerStore};

const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

fn validate_profile_name(name: &str) -> Result<&str, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::EmptyProfileName);
    }
    if name.contains(FORBIDDEN_NAME_CHARS) {
        return Err(StoreError::InvalidProfileName(name.to_string()));
    }
    Ok(name)
}

impl TrackerStore {
    /// Sorted profile names, or just the default profile when none are stored
    pub async fn list_profiles(&self) -> Result<Vec<String>, StoreError> {
        let mut names = self.repository.list().await?;
        if names.is_empty() {
            return Ok(vec![DEFAULT_PROFILE.to_string()]);
        }
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Saves the active profile, then activates `name`
    #[instrument(skip(self))]
    pub async fn switch_profile(&self, name: &str) -> Result<(), StoreError> {
        let name = validate_profile_name(name)?;

        if let Err(e) = self.save_current_profile().await {
            warn!(error = %e, "Could not save profile before switching");
        }
        self.load_profile(name).await?;
        info!(profile = %name, "Switched profile");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn create_profile(&self, name: &str) -> Result<(), StoreError> {
        let name = validate_profile_name(name)?;
        let active = self.current_profile_name().await == name;
        if active || self.list_profiles().await?.iter().any(|existing| existing == name) {
            return Err(StoreError::ProfileExists(name.to_string()));
        }

        if let Err(e) = self.save_current_profile().await {
            warn!(error = %e, "Could not save profile before creating a new one");
        }
        self.repository.save(name, &ProfileData::default()).await?;
        self.load_profile(name).await?;
        info!(profile = %name, "Created profile");
        Ok(())
    }

    /// Removes a stored profile; deleting the active one falls back to the default
    #[instrument(skip(self))]
    pub async fn delete_profile(&self, name: &str) -> Result<(), StoreError> {
        let name = validate_profile_name(name)?;
        if name == DEFAULT_PROFILE {
            return Err(StoreError::DefaultProfileProtected);
        }
        if !self.repository.list().await?.iter().any(|existing| existing == name) {
            return Err(StoreError::ProfileNotFound(name.to_string()));
        }

        self.repository.delete(name).await?;
        if self.current_profile_name().await == name {
            self.load_profile(DEFAULT_PROFILE).await?;
        }
        info!(profile = %name, "Deleted profile");
        Ok(())
    }

    /// Clears kill counters and run timings; the item log and XP data stay
    #[instrument(skip(self))]
    pub async fn reset_statistics(self: &Arc<Self>) {
        {
            let mut state = self.state.write().await;
            state.profile.reset_statistics();
            state.session.abandon_run();
            state.session.run_index = 1;
        }
        info!("Statistics reset");
        self.persist_in_background();
    }
}

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::{models::ProfileData, StoreError};

const PROFILE_EXTENSION: &str = "json";

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns `Ok(None)` when no data exists for the profile yet
    async fn load(&self, name: &str) -> Result<Option<ProfileData>, StoreError>;
    async fn save(&self, name: &str, profile: &ProfileData) -> Result<(), StoreError>;
    async fn delete(&self, name: &str) -> Result<(), StoreError>;
    async fn list(&self) -> Result<Vec<String>, StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: Arc<RwLock<HashMap<String, ProfileData>>>,
    fail_saves: AtomicBool,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail, for exercising persistence errors
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    pub async fn insert(&self, name: &str, profile: ProfileData) {
        self.profiles.write().await.insert(name.to_string(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn load(&self, name: &str) -> Result<Option<ProfileData>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(name).cloned())
    }

    async fn save(&self, name: &str, profile: &ProfileData) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Storage(format!("save of '{name}' rejected")));
        }
        let mut profiles = self.profiles.write().await;
        profiles.insert(name.to_string(), profile.clone());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut profiles = self.profiles.write().await;
        profiles.remove(name);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.keys().cloned().collect())
    }
}

/// One pretty-printed JSON document per profile under a single directory
#[derive(Debug, Clone)]
pub struct FileProfileRepository {
    dir: PathBuf,
}

impl FileProfileRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{PROFILE_EXTENSION}"))
    }

    async fn ensure_dir(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::Storage(format!("{}: {e}", self.dir.display())))
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    async fn load(&self, name: &str) -> Result<Option<ProfileData>, StoreError> {
        let path = self.profile_path(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Storage(format!("{}: {e}", path.display()))),
        };

        let profile = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", path.display())))?;
        debug!(profile = %name, path = %path.display(), "Profile loaded from disk");
        Ok(Some(profile))
    }

    async fn save(&self, name: &str, profile: &ProfileData) -> Result<(), StoreError> {
        self.ensure_dir().await?;

        let path = self.profile_path(name);
        let tmp = path.with_extension(format!("{PROFILE_EXTENSION}.tmp"));
        let bytes = serde_json::to_vec_pretty(profile)
            .map_err(|e| StoreError::Storage(format!("serialize '{name}': {e}")))?;

        // Readers never observe a half-written document
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| StoreError::Storage(format!("{}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::Storage(format!("{}: {e}", path.display())))?;

        debug!(profile = %name, bytes = bytes.len(), "Profile saved");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.profile_path(name);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(profile = %name, "Profile file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Storage(format!("{}: {e}", path.display()))),
        }
    }

    async fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Storage(format!("{}: {e}", self.dir.display()))),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::Storage(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::MonsterCategory;

    #[tokio::test]
    async fn test_in_memory_round_trip_and_delete() {
        let repo = InMemoryProfileRepository::new();
        let mut profile = ProfileData::default();
        profile.record_kill(MonsterCategory::Champion);

        repo.save("hell", &profile).await.unwrap();
        assert_eq!(repo.load("hell").await.unwrap(), Some(profile));
        assert_eq!(repo.list().await.unwrap(), vec!["hell".to_string()]);

        repo.delete("hell").await.unwrap();
        assert_eq!(repo.load("hell").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_in_memory_failing_saves() {
        let repo = InMemoryProfileRepository::new();
        repo.fail_saves(true);

        let result = repo.save("default", &ProfileData::default()).await;
        assert!(matches!(result, Err(StoreError::Storage(_))));
    }

    #[tokio::test]
    async fn test_file_repository_persists_json_per_profile() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProfileRepository::new(dir.path().join("profiles"));

        let mut profile = ProfileData::default();
        profile.record_kill(MonsterCategory::Unique);
        repo.save("baal", &profile).await.unwrap();

        assert!(dir.path().join("profiles/baal.json").exists());
        assert!(!dir.path().join("profiles/baal.json.tmp").exists());
        assert_eq!(repo.load("baal").await.unwrap(), Some(profile));
        assert_eq!(repo.list().await.unwrap(), vec!["baal".to_string()]);
    }

    #[tokio::test]
    async fn test_file_repository_missing_and_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FileProfileRepository::new(dir.path());

        assert_eq!(repo.load("nobody").await.unwrap(), None);
        assert!(repo.list().await.unwrap().is_empty());

        std::fs::write(dir.path().join("broken.json"), b"{not json").unwrap();
        let result = repo.load("broken").await;
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_file_repository_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hi").unwrap();
        let repo = FileProfileRepository::new(dir.path());

        repo.save("mf", &ProfileData::default()).await.unwrap();
        repo.delete("missing").await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec!["mf".to_string()]);
    }
}

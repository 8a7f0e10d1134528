//! services/api/src/adapters/store.rs
//!
//! This module contains the resume store adapter, the concrete implementation
//! of the `ResumeStore` port from the `core` crate. Documents are held in an
//! in-memory map and the whole map is persisted to a single pretty-printed
//! JSON file after every save.

use async_trait::async_trait;
use resume_core::domain::Resume;
use resume_core::ports::{PortError, PortResult, ResumeStore};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A file-backed store that implements the `ResumeStore` port.
pub struct JsonFileStore {
    path: PathBuf,
    resumes: RwLock<HashMap<String, Resume>>,
}

impl JsonFileStore {
    /// Creates a store backed by `path`, loading any documents a previous
    /// run persisted there. A missing file is an empty store, but an
    /// unreadable one is an error rather than silent data loss.
    pub async fn open(path: PathBuf) -> PortResult<Self> {
        let resumes = match tokio::fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|e| PortError::Unexpected(format!("Corrupt store file: {}", e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(PortError::Unexpected(e.to_string())),
        };
        Ok(Self {
            path,
            resumes: RwLock::new(resumes),
        })
    }

    /// Writes a snapshot of the whole map to the backing file.
    async fn persist(&self, snapshot: &HashMap<String, Resume>) -> PortResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PortError::Unexpected(e.to_string()))?;
        }
        let text = serde_json::to_string_pretty(snapshot)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }
}

//=========================================================================================
// `ResumeStore` Trait Implementation
//=========================================================================================

#[async_trait]
impl ResumeStore for JsonFileStore {
    async fn save(&self, resume: &Resume) -> PortResult<String> {
        let key = resume.storage_key();
        let snapshot = {
            let mut resumes = self.resumes.write().await;
            resumes.insert(key.clone(), resume.clone());
            resumes.clone()
        };
        self.persist(&snapshot).await?;
        Ok(key)
    }

    async fn get(&self, key: &str) -> PortResult<Resume> {
        self.resumes
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| PortError::NotFound(format!("No resume stored under '{}'", key)))
    }

    async fn list(&self) -> PortResult<HashMap<String, Resume>> {
        Ok(self.resumes.read().await.clone())
    }
}

//=========================================================================================
// Tests
//=========================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn store_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("resumes.json")
    }

    #[tokio::test]
    async fn save_then_get_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).await.unwrap();

        let resume = Resume::sample();
        let key = store.save(&resume).await.unwrap();
        assert_eq!(key, "john_doe");
        assert_eq!(store.get("john_doe").await.unwrap(), resume);
        assert_eq!(store.list().await.unwrap().len(), 1);
        assert!(matches!(
            store.get("nobody").await,
            Err(PortError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn documents_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);

        let resume = Resume::sample();
        {
            let store = JsonFileStore::open(path.clone()).await.unwrap();
            store.save(&resume).await.unwrap();
        }
        let reopened = JsonFileStore::open(path).await.unwrap();
        assert_eq!(reopened.get("john_doe").await.unwrap(), resume);
    }

    #[tokio::test]
    async fn saving_a_nameless_resume_uses_the_latest_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(store_path(&dir)).await.unwrap();
        let key = store.save(&Resume::new()).await.unwrap();
        assert_eq!(key, "latest");
    }

    #[tokio::test]
    async fn corrupt_store_file_is_an_error_not_a_wipe() {
        let dir = tempfile::tempdir().unwrap();
        let path = store_path(&dir);
        tokio::fs::write(&path, "{ definitely not json").await.unwrap();
        assert!(JsonFileStore::open(path).await.is_err());
    }
}

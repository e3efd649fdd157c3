use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{load_json, save_json, StoreError};
use crate::models::FeedbackEntry;

/// Append-only feedback log kept as a JSON array.
#[derive(Clone)]
pub struct FeedbackStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FeedbackStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `entry` and returns the number of stored entries.
    pub async fn append(&self, entry: FeedbackEntry) -> Result<usize, StoreError> {
        let _guard = self.lock.lock().await;

        let mut entries: Vec<FeedbackEntry> = load_json(&self.path).await?;
        entries.push(entry);
        save_json(&self.path, &entries).await?;

        Ok(entries.len())
    }

    pub async fn entries(&self) -> Result<Vec<FeedbackEntry>, StoreError> {
        let _guard = self.lock.lock().await;
        load_json(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(rating: i64, comment: &str) -> FeedbackEntry {
        FeedbackEntry {
            rating,
            comment: comment.to_string(),
            timestamp: "2026-10-18T10:00:00.000Z".to_string(),
            request_id: None,
            client_ip: None,
        }
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let temp_dir = tempdir().unwrap();
        let store = FeedbackStore::new(temp_dir.path().join("feedback.json"));

        assert_eq!(store.append(entry(5, "great")).await.unwrap(), 1);
        assert_eq!(store.append(entry(-3, "")).await.unwrap(), 2);

        let entries = store.entries().await.unwrap();
        assert_eq!(entries, vec![entry(5, "great"), entry(-3, "")]);
    }

    #[tokio::test]
    async fn test_corrupt_log_is_kept() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("feedback.json");
        std::fs::write(&path, "[{\"rating\": 1").unwrap();
        let store = FeedbackStore::new(&path);

        let err = store.append(entry(4, "ok")).await.unwrap_err();
        assert!(err.is_corrupt());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"rating\": 1");
    }

    #[tokio::test]
    async fn test_optional_fields_are_omitted() {
        let temp_dir = tempdir().unwrap();
        let store = FeedbackStore::new(temp_dir.path().join("feedback.json"));
        store.append(entry(3, "meh")).await.unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("request_id"));
        assert!(!raw.contains("client_ip"));
    }
}

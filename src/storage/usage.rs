use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{load_json, save_json, StoreError};
use crate::models::{UsageLedger, UsageRecord};

/// File-backed daily request counter.
///
/// All clones share one lock, so the load/increment/save cycle is serialized
/// for the whole process and concurrent requests cannot lose updates.
#[derive(Clone)]
pub struct UsageStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    pub allowed: bool,
    /// Count for the day after this decision.
    pub request_count: u64,
}

impl UsageStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Counts one request against `date` unless the day already reached
    /// `limit`. Rejected requests leave the ledger untouched.
    pub async fn increment_and_check(
        &self,
        date: NaiveDate,
        limit: u64,
    ) -> Result<QuotaDecision, StoreError> {
        let _guard = self.lock.lock().await;

        let mut ledger: UsageLedger = load_json(&self.path).await?;
        let record = ledger.entry(date).or_insert_with(UsageRecord::new);

        if record.request_count >= limit {
            return Ok(QuotaDecision {
                allowed: false,
                request_count: record.request_count,
            });
        }

        record.request_count += 1;
        record.last_updated = Local::now().naive_local();
        let request_count = record.request_count;

        save_json(&self.path, &ledger).await?;

        Ok(QuotaDecision {
            allowed: true,
            request_count,
        })
    }

    pub async fn count_for(&self, date: NaiveDate) -> Result<u64, StoreError> {
        let _guard = self.lock.lock().await;
        let ledger: UsageLedger = load_json(&self.path).await?;
        Ok(ledger.get(&date).map_or(0, |r| r.request_count))
    }

    pub async fn ledger(&self) -> Result<UsageLedger, StoreError> {
        let _guard = self.lock.lock().await;
        load_json(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[tokio::test]
    async fn test_first_request_creates_file() {
        let temp_dir = tempdir().unwrap();
        let store = UsageStore::new(temp_dir.path().join("data/usage.json"));

        let decision = store.increment_and_check(day(1), 10).await.unwrap();
        assert_eq!(decision, QuotaDecision { allowed: true, request_count: 1 });
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_rejection_does_not_increment() {
        let temp_dir = tempdir().unwrap();
        let store = UsageStore::new(temp_dir.path().join("usage.json"));

        for _ in 0..2 {
            assert!(store.increment_and_check(day(1), 2).await.unwrap().allowed);
        }
        let rejected = store.increment_and_check(day(1), 2).await.unwrap();

        assert!(!rejected.allowed);
        assert_eq!(rejected.request_count, 2);
        assert_eq!(store.count_for(day(1)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_days_are_counted_separately() {
        let temp_dir = tempdir().unwrap();
        let store = UsageStore::new(temp_dir.path().join("usage.json"));

        assert!(store.increment_and_check(day(1), 1).await.unwrap().allowed);
        assert!(!store.increment_and_check(day(1), 1).await.unwrap().allowed);
        assert!(store.increment_and_check(day(2), 1).await.unwrap().allowed);

        let ledger = store.ledger().await.unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[&day(2)].request_count, 1);
    }

    #[tokio::test]
    async fn test_zero_limit_rejects_without_writing() {
        let temp_dir = tempdir().unwrap();
        let store = UsageStore::new(temp_dir.path().join("usage.json"));

        assert!(!store.increment_and_check(day(1), 0).await.unwrap().allowed);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_reads_ledger_written_with_date_keys() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("usage.json");
        std::fs::write(
            &path,
            r#"{"2026-10-01": {"request_count": 7, "last_updated": "2026-10-01T09:15:00.123456"}}"#,
        )
        .unwrap();
        let store = UsageStore::new(&path);

        assert_eq!(store.count_for(day(1)).await.unwrap(), 7);
    }
}

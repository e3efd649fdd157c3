use chrono::NaiveDate;
use social_post_formatter::{
    models::FeedbackEntry,
    storage::{FeedbackStore, UsageStore},
};
use tempfile::TempDir;

fn setup_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn feedback(n: i64) -> FeedbackEntry {
    FeedbackEntry {
        rating: n,
        comment: format!("comment {n}"),
        timestamp: format!("2026-10-18T10:00:{n:02}.000Z"),
        request_id: None,
        client_ip: Some("203.0.113.9".to_string()),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_increments_never_exceed_limit() {
    const LIMIT: u64 = 25;
    let dir = setup_dir();
    let store = UsageStore::new(dir.path().join("usage.json"));

    let handles: Vec<_> = (0..LIMIT * 2)
        .map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.increment_and_check(today(), LIMIT).await })
        })
        .collect();

    let mut admitted = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().allowed {
            admitted += 1;
        }
    }

    assert_eq!(admitted, LIMIT);
    assert_eq!(store.count_for(today()).await.unwrap(), LIMIT);
}

#[tokio::test]
async fn test_ledger_survives_reopening() {
    let dir = setup_dir();
    let path = dir.path().join("usage.json");

    let first = UsageStore::new(&path);
    for _ in 0..4 {
        first.increment_and_check(today(), 10).await.unwrap();
    }
    drop(first);

    let reopened = UsageStore::new(&path);
    let decision = reopened.increment_and_check(today(), 10).await.unwrap();
    assert!(decision.allowed);
    assert_eq!(decision.request_count, 5);
}

#[tokio::test]
async fn test_corrupt_ledger_is_not_overwritten() {
    let dir = setup_dir();
    let path = dir.path().join("usage.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    let store = UsageStore::new(&path);

    let err = store.increment_and_check(today(), 10).await.unwrap_err();

    assert!(err.is_corrupt());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_feedback_is_never_lost() {
    let dir = setup_dir();
    let store = FeedbackStore::new(dir.path().join("feedback.json"));

    let handles: Vec<_> = (0..30)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move { store.append(feedback(n)).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut entries = store.entries().await.unwrap();
    assert_eq!(entries.len(), 30);
    entries.sort_by_key(|e| e.rating);
    assert_eq!(entries[7], feedback(7));
}

#[tokio::test]
async fn test_feedback_order_matches_submission() {
    let dir = setup_dir();
    let store = FeedbackStore::new(dir.path().join("nested/feedback.json"));

    for n in [3, 1, 2] {
        store.append(feedback(n)).await.unwrap();
    }

    let ratings: Vec<i64> = store
        .entries()
        .await
        .unwrap()
        .iter()
        .map(|e| e.rating)
        .collect();
    assert_eq!(ratings, vec![3, 1, 2]);
}

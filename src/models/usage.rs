use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Day-keyed ledger as stored in `usage.json`.
pub type UsageLedger = BTreeMap<NaiveDate, UsageRecord>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub request_count: u64,
    /// Local wall-clock time, no offset.
    pub last_updated: NaiveDateTime,
}

impl UsageRecord {
    pub fn new() -> Self {
        Self {
            request_count: 0,
            last_updated: Local::now().naive_local(),
        }
    }
}

impl Default for UsageRecord {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageResponse {
    pub today_requests: u64,
    pub limit: u64,
}

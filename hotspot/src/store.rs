//! Storage seam for scan history.
//!
//! The engine hands each finished batch to an [`AccessPointStore`] and
//! never touches it again; the store stamps the scan time on insertion.
//! Queries return the most recent observations first, ties broken by SSID,
//! and are capped so a runaway history cannot flood a caller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::Mutex;

use crate::Result;
use crate::constants::query;
use crate::models::AccessPoint;

/// An access point observation as persisted: the record plus the time the
/// batch was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAccessPoint {
    pub scan_time: DateTime<Utc>,
    pub record: AccessPoint,
}

/// Persistence collaborator for scan batches.
#[async_trait]
pub trait AccessPointStore: Send + Sync {
    /// Stamps and stores a batch, returning the stored rows.
    async fn save_all(&self, records: Vec<AccessPoint>) -> Result<Vec<StoredAccessPoint>>;

    /// Observations within `window` of now, most recent first (capped at 100).
    async fn find_latest(&self, window: Duration) -> Result<Vec<StoredAccessPoint>>;

    /// Observations with `start <= scan_time <= end`, most recent first
    /// (capped at 500).
    async fn find_by_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StoredAccessPoint>>;
}

/// In-memory store, suitable for a single monitoring process.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<StoredAccessPoint>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_capped(mut rows: Vec<StoredAccessPoint>, cap: usize) -> Vec<StoredAccessPoint> {
    rows.sort_by(|a, b| {
        b.scan_time
            .cmp(&a.scan_time)
            .then_with(|| a.record.ssid.cmp(&b.record.ssid))
    });
    rows.truncate(cap);
    rows
}

#[async_trait]
impl AccessPointStore for MemoryStore {
    async fn save_all(&self, records: Vec<AccessPoint>) -> Result<Vec<StoredAccessPoint>> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let scan_time = Utc::now();
        let stored: Vec<StoredAccessPoint> = records
            .into_iter()
            .map(|record| StoredAccessPoint { scan_time, record })
            .collect();

        let mut rows = self.rows.lock().await;
        rows.extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn find_latest(&self, window: Duration) -> Result<Vec<StoredAccessPoint>> {
        let delta = chrono::Duration::from_std(window).unwrap_or(chrono::Duration::MAX);
        let cutoff = Utc::now()
            .checked_sub_signed(delta)
            .unwrap_or(DateTime::<Utc>::MIN_UTC);

        let rows = self.rows.lock().await;
        let hits: Vec<StoredAccessPoint> = rows
            .iter()
            .filter(|row| row.scan_time >= cutoff)
            .cloned()
            .collect();
        Ok(sorted_capped(hits, query::LATEST_LIMIT))
    }

    async fn find_by_period(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StoredAccessPoint>> {
        let rows = self.rows.lock().await;
        let hits: Vec<StoredAccessPoint> = rows
            .iter()
            .filter(|row| row.scan_time >= start && row.scan_time <= end)
            .cloned()
            .collect();
        Ok(sorted_capped(hits, query::PERIOD_LIMIT))
    }
}

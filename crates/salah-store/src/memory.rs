//! In-memory store implementations.
//!
//! Usable as the real store for hosts without durable persistence, and as
//! instrumented doubles in tests: writes are counted and failures can be
//! injected to exercise the error paths.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use salah_types::DailyPrayerTimes;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::store::{PrayerTimeStore, TrackerRow, TrackerStore};

/// In-memory `PrayerTimeStore` with write counting and failure injection.
#[derive(Debug, Default)]
pub struct MemoryPrayerTimeStore {
    rows: Mutex<BTreeMap<NaiveDate, DailyPrayerTimes>>,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryPrayerTimeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of upserts performed.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// When set, every operation fails with `StoreError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("injected failure"))
        } else {
            Ok(())
        }
    }

    pub async fn rows(&self) -> Vec<DailyPrayerTimes> {
        self.rows.lock().await.values().copied().collect()
    }
}

#[async_trait]
impl PrayerTimeStore for MemoryPrayerTimeStore {
    async fn count(&self) -> Result<u64, StoreError> {
        self.check_available()?;
        Ok(self.rows.lock().await.len() as u64)
    }

    async fn for_date(&self, date: NaiveDate) -> Result<Option<DailyPrayerTimes>, StoreError> {
        self.check_available()?;
        Ok(self.rows.lock().await.get(&date).copied())
    }

    async fn upsert(&self, day: &DailyPrayerTimes) -> Result<(), StoreError> {
        self.check_available()?;
        self.rows.lock().await.insert(day.date, *day);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory `TrackerStore` for either tracker row kind.
#[derive(Debug)]
pub struct MemoryTrackerStore<R> {
    rows: Mutex<BTreeMap<NaiveDate, R>>,
    writes: AtomicUsize,
    failing: AtomicBool,
}

impl<R> Default for MemoryTrackerStore<R> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(BTreeMap::new()),
            writes: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }
}

impl<R> MemoryTrackerStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::unavailable("injected failure"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<R: TrackerRow> TrackerStore<R> for MemoryTrackerStore<R> {
    async fn exists(&self, date: NaiveDate) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self.rows.lock().await.contains_key(&date))
    }

    async fn for_date(&self, date: NaiveDate) -> Result<Option<R>, StoreError> {
        self.check_available()?;
        Ok(self.rows.lock().await.get(&date).cloned())
    }

    async fn for_range(&self, first: NaiveDate, last: NaiveDate) -> Result<Vec<R>, StoreError> {
        self.check_available()?;
        Ok(self
            .rows
            .lock()
            .await
            .range(first..=last)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn save(&self, row: &R) -> Result<(), StoreError> {
        self.check_available()?;
        self.rows.lock().await.insert(row.date(), row.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

//! Persistence collaborator traits.
//!
//! The host application provides the actual storage (a relational store,
//! a file, anything); this layer only relies on upsert-by-date semantics
//! and suspending reads.

use async_trait::async_trait;
use chrono::NaiveDate;
use salah_types::{DailyPrayerTimes, FastTrackerDay, PrayerTrackerDay};

use crate::error::StoreError;

/// Persisted prayer-time rows, keyed by date.
#[async_trait]
pub trait PrayerTimeStore: Send + Sync {
    /// Number of persisted rows, used as the first-run check.
    async fn count(&self) -> Result<u64, StoreError>;

    async fn for_date(&self, date: NaiveDate) -> Result<Option<DailyPrayerTimes>, StoreError>;

    /// Inserts or fully replaces the row for `day.date`.
    async fn upsert(&self, day: &DailyPrayerTimes) -> Result<(), StoreError>;
}

/// A per-day tracker row that can be created in its default (untracked)
/// state for any date.
pub trait TrackerRow: Clone + Send + Sync + 'static {
    fn date(&self) -> NaiveDate;

    fn untracked(date: NaiveDate) -> Self;
}

impl TrackerRow for FastTrackerDay {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn untracked(date: NaiveDate) -> Self {
        FastTrackerDay::untracked(date)
    }
}

impl TrackerRow for PrayerTrackerDay {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn untracked(date: NaiveDate) -> Self {
        PrayerTrackerDay::untracked(date)
    }
}

/// Persisted tracker rows, keyed by date, one row kind per store.
#[async_trait]
pub trait TrackerStore<R: TrackerRow>: Send + Sync {
    async fn exists(&self, date: NaiveDate) -> Result<bool, StoreError>;

    async fn for_date(&self, date: NaiveDate) -> Result<Option<R>, StoreError>;

    /// Rows with dates in `first..=last`, ascending.
    async fn for_range(&self, first: NaiveDate, last: NaiveDate) -> Result<Vec<R>, StoreError>;

    /// Inserts or fully replaces the row for `row.date()`.
    async fn save(&self, row: &R) -> Result<(), StoreError>;
}

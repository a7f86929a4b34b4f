//! Fasting and prayer trackers with a lazily materialized month cache.

use chrono::NaiveDate;
use salah_types::{FastTrackerDay, Prayer, PrayerTrackerDay, YearMonth};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;
use crate::store::{TrackerRow, TrackerStore};

/// Rows of a single month, kept alongside the month they belong to so a
/// rollover invalidates the whole cache at once.
struct MonthCache<R> {
    month: YearMonth,
    rows: Vec<R>,
}

/// Repository over a tracker store, generic in the row type.
///
/// Rows are created lazily: asking for a date that was never tracked
/// persists the untracked default and returns it, so callers always get a
/// row back. The mutex serializes every read-modify-write against the
/// month cache; batch updates take it once per item.
pub struct TrackerRepository<R, S> {
    store: S,
    cache: Mutex<Option<MonthCache<R>>>,
}

/// Fasting tracker over any conforming store.
pub type FastTrackerRepository<S> = TrackerRepository<FastTrackerDay, S>;

/// Prayer tracker over any conforming store.
pub type PrayerTrackerRepository<S> = TrackerRepository<PrayerTrackerDay, S>;

impl<R: TrackerRow, S: TrackerStore<R>> TrackerRepository<R, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: Mutex::new(None),
        }
    }

    /// Borrow of the underlying store, mainly for host-side maintenance.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a row has been persisted for the date. Does not create one.
    pub async fn is_tracked(&self, date: NaiveDate) -> Result<bool, StoreError> {
        self.store.exists(date).await
    }

    /// The row for a date, creating and persisting the untracked default
    /// when the date was never seen before.
    pub async fn tracker_for_date(&self, date: NaiveDate) -> Result<R, StoreError> {
        let mut cache = self.cache.lock().await;
        self.tracker_for_date_locked(&mut cache, date).await
    }

    /// All rows of a month in date order, materializing and persisting
    /// untracked defaults for any day the store has no row for.
    pub async fn month(&self, month: YearMonth) -> Result<Vec<R>, StoreError> {
        let mut cache = self.cache.lock().await;
        if let Some(entry) = cache.as_ref()
            && entry.month == month
        {
            return Ok(entry.rows.clone());
        }

        let first = month.first_day();
        let last = month.last_day();
        let stored = self.store.for_range(first, last).await?;
        debug!(%month, stored = stored.len(), "loading tracker month");

        let mut rows = Vec::with_capacity(month.length() as usize);
        for date in month.days() {
            match stored.iter().find(|r| r.date() == date) {
                Some(row) => rows.push(row.clone()),
                None => {
                    let row = R::untracked(date);
                    self.store.save(&row).await?;
                    rows.push(row);
                }
            }
        }

        *cache = Some(MonthCache {
            month,
            rows: rows.clone(),
        });
        Ok(rows)
    }

    /// Core lookup, running under an already-held cache lock so the update
    /// paths can read-modify-write without re-locking.
    async fn tracker_for_date_locked(
        &self,
        cache: &mut Option<MonthCache<R>>,
        date: NaiveDate,
    ) -> Result<R, StoreError> {
        if let Some(entry) = cache.as_ref()
            && entry.month == YearMonth::from_date(date)
            && let Some(row) = entry.rows.iter().find(|r| r.date() == date)
        {
            return Ok(row.clone());
        }

        if let Some(row) = self.store.for_date(date).await? {
            Self::remember(cache, row.clone());
            return Ok(row);
        }

        debug!(%date, "creating untracked default row");
        let row = R::untracked(date);
        self.store.save(&row).await?;
        Self::remember(cache, row.clone());
        Ok(row)
    }

    /// Persists a row and mirrors it into the cache.
    async fn save_locked(
        &self,
        cache: &mut Option<MonthCache<R>>,
        row: R,
    ) -> Result<R, StoreError> {
        self.store.save(&row).await?;
        Self::remember(cache, row.clone());
        Ok(row)
    }

    /// Mirrors a row into the cache when the cached month covers it. A row
    /// from another month leaves the cache alone.
    fn remember(cache: &mut Option<MonthCache<R>>, row: R) {
        let Some(entry) = cache.as_mut() else {
            return;
        };
        if entry.month != YearMonth::from_date(row.date()) {
            return;
        }
        match entry.rows.iter_mut().find(|r| r.date() == row.date()) {
            Some(slot) => *slot = row,
            None => {
                entry.rows.push(row);
                entry.rows.sort_by_key(TrackerRow::date);
            }
        }
    }
}

impl<S: TrackerStore<FastTrackerDay>> TrackerRepository<FastTrackerDay, S> {
    /// Whether the date is marked as fasted. Creates the default row when
    /// the date was never tracked.
    pub async fn is_fasting(&self, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self.tracker_for_date(date).await?.fasting)
    }

    /// Marks or unmarks a single fasting day.
    pub async fn set_fasting(
        &self,
        date: NaiveDate,
        fasting: bool,
    ) -> Result<FastTrackerDay, StoreError> {
        let mut cache = self.cache.lock().await;
        let mut row = self.tracker_for_date_locked(&mut cache, date).await?;
        row.fasting = fasting;
        self.save_locked(&mut cache, row).await
    }

    /// Applies the same fasting flag to each date. Each date is its own
    /// read-modify-write; a store failure stops at the failing date and
    /// leaves earlier dates updated.
    pub async fn set_fasting_for_dates<I>(&self, dates: I, fasting: bool) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        for date in dates {
            self.set_fasting(date, fasting).await?;
        }
        Ok(())
    }
}

impl<S: TrackerStore<PrayerTrackerDay>> TrackerRepository<PrayerTrackerDay, S> {
    /// Marks or unmarks one prayer on a date. Sunrise is ignored by the
    /// row itself and the date is returned unchanged in that case.
    pub async fn set_prayed(
        &self,
        date: NaiveDate,
        prayer: Prayer,
        prayed: bool,
    ) -> Result<PrayerTrackerDay, StoreError> {
        let mut cache = self.cache.lock().await;
        let mut row = self.tracker_for_date_locked(&mut cache, date).await?;
        row.set(prayer, prayed);
        self.save_locked(&mut cache, row).await
    }
}

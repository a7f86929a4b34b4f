//! Monthly prayer-time cache and refresh policy.

use chrono::NaiveDate;
use salah_astronomy::PrayerTimesForDay;
use salah_types::{DailyPrayerTimes, MonthlyPrayerTimes, YearMonth};
use smallvec::SmallVec;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::clock::Clock;
use crate::error::StoreError;
use crate::normalize::normalize_for_zone;
use crate::settings::ResolvedSettings;
use crate::store::PrayerTimeStore;

/// Month-granularity repository over a persisted prayer-time store.
///
/// Owns a single live month cache, serialized through one mutex: concurrent
/// callers never interleave a check-recompute-persist sequence. The cache is
/// explicit per-instance state; hosts that want process-wide sharing hold
/// one instance in their composition root.
///
/// Refresh policy per query for "today":
/// - no persisted rows at all: recompute the whole current month;
/// - a persisted row for today: return it as is;
/// - rows exist but none for today (the persisted month has rolled over):
///   stale, recompute the whole current month.
///
/// Recomputation runs the calculator for every day of the month, applies the
/// DST normalization once for the batch, and upserts each day. Overwrite
/// semantics make it safe to repeat; a cancelled run resumes cleanly.
pub struct PrayerTimesRepository<S, C> {
    store: S,
    clock: C,
    cache: Mutex<Option<MonthlyPrayerTimes>>,
}

impl<S: PrayerTimeStore, C: Clock> PrayerTimesRepository<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            cache: Mutex::new(None),
        }
    }

    /// Borrow of the underlying store, mainly for host-side maintenance.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prayer times for today, recomputing the month only when stale.
    pub async fn prayer_times_for_today(
        &self,
        settings: &ResolvedSettings,
    ) -> Result<DailyPrayerTimes, StoreError> {
        let today = self.clock.today();
        let month = YearMonth::from_date(today);
        let mut cache = self.cache.lock().await;

        if let Some(entry) = cache.as_ref()
            && entry.month == month
            && let Some(day) = entry.day(today)
        {
            debug!(%month, date = %today, "serving prayer times from month cache");
            return Ok(*day);
        }

        if self.store.count().await? > 0 {
            if let Some(row) = self.store.for_date(today).await? {
                debug!(date = %today, "persisted prayer times are fresh");
                return Ok(row);
            }
            // Rows are only ever written a whole month at a time, so a
            // populated store with no row for today means the persisted
            // month has rolled over.
            debug!(date = %today, "persisted prayer times are stale");
        } else {
            debug!("no persisted prayer times, first computation");
        }

        self.recompute_month(settings, month, today, &mut cache)
            .await
    }

    /// Forces a full recomputation of the current month, regardless of
    /// staleness. Used after the user changes calculation settings.
    pub async fn update_prayer_times(
        &self,
        settings: &ResolvedSettings,
    ) -> Result<DailyPrayerTimes, StoreError> {
        let today = self.clock.today();
        let month = YearMonth::from_date(today);
        let mut cache = self.cache.lock().await;
        self.recompute_month(settings, month, today, &mut cache)
            .await
    }

    async fn recompute_month(
        &self,
        settings: &ResolvedSettings,
        month: YearMonth,
        requested: NaiveDate,
        cache: &mut Option<MonthlyPrayerTimes>,
    ) -> Result<DailyPrayerTimes, StoreError> {
        debug!(%month, "recomputing prayer times for the month");

        let mut days: SmallVec<[DailyPrayerTimes; 31]> = month
            .days()
            .map(|date| {
                PrayerTimesForDay::new(settings.coordinates, date, &settings.parameters).into()
            })
            .collect();
        normalize_for_zone(&mut days, self.clock.zone_rules());

        for day in &days {
            self.store.upsert(day).await?;
        }

        let entry = MonthlyPrayerTimes::new(month, days);
        let result = entry
            .day(requested)
            .copied()
            .ok_or(StoreError::MissingRow { date: requested });
        if result.is_err() {
            warn!(date = %requested, "requested date missing after recompute");
        }
        *cache = Some(entry);
        result
    }
}

//! # Salah
//!
//! Prayer time calculation for any location and date, with qibla bearing
//! and month-cached prayer and fasting trackers.
//!
//! This crate is a facade that re-exports the `salah` ecosystem:
//!
//! - `salah-types`: calculation parameters, methods, and result types
//! - `salah-astronomy`: solar positioning, prayer assembly, qibla
//! - `salah-store`: settings resolution, persistence traits, repositories
//!
//! ## Usage
//!
//! ```rust
//! use salah::prelude::*;
//! use chrono::NaiveDate;
//!
//! let makkah = Coordinates::new(21.4225241, 39.8261818).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
//! let params = CalculationParameters::for_method(CalculationMethod::Makkah);
//! let times = PrayerTimesForDay::new(makkah, date, &params);
//! assert!(times.time_for(Prayer::Fajr).is_some());
//! ```

pub use salah_astronomy::*;
pub use salah_store::*;
pub use salah_types::*;

/// Everything most callers need, in one import.
pub mod prelude {
    pub use salah_astronomy::{KAABA, PrayerTimesForDay, qibla_bearing};
    pub use salah_store::{
        Clock, FastTrackerRepository, FixedClock, PrayerTimeStore, PrayerTimesRepository,
        PrayerTrackerRepository, ResolvedSettings, SettingsSource, StoreError, SystemClock,
        TrackerStore, ZoneRules, resolve_settings,
    };
    pub use salah_types::{
        CalculationMethod, CalculationParameters, Coordinates, DailyPrayerTimes, FastTrackerDay,
        HighLatitudeRule, Madhab, MonthlyPrayerTimes, Prayer, PrayerAdjustments, PrayerTrackerDay,
        SalahError, YearMonth,
    };
}

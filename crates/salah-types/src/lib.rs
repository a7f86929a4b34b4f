//! Core types shared across the salah workspace.
//!
//! Everything here is a plain value: coordinates, calculation parameters,
//! computed prayer-time sets, and per-day tracker rows. No I/O, no clocks.

pub mod coordinates;
pub mod error;
pub mod params;
pub mod times;
pub mod tracker;

pub use coordinates::Coordinates;
pub use error::SalahError;
pub use params::{
    CalculationMethod, CalculationParameters, HighLatitudeRule, Madhab, NightPortions,
    PrayerAdjustments,
};
pub use times::{DailyPrayerTimes, MonthlyPrayerTimes, Prayer, YearMonth};
pub use tracker::{FastTrackerDay, PrayerTrackerDay};

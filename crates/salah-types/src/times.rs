use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// The six canonical daily prayer instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Prayer::Fajr => "Fajr",
            Prayer::Sunrise => "Sunrise",
            Prayer::Dhuhr => "Dhuhr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        };
        write!(f, "{s}")
    }
}

/// A calendar month, the cache granularity of the whole store layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Out-of-range months are clamped into 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Number of days in this month.
    pub fn length(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        // Both dates are always constructible for a valid month.
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
        (next - first).num_days() as u32
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.length()).unwrap()
    }

    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Iterates every date of the month in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let ym = *self;
        (1..=ym.length()).map(move |d| ym.day(d).unwrap())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Computed prayer instants for one calendar date.
///
/// Individual instants are `None` when the high-latitude edge case leaves
/// them unresolved; callers must handle partial results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPrayerTimes {
    pub date: NaiveDate,
    pub fajr: Option<NaiveDateTime>,
    pub sunrise: Option<NaiveDateTime>,
    pub dhuhr: Option<NaiveDateTime>,
    pub asr: Option<NaiveDateTime>,
    pub maghrib: Option<NaiveDateTime>,
    pub isha: Option<NaiveDateTime>,
}

impl DailyPrayerTimes {
    /// A fully unresolved day (high-latitude failure).
    pub fn unresolved(date: NaiveDate) -> Self {
        Self {
            date,
            fajr: None,
            sunrise: None,
            dhuhr: None,
            asr: None,
            maghrib: None,
            isha: None,
        }
    }

    pub fn time_for(&self, prayer: Prayer) -> Option<NaiveDateTime> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// True when every instant resolved.
    pub fn is_complete(&self) -> bool {
        Prayer::ALL.iter().all(|p| self.time_for(*p).is_some())
    }

    /// True when the resolved instants are non-decreasing in canonical
    /// order. Unresolved instants are skipped.
    pub fn is_chronological(&self) -> bool {
        let mut last: Option<NaiveDateTime> = None;
        for prayer in Prayer::ALL {
            if let Some(t) = self.time_for(prayer) {
                if let Some(prev) = last
                    && t < prev
                {
                    return false;
                }
                last = Some(t);
            }
        }
        true
    }

    /// Applies a closure to every resolved instant in place.
    pub fn map_times(&mut self, mut f: impl FnMut(NaiveDateTime) -> NaiveDateTime) {
        for slot in [
            &mut self.fajr,
            &mut self.sunrise,
            &mut self.dhuhr,
            &mut self.asr,
            &mut self.maghrib,
            &mut self.isha,
        ] {
            if let Some(t) = slot {
                *slot = Some(f(*t));
            }
        }
    }
}

/// One computed month, covering exactly days 1..=length of `month`.
///
/// Always replaced whole, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPrayerTimes {
    pub month: YearMonth,
    pub days: SmallVec<[DailyPrayerTimes; 31]>,
}

impl MonthlyPrayerTimes {
    pub fn new(month: YearMonth, days: SmallVec<[DailyPrayerTimes; 31]>) -> Self {
        debug_assert_eq!(days.len() as u32, month.length());
        Self { month, days }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DailyPrayerTimes> {
        if YearMonth::from_date(date) != self.month {
            return None;
        }
        self.days.iter().find(|d| d.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_length() {
        assert_eq!(YearMonth::new(2024, 2).length(), 29);
        assert_eq!(YearMonth::new(2023, 2).length(), 28);
        assert_eq!(YearMonth::new(2024, 12).length(), 31);
        assert_eq!(YearMonth::new(2024, 4).length(), 30);
    }

    #[test]
    fn test_year_month_clamps_out_of_range() {
        assert_eq!(YearMonth::new(2024, 13), YearMonth::new(2024, 12));
        assert_eq!(YearMonth::new(2024, 0), YearMonth::new(2024, 1));
        // Accessors stay panic-free on the clamped value.
        assert_eq!(YearMonth::new(2024, 13).length(), 31);
    }

    #[test]
    fn test_year_month_days_cover_month() {
        let ym = YearMonth::new(2024, 2);
        let days: Vec<_> = ym.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(days[28], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_chronological_with_gaps() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut day = DailyPrayerTimes::unresolved(date);
        day.fajr = date.and_hms_opt(3, 0, 0);
        day.dhuhr = date.and_hms_opt(13, 0, 0);
        day.isha = date.and_hms_opt(23, 0, 0);
        assert!(day.is_chronological());
        assert!(!day.is_complete());

        day.maghrib = date.and_hms_opt(12, 0, 0);
        assert!(!day.is_chronological());
    }

    #[test]
    fn test_monthly_lookup_rejects_other_month() {
        let ym = YearMonth::new(2024, 3);
        let days: SmallVec<[DailyPrayerTimes; 31]> =
            ym.days().map(DailyPrayerTimes::unresolved).collect();
        let month = MonthlyPrayerTimes::new(ym, days);
        let inside = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let outside = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
        assert!(month.day(inside).is_some());
        assert!(month.day(outside).is_none());
    }
}

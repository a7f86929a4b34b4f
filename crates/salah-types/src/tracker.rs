use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::times::Prayer;

/// Per-day fasting tracker row. Created lazily on first access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FastTrackerDay {
    pub date: NaiveDate,
    pub fasting: bool,
}

impl FastTrackerDay {
    /// Default untracked row for a date.
    pub fn untracked(date: NaiveDate) -> Self {
        Self {
            date,
            fasting: false,
        }
    }
}

/// Per-day prayer tracker row, one flag per obligatory prayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTrackerDay {
    pub date: NaiveDate,
    pub fajr: bool,
    pub dhuhr: bool,
    pub asr: bool,
    pub maghrib: bool,
    pub isha: bool,
}

impl PrayerTrackerDay {
    /// Default untracked row for a date.
    pub fn untracked(date: NaiveDate) -> Self {
        Self {
            date,
            fajr: false,
            dhuhr: false,
            asr: false,
            maghrib: false,
            isha: false,
        }
    }

    /// Marks one prayer. Sunrise is not an obligatory prayer and is ignored.
    pub fn set(&mut self, prayer: Prayer, prayed: bool) {
        match prayer {
            Prayer::Fajr => self.fajr = prayed,
            Prayer::Dhuhr => self.dhuhr = prayed,
            Prayer::Asr => self.asr = prayed,
            Prayer::Maghrib => self.maghrib = prayed,
            Prayer::Isha => self.isha = prayed,
            Prayer::Sunrise => {}
        }
    }

    pub fn completed_count(&self) -> u32 {
        [self.fajr, self.dhuhr, self.asr, self.maghrib, self.isha]
            .iter()
            .filter(|p| **p)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untracked_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert!(!FastTrackerDay::untracked(date).fasting);
        assert_eq!(PrayerTrackerDay::untracked(date).completed_count(), 0);
    }

    #[test]
    fn test_set_ignores_sunrise() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        let mut row = PrayerTrackerDay::untracked(date);
        row.set(Prayer::Sunrise, true);
        assert_eq!(row.completed_count(), 0);
        row.set(Prayer::Fajr, true);
        row.set(Prayer::Isha, true);
        assert_eq!(row.completed_count(), 2);
    }
}

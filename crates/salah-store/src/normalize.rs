//! Daylight-saving normalization for computed batches.

use chrono::Duration;
use salah_types::DailyPrayerTimes;

use crate::clock::ZoneRules;

/// Shifts every instant of every day by the current daylight-saving delta.
///
/// The delta is sampled once (from the query instant) and applied uniformly
/// to the whole batch, matching how the stored "local" times are kept valid
/// across a clock change without recomputation. Days on the far side of a
/// mid-month DST transition inherit the same delta; that imprecision is the
/// documented behavior of this policy, not an accident.
pub fn normalize_for_zone(days: &mut [DailyPrayerTimes], rules: ZoneRules) {
    if !rules.dst_active || rules.dst_offset_hours == 0 {
        return;
    }
    let shift = Duration::hours(rules.dst_offset_hours);
    for day in days.iter_mut() {
        day.map_times(|t| t + shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample_day(day: u32) -> DailyPrayerTimes {
        let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        let mut times = DailyPrayerTimes::unresolved(date);
        times.fajr = date.and_hms_opt(3, 30, 0);
        times.dhuhr = date.and_hms_opt(13, 0, 0);
        times.isha = date.and_hms_opt(23, 15, 0);
        times
    }

    #[test]
    fn test_inactive_rules_pass_through() {
        let mut days = vec![sample_day(1), sample_day(2)];
        let before = days.clone();
        normalize_for_zone(&mut days, ZoneRules::standard());
        assert_eq!(days, before);
    }

    #[test]
    fn test_positive_delta_adds_hours() {
        let mut days = vec![sample_day(1)];
        normalize_for_zone(
            &mut days,
            ZoneRules {
                dst_active: true,
                dst_offset_hours: 1,
            },
        );
        assert_eq!(
            days[0].fajr,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(4, 30, 0)
        );
        // Unresolved instants stay unresolved.
        assert!(days[0].sunrise.is_none());
    }

    #[test]
    fn test_negative_delta_subtracts_hours() {
        let mut days = vec![sample_day(1)];
        normalize_for_zone(
            &mut days,
            ZoneRules {
                dst_active: true,
                dst_offset_hours: -1,
            },
        );
        assert_eq!(
            days[0].dhuhr,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(12, 0, 0)
        );
    }

    #[test]
    fn test_applies_to_every_day_in_batch() {
        let mut days = vec![sample_day(1), sample_day(2), sample_day(3)];
        normalize_for_zone(
            &mut days,
            ZoneRules {
                dst_active: true,
                dst_offset_hours: 1,
            },
        );
        for day in &days {
            assert_eq!(day.fajr.unwrap().time().hour(), 4);
        }
    }
}

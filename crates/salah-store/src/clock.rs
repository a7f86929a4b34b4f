//! Clock and timezone-rule collaborator.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

/// The zone facts the normalizer needs, sampled at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneRules {
    /// Whether daylight saving is in effect right now.
    pub dst_active: bool,
    /// Signed whole-hour difference between the current offset and the
    /// zone's standard (non-DST) offset.
    pub dst_offset_hours: i64,
}

impl ZoneRules {
    /// No daylight saving in effect.
    pub fn standard() -> Self {
        Self {
            dst_active: false,
            dst_offset_hours: 0,
        }
    }
}

/// Source of "now" and the current zone rules.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    fn zone_rules(&self) -> ZoneRules;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// System clock using the process-local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    fn offset_seconds_at(year: i32, month: u32, day: u32) -> Option<i32> {
        Local
            .with_ymd_and_hms(year, month, day, 12, 0, 0)
            .single()
            .map(|dt| dt.offset().local_minus_utc())
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    /// The standard offset is estimated as the smaller of the mid-January
    /// and mid-July offsets; whichever season is currently larger is the
    /// daylight-saving one.
    fn zone_rules(&self) -> ZoneRules {
        let now = Local::now();
        let current = now.offset().local_minus_utc();
        let year = now.year();
        let standard = match (
            Self::offset_seconds_at(year, 1, 15),
            Self::offset_seconds_at(year, 7, 15),
        ) {
            (Some(jan), Some(jul)) => jan.min(jul),
            _ => current,
        };
        let delta = (current - standard) as i64;
        ZoneRules {
            dst_active: delta != 0,
            dst_offset_hours: delta / 3600,
        }
    }
}

/// Fixed clock for tests and replay.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: NaiveDateTime,
    rules: ZoneRules,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime, rules: ZoneRules) -> Self {
        Self { now, rules }
    }

    pub fn at_midnight(date: NaiveDate, rules: ZoneRules) -> Self {
        Self {
            now: date.and_hms_opt(0, 0, 0).unwrap(),
            rules,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }

    fn zone_rules(&self) -> ZoneRules {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let rules = ZoneRules {
            dst_active: true,
            dst_offset_hours: 1,
        };
        let clock = FixedClock::at_midnight(date, rules);
        assert_eq!(clock.today(), date);
        assert_eq!(clock.zone_rules(), rules);
    }

    #[test]
    fn test_system_clock_rules_sane() {
        let rules = SystemClock.zone_rules();
        // DST deltas are whole hours in [-2, 2] everywhere that observes it.
        assert!(rules.dst_offset_hours.abs() <= 2);
        if !rules.dst_active {
            assert_eq!(rules.dst_offset_hours, 0);
        }
    }
}

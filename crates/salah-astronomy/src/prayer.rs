//! Six-prayer assembly for a single calendar day.
//!
//! Combines the solar timetable with a parameter set: twilight angles or
//! the fixed Isha interval, the madhab shadow rule for Asr, high-latitude
//! night-fraction bounds, and flat per-prayer minute adjustments.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use salah_types::{
    CalculationMethod, CalculationParameters, Coordinates, DailyPrayerTimes, Prayer,
};

use crate::julian::julian_day;
use crate::seasonal::{season_adjusted_evening_twilight, season_adjusted_morning_twilight};
use crate::solar::SolarTime;

/// Latitude above which the Moonsighting method switches to night-seventh
/// twilight estimates.
const MOONSIGHTING_HIGH_LATITUDE: f64 = 55.0;

/// Converts a fractional hour of day into an instant on `date`.
///
/// `None` for NaN/infinite inputs (unreachable solar events).
fn instant_from_hours(hours: f64, date: NaiveDate) -> Option<NaiveDateTime> {
    if !hours.is_finite() {
        return None;
    }
    let whole_hours = hours.floor();
    let minutes = ((hours - whole_hours) * 60.0).floor();
    let seconds = ((hours - (whole_hours + minutes / 60.0)) * 3600.0).floor();
    let total = whole_hours as i64 * 3600 + minutes as i64 * 60 + seconds as i64;
    Some(date.and_hms_opt(0, 0, 0)? + Duration::seconds(total))
}

/// Rounds to the nearest whole minute.
fn rounded_minute(time: NaiveDateTime) -> NaiveDateTime {
    let seconds = time.second() as i64;
    if seconds >= 30 {
        time + Duration::seconds(60 - seconds)
    } else {
        time - Duration::seconds(seconds)
    }
}

/// The six prayer instants computed for one date.
///
/// Construction is deterministic and performs no I/O. When the required
/// solar events do not all resolve (polar day/night), every instant is
/// `None` and callers see a fully unresolved day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimesForDay {
    date: NaiveDate,
    fajr: Option<NaiveDateTime>,
    sunrise: Option<NaiveDateTime>,
    dhuhr: Option<NaiveDateTime>,
    asr: Option<NaiveDateTime>,
    maghrib: Option<NaiveDateTime>,
    isha: Option<NaiveDateTime>,
}

impl PrayerTimesForDay {
    pub fn new(coordinates: Coordinates, date: NaiveDate, params: &CalculationParameters) -> Self {
        match Self::compute(coordinates, date, params) {
            Some(day) => day,
            None => Self {
                date,
                fajr: None,
                sunrise: None,
                dhuhr: None,
                asr: None,
                maghrib: None,
                isha: None,
            },
        }
    }

    fn compute(
        coordinates: Coordinates,
        date: NaiveDate,
        params: &CalculationParameters,
    ) -> Option<Self> {
        let tomorrow = date.succ_opt()?;
        let solar = SolarTime::new(julian_day(date.year(), date.month(), date.day()), coordinates);
        let tomorrow_solar = SolarTime::new(
            julian_day(tomorrow.year(), tomorrow.month(), tomorrow.day()),
            coordinates,
        );

        let transit = instant_from_hours(solar.transit, date)?;
        let sunrise = instant_from_hours(solar.sunrise, date)?;
        let sunset = instant_from_hours(solar.sunset, date)?;
        let tomorrow_sunrise = instant_from_hours(tomorrow_solar.sunrise, tomorrow)?;

        let asr = instant_from_hours(solar.afternoon(params.madhab.shadow_length()), date)?;

        let night = tomorrow_sunrise - sunset;
        let night_seconds = night.num_seconds() as f64;
        let day_of_year = date.ordinal();

        // Fajr: angle-based, with the high-latitude bound as a floor.
        let mut fajr = instant_from_hours(solar.hour_angle(-params.fajr_angle, false), date);
        if params.method == CalculationMethod::Moonsighting
            && coordinates.latitude() >= MOONSIGHTING_HIGH_LATITUDE
        {
            fajr = Some(sunrise - Duration::seconds(night.num_seconds() / 7));
        }
        let safe_fajr = if params.method == CalculationMethod::Moonsighting {
            season_adjusted_morning_twilight(
                coordinates.latitude(),
                day_of_year,
                date.year(),
                sunrise,
            )
        } else {
            let fraction = (params.night_portions().fajr * night_seconds) as i64;
            sunrise - Duration::seconds(fraction)
        };
        let fajr = match fajr {
            Some(t) if t >= safe_fajr => t,
            _ => safe_fajr,
        };

        // Isha: fixed interval after Maghrib, or angle-based with the
        // symmetric bound as a ceiling.
        let isha = if params.isha_interval_minutes > 0 {
            sunset + Duration::minutes(params.isha_interval_minutes)
        } else {
            let mut isha = instant_from_hours(solar.hour_angle(-params.isha_angle, true), date);
            if params.method == CalculationMethod::Moonsighting
                && coordinates.latitude() >= MOONSIGHTING_HIGH_LATITUDE
            {
                isha = Some(sunset + Duration::seconds(night.num_seconds() / 7));
            }
            let safe_isha = if params.method == CalculationMethod::Moonsighting {
                season_adjusted_evening_twilight(
                    coordinates.latitude(),
                    day_of_year,
                    date.year(),
                    sunset,
                )
            } else {
                let fraction = (params.night_portions().isha * night_seconds) as i64;
                sunset + Duration::seconds(fraction)
            };
            match isha {
                Some(t) if t <= safe_isha => t,
                _ => safe_isha,
            }
        };

        let adj = &params.adjustments;
        Some(Self {
            date,
            fajr: Some(rounded_minute(fajr + Duration::minutes(adj.fajr))),
            sunrise: Some(rounded_minute(sunrise + Duration::minutes(adj.sunrise))),
            dhuhr: Some(rounded_minute(transit + Duration::minutes(adj.dhuhr))),
            asr: Some(rounded_minute(asr + Duration::minutes(adj.asr))),
            maghrib: Some(rounded_minute(sunset + Duration::minutes(adj.maghrib))),
            isha: Some(rounded_minute(isha + Duration::minutes(adj.isha))),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
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
}

impl From<PrayerTimesForDay> for DailyPrayerTimes {
    fn from(day: PrayerTimesForDay) -> Self {
        DailyPrayerTimes {
            date: day.date,
            fajr: day.fajr,
            sunrise: day.sunrise,
            dhuhr: day.dhuhr,
            asr: day.asr,
            maghrib: day.maghrib,
            isha: day.isha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use salah_types::Madhab;

    fn dublin() -> Coordinates {
        Coordinates::new(53.3498, -6.2603).unwrap()
    }

    #[test]
    fn test_dublin_fajr_known_value() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let params = CalculationParameters::new(14.0, 14.0, CalculationMethod::Ireland);
        let times = PrayerTimesForDay::new(dublin(), date, &params);
        let fajr = times.time_for(Prayer::Fajr).unwrap();
        assert_eq!(fajr.date(), date);
        assert_eq!(fajr.time(), NaiveTime::from_hms_opt(6, 58, 0).unwrap());
    }

    #[test]
    fn test_karachi_known_windows() {
        // Karachi 2024-01-15, University of Islamic Sciences preset.
        // UTC instants; local time is UTC+5 (Fajr 05:58, Sunrise 07:19, ...)
        // and agrees with published Karachi timetables.
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let coords = Coordinates::new(24.8607, 67.0011).unwrap();
        let params = CalculationParameters::new(18.0, 18.0, CalculationMethod::Karachi);
        let times = PrayerTimesForDay::new(coords, date, &params);

        let expected = [
            (Prayer::Fajr, 0, 58),
            (Prayer::Sunrise, 2, 19),
            (Prayer::Dhuhr, 7, 41),
            (Prayer::Asr, 10, 44),
            (Prayer::Maghrib, 13, 4),
            (Prayer::Isha, 14, 24),
        ];
        for (prayer, hour, minute) in expected {
            let t = times.time_for(prayer).unwrap();
            let target = date.and_hms_opt(hour, minute, 0).unwrap();
            let drift = (t - target).num_minutes().abs();
            assert!(drift <= 1, "{prayer} was {t}, expected ~{target}");
        }
    }

    #[test]
    fn test_ordering_invariant() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let params = CalculationParameters::for_method(CalculationMethod::MuslimWorldLeague);
        let day: DailyPrayerTimes = PrayerTimesForDay::new(dublin(), date, &params).into();
        assert!(day.is_complete());
        assert!(day.is_chronological());
    }

    #[test]
    fn test_hanafi_asr_not_earlier() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let base = CalculationParameters::for_method(CalculationMethod::MuslimWorldLeague);
        let standard = base.with_madhab(Madhab::Standard);
        let hanafi = base.with_madhab(Madhab::Hanafi);

        let asr_standard = PrayerTimesForDay::new(dublin(), date, &standard)
            .time_for(Prayer::Asr)
            .unwrap();
        let asr_hanafi = PrayerTimesForDay::new(dublin(), date, &hanafi)
            .time_for(Prayer::Asr)
            .unwrap();
        assert!(asr_hanafi >= asr_standard);
    }

    #[test]
    fn test_interval_isha() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let coords = Coordinates::new(21.3891, 39.8579).unwrap();
        let params = CalculationParameters::for_method(CalculationMethod::Makkah);
        let times = PrayerTimesForDay::new(coords, date, &params);
        let maghrib = times.time_for(Prayer::Maghrib).unwrap();
        let isha = times.time_for(Prayer::Isha).unwrap();
        // Rounding each endpoint keeps the gap within a minute of 90.
        let gap = (isha - maghrib).num_minutes();
        assert!((89..=91).contains(&gap), "gap was {gap}");
    }

    #[test]
    fn test_adjustment_shifts_exactly() {
        use salah_types::PrayerAdjustments;
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let base = CalculationParameters::for_method(CalculationMethod::MuslimWorldLeague);
        let shifted = base.with_adjustments(PrayerAdjustments::new(0, 0, 7, 0, 0, 0));

        let dhuhr_base = PrayerTimesForDay::new(dublin(), date, &base)
            .time_for(Prayer::Dhuhr)
            .unwrap();
        let dhuhr_shifted = PrayerTimesForDay::new(dublin(), date, &shifted)
            .time_for(Prayer::Dhuhr)
            .unwrap();
        assert_eq!(dhuhr_shifted - dhuhr_base, Duration::minutes(7));
    }

    #[test]
    fn test_polar_night_fully_unresolved() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
        let svalbard = Coordinates::new(78.22, 15.65).unwrap();
        let params = CalculationParameters::for_method(CalculationMethod::MuslimWorldLeague);
        let day: DailyPrayerTimes = PrayerTimesForDay::new(svalbard, date, &params).into();
        for prayer in Prayer::ALL {
            assert!(day.time_for(prayer).is_none());
        }
    }

    #[test]
    fn test_determinism() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let params = CalculationParameters::for_method(CalculationMethod::Isna);
        let a = PrayerTimesForDay::new(dublin(), date, &params);
        let b = PrayerTimesForDay::new(dublin(), date, &params);
        assert_eq!(a, b);
    }
}

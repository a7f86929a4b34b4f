//! Season-adjusted twilight bounds for the Moonsighting Committee method.
//!
//! At higher latitudes the committee's tables replace angle-based twilight
//! with a latitude- and season-dependent minute offset from sunrise/sunset.

use chrono::{Duration, NaiveDateTime};

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Days elapsed since the (hemisphere-appropriate) winter solstice.
pub fn days_since_solstice(day_of_year: u32, year: i32, latitude: f64) -> u32 {
    let northern_offset: u32 = 10;
    let southern_offset: i64 = if is_leap_year(year) { 173 } else { 172 };
    let days_in_year: u32 = if is_leap_year(year) { 366 } else { 365 };

    if latitude >= 0.0 {
        let d = day_of_year + northern_offset;
        if d >= days_in_year { d - days_in_year } else { d }
    } else {
        let d = day_of_year as i64 - southern_offset;
        if d < 0 {
            (d + days_in_year as i64) as u32
        } else {
            d as u32
        }
    }
}

fn seasonal_adjustment(dyy: u32, a: f64, b: f64, c: f64, d: f64) -> f64 {
    let dyy = dyy as f64;
    if dyy < 91.0 {
        a + (b - a) / 91.0 * dyy
    } else if dyy < 137.0 {
        b + (c - b) / 46.0 * (dyy - 91.0)
    } else if dyy < 183.0 {
        c + (d - c) / 46.0 * (dyy - 137.0)
    } else if dyy < 229.0 {
        d + (c - d) / 46.0 * (dyy - 183.0)
    } else if dyy < 275.0 {
        c + (b - c) / 46.0 * (dyy - 229.0)
    } else {
        b + (a - b) / 91.0 * (dyy - 275.0)
    }
}

/// Morning twilight bound: minutes before sunrise, seasonally interpolated.
pub fn season_adjusted_morning_twilight(
    latitude: f64,
    day_of_year: u32,
    year: i32,
    sunrise: NaiveDateTime,
) -> NaiveDateTime {
    let a = 75.0 + 28.65 / 55.0 * latitude.abs();
    let b = 75.0 + 19.44 / 55.0 * latitude.abs();
    let c = 75.0 + 32.74 / 55.0 * latitude.abs();
    let d = 75.0 + 48.10 / 55.0 * latitude.abs();

    let dyy = days_since_solstice(day_of_year, year, latitude);
    let adjustment = seasonal_adjustment(dyy, a, b, c, d);
    sunrise + Duration::seconds(-(adjustment * 60.0).round() as i64)
}

/// Evening twilight bound: minutes after sunset, seasonally interpolated.
pub fn season_adjusted_evening_twilight(
    latitude: f64,
    day_of_year: u32,
    year: i32,
    sunset: NaiveDateTime,
) -> NaiveDateTime {
    let a = 75.0 + 25.60 / 55.0 * latitude.abs();
    let b = 75.0 + 2.05 / 55.0 * latitude.abs();
    let c = 75.0 - 9.21 / 55.0 * latitude.abs();
    let d = 75.0 + 6.14 / 55.0 * latitude.abs();

    let dyy = days_since_solstice(day_of_year, year, latitude);
    let adjustment = seasonal_adjustment(dyy, a, b, c, d);
    sunset + Duration::seconds((adjustment * 60.0).round() as i64)
}

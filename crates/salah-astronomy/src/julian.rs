//! Julian day arithmetic.

/// Julian day number for a Gregorian calendar date at 00:00 UT.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    julian_day_at_hour(year, month, day, 0.0)
}

/// Julian day number with a fractional hour of day.
pub fn julian_day_at_hour(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    // January and February count as months 13 and 14 of the prior year.
    let y = if month > 2 { year } else { year - 1 };
    let m = if month > 2 { month as i32 } else { month as i32 + 12 };
    let d = day as f64 + hours / 24.0;

    let a = y / 100;
    let b = 2 - a + a / 4;

    let i0 = (365.25 * (y as f64 + 4716.0)).floor();
    let i1 = (30.6001 * (m as f64 + 1.0)).floor();
    i0 + i1 + d + b as f64 - 1524.5
}

/// Julian centuries since the epoch J2000.0.
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - 2451545.0) / 36525.0
}

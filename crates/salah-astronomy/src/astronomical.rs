//! Solar-position series and the transit/hour-angle corrections.
//!
//! These are the published low-accuracy series (Astronomical Algorithms,
//! Meeus) that prayer-time conventions are defined against. All angles are
//! in degrees unless a name says otherwise; time-of-day values are fractions
//! of a day.

/// Normalizes to [0, max).
pub fn normalized_with_bound(value: f64, max: f64) -> f64 {
    value - max * (value / max).floor()
}

/// Normalizes an angle to [0, 360).
pub fn unwind_angle(angle: f64) -> f64 {
    normalized_with_bound(angle, 360.0)
}

/// Smallest equivalent angle in [-180, 180].
pub fn closest_angle(angle: f64) -> f64 {
    if (-180.0..=180.0).contains(&angle) {
        angle
    } else {
        angle - 360.0 * (angle / 360.0).round()
    }
}

/// Geometric mean longitude of the sun.
pub fn mean_solar_longitude(t: f64) -> f64 {
    let term1 = 280.4664567;
    let term2 = 36000.76983 * t;
    let term3 = 0.0003032 * t.powi(2);
    unwind_angle(term1 + term2 + term3)
}

/// Mean longitude of the moon.
pub fn mean_lunar_longitude(t: f64) -> f64 {
    let term1 = 218.3165;
    let term2 = 481267.8813 * t;
    unwind_angle(term1 + term2)
}

/// Longitude of the ascending lunar node.
pub fn ascending_lunar_node_longitude(t: f64) -> f64 {
    let term1 = 125.04452;
    let term2 = 1934.136261 * t;
    let term3 = 0.0020708 * t.powi(2);
    let term4 = t.powi(3) / 450000.0;
    unwind_angle(term1 - term2 + term3 + term4)
}

/// Mean anomaly of the sun.
pub fn mean_solar_anomaly(t: f64) -> f64 {
    let term1 = 357.52911;
    let term2 = 35999.05029 * t;
    let term3 = 0.0001537 * t.powi(2);
    unwind_angle(term1 + term2 - term3)
}

/// The sun's equation of the center, given its mean anomaly `m`.
pub fn solar_equation_of_the_center(t: f64, m: f64) -> f64 {
    let mrad = m.to_radians();
    let term1 = (1.914602 - 0.004817 * t - 0.000014 * t.powi(2)) * mrad.sin();
    let term2 = (0.019993 - 0.000101 * t) * (2.0 * mrad).sin();
    let term3 = 0.000289 * (3.0 * mrad).sin();
    term1 + term2 + term3
}

/// Apparent longitude of the sun, referred to the true equinox of the date.
pub fn apparent_solar_longitude(t: f64, l0: f64) -> f64 {
    let longitude = l0 + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = 125.04 - 1934.136 * t;
    let lambda = longitude - 0.00569 - 0.00478 * omega.to_radians().sin();
    unwind_angle(lambda)
}

/// Mean obliquity of the ecliptic.
pub fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    let term1 = 23.439291;
    let term2 = 0.013004167 * t;
    let term3 = 0.0000001639 * t.powi(2);
    let term4 = 0.0000005036 * t.powi(3);
    term1 - term2 - term3 + term4
}

/// Mean obliquity corrected for nutation.
pub fn apparent_obliquity_of_the_ecliptic(t: f64, epsilon0: f64) -> f64 {
    let o = 125.04 - 1934.136 * t;
    epsilon0 + 0.00256 * o.to_radians().cos()
}

/// Mean sidereal time at Greenwich.
pub fn mean_sidereal_time(t: f64) -> f64 {
    let jd = t * 36525.0 + 2451545.0;
    let term1 = 280.46061837;
    let term2 = 360.98564736629 * (jd - 2451545.0);
    let term3 = 0.000387933 * t.powi(2);
    let term4 = t.powi(3) / 38710000.0;
    unwind_angle(term1 + term2 + term3 - term4)
}

/// Nutation in longitude (ΔΨ).
pub fn nutation_in_longitude(l0: f64, lp: f64, omega: f64) -> f64 {
    let term1 = (-17.2 / 3600.0) * omega.to_radians().sin();
    let term2 = (1.32 / 3600.0) * (2.0 * l0).to_radians().sin();
    let term3 = (0.23 / 3600.0) * (2.0 * lp).to_radians().sin();
    let term4 = (0.21 / 3600.0) * (2.0 * omega).to_radians().sin();
    term1 - term2 - term3 + term4
}

/// Nutation in obliquity (Δε).
pub fn nutation_in_obliquity(l0: f64, lp: f64, omega: f64) -> f64 {
    let term1 = (9.2 / 3600.0) * omega.to_radians().cos();
    let term2 = (0.57 / 3600.0) * (2.0 * l0).to_radians().cos();
    let term3 = (0.10 / 3600.0) * (2.0 * lp).to_radians().cos();
    let term4 = (0.09 / 3600.0) * (2.0 * omega).to_radians().cos();
    term1 + term2 + term3 - term4
}

/// Altitude of a body at hour angle `h`, in degrees.
pub fn altitude_of_celestial_body(observer_latitude: f64, declination: f64, h: f64) -> f64 {
    let phi = observer_latitude.to_radians();
    let delta = declination.to_radians();
    let term = phi.sin() * delta.sin() + phi.cos() * delta.cos() * h.to_radians().cos();
    term.asin().to_degrees()
}

/// Approximate transit of the sun, as a fraction of the day.
pub fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    let lw = -longitude;
    normalized_with_bound((right_ascension + lw - sidereal_time) / 360.0, 1.0)
}

/// Transit corrected by interpolated right ascension, in hours.
pub fn corrected_transit(
    approximate_transit: f64,
    longitude: f64,
    sidereal_time: f64,
    right_ascension: f64,
    previous_right_ascension: f64,
    next_right_ascension: f64,
) -> f64 {
    let m0 = approximate_transit;
    let lw = -longitude;
    let theta = unwind_angle(sidereal_time + 360.985647 * m0);
    let a = unwind_angle(interpolate_angles(
        right_ascension,
        previous_right_ascension,
        next_right_ascension,
        m0,
    ));
    let h = closest_angle(theta - lw - a);
    let dm = h / -360.0;
    (m0 + dm) * 24.0
}

/// Hour angle of the sun at a target altitude, in hours.
///
/// NaN when the sun never reaches `angle` on this day (polar edge cases);
/// callers convert that to an unresolved instant.
#[allow(clippy::too_many_arguments)]
pub fn corrected_hour_angle(
    approximate_transit: f64,
    angle: f64,
    latitude: f64,
    longitude: f64,
    after_transit: bool,
    sidereal_time: f64,
    right_ascension: f64,
    previous_right_ascension: f64,
    next_right_ascension: f64,
    declination: f64,
    previous_declination: f64,
    next_declination: f64,
) -> f64 {
    let m0 = approximate_transit;
    let lw = -longitude;
    let term1 =
        angle.to_radians().sin() - latitude.to_radians().sin() * declination.to_radians().sin();
    let term2 = latitude.to_radians().cos() * declination.to_radians().cos();
    let h0 = (term1 / term2).acos().to_degrees();
    let m = if after_transit {
        m0 + h0 / 360.0
    } else {
        m0 - h0 / 360.0
    };
    let theta = unwind_angle(sidereal_time + 360.985647 * m);
    let a = unwind_angle(interpolate_angles(
        right_ascension,
        previous_right_ascension,
        next_right_ascension,
        m,
    ));
    let delta = interpolate(declination, previous_declination, next_declination, m);
    let h = theta - lw - a;
    let altitude = altitude_of_celestial_body(latitude, delta, h);
    let term3 = altitude - angle;
    let term4 =
        360.0 * delta.to_radians().cos() * latitude.to_radians().cos() * h.to_radians().sin();
    let dm = term3 / term4;
    (m + dm) * 24.0
}

/// Three-point interpolation at fraction `n` of the middle interval.
pub fn interpolate(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = y2 - y1;
    let b = y3 - y2;
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

/// Three-point interpolation for angles that may wrap around 360°.
pub fn interpolate_angles(y2: f64, y1: f64, y3: f64, n: f64) -> f64 {
    let a = closest_angle(y2 - y1);
    let b = closest_angle(y3 - y2);
    let c = b - a;
    y2 + (n / 2.0) * (a + b + n * c)
}

//! Solar coordinates and the per-day solar timetable.

use salah_types::Coordinates;

use crate::astronomical::{
    apparent_obliquity_of_the_ecliptic, apparent_solar_longitude, approximate_transit,
    ascending_lunar_node_longitude, corrected_hour_angle, corrected_transit, mean_lunar_longitude,
    mean_obliquity_of_the_ecliptic, mean_sidereal_time, mean_solar_longitude,
    nutation_in_longitude, nutation_in_obliquity, unwind_angle,
};
use crate::julian::julian_century;

/// Apparent equatorial position of the sun for one Julian day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoordinates {
    /// Declination of the sun, degrees.
    pub declination: f64,
    /// Right ascension of the sun, degrees in [0, 360).
    pub right_ascension: f64,
    /// Apparent sidereal time at Greenwich, degrees.
    pub apparent_sidereal_time: f64,
}

impl SolarCoordinates {
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = apparent_solar_longitude(t, l0).to_radians();
        let theta0 = mean_sidereal_time(t);
        let dpsi = nutation_in_longitude(l0, lp, omega);
        let deps = nutation_in_obliquity(l0, lp, omega);
        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_apparent = apparent_obliquity_of_the_ecliptic(t, epsilon0).to_radians();

        let declination = (epsilon_apparent.sin() * lambda.sin()).asin().to_degrees();
        let right_ascension = unwind_angle(
            (epsilon_apparent.cos() * lambda.sin())
                .atan2(lambda.cos())
                .to_degrees(),
        );
        let apparent_sidereal_time =
            theta0 + (dpsi * 3600.0 * (epsilon0 + deps).to_radians().cos()) / 3600.0;

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}

/// Solar events for one date at one observer position.
///
/// Values are hours of day UT; NaN marks events the sun never reaches.
#[derive(Debug, Clone, Copy)]
pub struct SolarTime {
    observer: Coordinates,
    current: SolarCoordinates,
    previous: SolarCoordinates,
    next: SolarCoordinates,
    approximate_transit: f64,
    /// Solar transit (local true noon), hours.
    pub transit: f64,
    /// Sunrise at standard refraction altitude, hours.
    pub sunrise: f64,
    /// Sunset at standard refraction altitude, hours.
    pub sunset: f64,
}

impl SolarTime {
    /// Center-of-disc altitude for rise/set, accounting for refraction.
    const SOLAR_ALTITUDE: f64 = -50.0 / 60.0;

    pub fn new(julian_day: f64, observer: Coordinates) -> Self {
        let current = SolarCoordinates::new(julian_day);
        let previous = SolarCoordinates::new(julian_day - 1.0);
        let next = SolarCoordinates::new(julian_day + 1.0);

        let m0 = approximate_transit(
            observer.longitude(),
            current.apparent_sidereal_time,
            current.right_ascension,
        );
        let transit = corrected_transit(
            m0,
            observer.longitude(),
            current.apparent_sidereal_time,
            current.right_ascension,
            previous.right_ascension,
            next.right_ascension,
        );

        let mut time = Self {
            observer,
            current,
            previous,
            next,
            approximate_transit: m0,
            transit,
            sunrise: f64::NAN,
            sunset: f64::NAN,
        };
        time.sunrise = time.hour_angle(Self::SOLAR_ALTITUDE, false);
        time.sunset = time.hour_angle(Self::SOLAR_ALTITUDE, true);
        time
    }

    /// Hour of day at which the sun reaches `angle` degrees of altitude,
    /// before or after transit. NaN when unreachable.
    pub fn hour_angle(&self, angle: f64, after_transit: bool) -> f64 {
        corrected_hour_angle(
            self.approximate_transit,
            angle,
            self.observer.latitude(),
            self.observer.longitude(),
            after_transit,
            self.current.apparent_sidereal_time,
            self.current.right_ascension,
            self.previous.right_ascension,
            self.next.right_ascension,
            self.current.declination,
            self.previous.declination,
            self.next.declination,
        )
    }

    /// Afternoon shadow-length event used for Asr.
    ///
    /// `shadow_length` is the madhab multiplier (1 standard, 2 Hanafi).
    pub fn afternoon(&self, shadow_length: f64) -> f64 {
        let tangent = (self.observer.latitude() - self.current.declination).abs();
        let inverse = shadow_length + tangent.to_radians().tan();
        let angle = (1.0 / inverse).atan().to_degrees();
        self.hour_angle(angle, true)
    }
}

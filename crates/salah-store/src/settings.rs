//! Settings resolution: string-keyed user preferences into a canonical
//! parameter set.
//!
//! Every fallback default lives here and nowhere else. A malformed stored
//! value falls back to that field's default; it never fails the whole
//! resolution and never poisons another field.

use std::str::FromStr;

use salah_types::{
    CalculationMethod, CalculationParameters, Coordinates, HighLatitudeRule, Madhab,
    PrayerAdjustments,
};

/// String key-value read access to the host's settings store.
pub trait SettingsSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Preference keys, matching the host application's settings schema.
pub mod keys {
    pub const LATITUDE: &str = "latitude";
    pub const LONGITUDE: &str = "longitude";
    pub const FAJR_ANGLE: &str = "fajr_angle";
    pub const ISHA_ANGLE: &str = "isha_angle";
    pub const ISHA_INTERVAL: &str = "isha_interval";
    pub const CALCULATION_METHOD: &str = "calculation_method";
    pub const MADHAB: &str = "madhab";
    pub const HIGH_LATITUDE_RULE: &str = "high_latitude_rule";
    pub const FAJR_ADJUSTMENT: &str = "fajr_adjustment";
    pub const SUNRISE_ADJUSTMENT: &str = "sunrise_adjustment";
    pub const DHUHR_ADJUSTMENT: &str = "dhuhr_adjustment";
    pub const ASR_ADJUSTMENT: &str = "asr_adjustment";
    pub const MAGHRIB_ADJUSTMENT: &str = "maghrib_adjustment";
    pub const ISHA_ADJUSTMENT: &str = "isha_adjustment";
}

/// Documented defaults used when a setting is absent or unparseable.
mod defaults {
    use salah_types::CalculationMethod;

    pub const FAJR_ANGLE: f64 = 18.0;
    pub const ISHA_ANGLE: f64 = 17.0;
    pub const ISHA_INTERVAL: i64 = 0;
    pub const METHOD: CalculationMethod = CalculationMethod::Ireland;
    pub const LATITUDE: f64 = 0.0;
    pub const LONGITUDE: f64 = 0.0;
}

/// Output of settings resolution: where to calculate and how.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSettings {
    pub coordinates: Coordinates,
    pub parameters: CalculationParameters,
}

fn parsed_or<T: FromStr>(source: &impl SettingsSource, key: &str, default: T) -> T {
    source
        .get(key)
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Resolves the current user settings into calculation inputs.
///
/// Pure mapping over the settings source: no I/O beyond the key reads, no
/// randomness, and it cannot fail.
pub fn resolve_settings(source: &impl SettingsSource) -> ResolvedSettings {
    let latitude = parsed_or(source, keys::LATITUDE, defaults::LATITUDE);
    let longitude = parsed_or(source, keys::LONGITUDE, defaults::LONGITUDE);
    // Out-of-range stored coordinates fall back like any other bad field.
    let coordinates = Coordinates::new(latitude, longitude)
        .unwrap_or_else(|_| Coordinates::new(defaults::LATITUDE, defaults::LONGITUDE).unwrap());

    let method = parsed_or(source, keys::CALCULATION_METHOD, defaults::METHOD);
    let fajr_angle = parsed_or(source, keys::FAJR_ANGLE, defaults::FAJR_ANGLE);
    let isha_angle = parsed_or(source, keys::ISHA_ANGLE, defaults::ISHA_ANGLE);
    let isha_interval = parsed_or(source, keys::ISHA_INTERVAL, defaults::ISHA_INTERVAL);

    let parameters = CalculationParameters::new(fajr_angle, isha_angle, method)
        .with_isha_interval(isha_interval)
        .with_madhab(parsed_or(source, keys::MADHAB, Madhab::default()))
        .with_high_latitude_rule(parsed_or(
            source,
            keys::HIGH_LATITUDE_RULE,
            HighLatitudeRule::default(),
        ))
        .with_adjustments(PrayerAdjustments::new(
            parsed_or(source, keys::FAJR_ADJUSTMENT, 0),
            parsed_or(source, keys::SUNRISE_ADJUSTMENT, 0),
            parsed_or(source, keys::DHUHR_ADJUSTMENT, 0),
            parsed_or(source, keys::ASR_ADJUSTMENT, 0),
            parsed_or(source, keys::MAGHRIB_ADJUSTMENT, 0),
            parsed_or(source, keys::ISHA_ADJUSTMENT, 0),
        ));

    ResolvedSettings {
        coordinates,
        parameters,
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SalahError;

/// Named prayer-time calculation conventions.
///
/// Each method carries preset twilight angles (and, for the interval-based
/// conventions, a fixed Isha offset after Maghrib). See
/// [`CalculationParameters::for_method`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculationMethod {
    /// Muslim World League. 18°/17°.
    MuslimWorldLeague,
    /// Egyptian General Authority of Survey. 19.5°/17.5°.
    Egyptian,
    /// University of Islamic Sciences, Karachi. 18°/18°.
    Karachi,
    /// Umm al-Qura University, Makkah. 18.5°, Isha 90 min after Maghrib.
    Makkah,
    /// UAE. 18.2°/18.2°.
    Dubai,
    /// Moonsighting Committee. 18°/18° with seasonal twilight adjustment.
    Moonsighting,
    /// Islamic Society of North America. 15°/15°.
    Isna,
    /// Kuwait. 18°/17.5°.
    Kuwait,
    /// Qatar. 18°, Isha 90 min after Maghrib.
    Qatar,
    /// Singapore. 20°/18°.
    Singapore,
    /// Union des Organisations Islamiques de France. 12°/12°.
    France,
    /// Diyanet İşleri Başkanlığı, Turkey. 18°/17°.
    Turkey,
    /// Spiritual Administration of Muslims of Russia. 16°/15°.
    Russia,
    /// Islamic Foundation of Ireland. 16°/14°, Hanafi preset.
    Ireland,
    /// Institute of Geophysics, University of Tehran. 17.7°/14°.
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum. 16°/14°.
    Shia,
    /// Gulf region. 19.5°, Isha 90 min after Maghrib.
    Gulf,
    /// Fully manual angles.
    Other,
}

impl FromStr for CalculationMethod {
    type Err = SalahError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MWL" | "MUSLIM_WORLD_LEAGUE" => Ok(Self::MuslimWorldLeague),
            "EGYPTIAN" => Ok(Self::Egyptian),
            "KARACHI" => Ok(Self::Karachi),
            "MAKKAH" => Ok(Self::Makkah),
            "DUBAI" => Ok(Self::Dubai),
            "MOONSIGHTING" => Ok(Self::Moonsighting),
            "ISNA" => Ok(Self::Isna),
            "KUWAIT" => Ok(Self::Kuwait),
            "QATAR" => Ok(Self::Qatar),
            "SINGAPORE" => Ok(Self::Singapore),
            "FRANCE" => Ok(Self::France),
            "TURKEY" => Ok(Self::Turkey),
            "RUSSIA" => Ok(Self::Russia),
            "IRELAND" => Ok(Self::Ireland),
            "TEHRAN" => Ok(Self::Tehran),
            "SHIA" => Ok(Self::Shia),
            "GULF" => Ok(Self::Gulf),
            "OTHER" => Ok(Self::Other),
            other => Err(SalahError::invalid_config(format!(
                "unknown calculation method: {other}"
            ))),
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MuslimWorldLeague => "Muslim World League",
            Self::Egyptian => "Egyptian General Authority",
            Self::Karachi => "University of Islamic Sciences, Karachi",
            Self::Makkah => "Umm al-Qura University, Makkah",
            Self::Dubai => "Dubai",
            Self::Moonsighting => "Moonsighting Committee",
            Self::Isna => "Islamic Society of North America",
            Self::Kuwait => "Kuwait",
            Self::Qatar => "Qatar",
            Self::Singapore => "Singapore",
            Self::France => "Union des Organisations Islamiques de France",
            Self::Turkey => "Diyanet, Turkey",
            Self::Russia => "Spiritual Administration of Muslims of Russia",
            Self::Ireland => "Islamic Foundation of Ireland",
            Self::Tehran => "Institute of Geophysics, Tehran",
            Self::Shia => "Shia Ithna-Ashari",
            Self::Gulf => "Gulf Region",
            Self::Other => "Other",
        };
        write!(f, "{s}")
    }
}

/// School of jurisprudence. Only affects the Asr shadow-length multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Madhab {
    /// Single shadow length (Shafi, Maliki, Hanbali).
    #[default]
    Standard,
    /// Double shadow length.
    Hanafi,
}

impl Madhab {
    /// Asr shadow-length multiplier.
    pub fn shadow_length(&self) -> f64 {
        match self {
            Madhab::Standard => 1.0,
            Madhab::Hanafi => 2.0,
        }
    }
}

impl FromStr for Madhab {
    type Err = SalahError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SHAFI" | "STANDARD" => Ok(Self::Standard),
            "HANAFI" => Ok(Self::Hanafi),
            other => Err(SalahError::invalid_config(format!(
                "unknown madhab: {other}"
            ))),
        }
    }
}

/// Policy for bounding Fajr and Isha when the twilight angle is never
/// reached at extreme latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HighLatitudeRule {
    /// Fajr no earlier, Isha no later, than half the night.
    MiddleOfTheNight,
    /// Fajr within the last seventh of the night, Isha within the first.
    SeventhOfTheNight,
    /// Night fraction proportional to the configured twilight angle.
    #[default]
    TwilightAngle,
}

impl FromStr for HighLatitudeRule {
    type Err = SalahError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MIDDLE_OF_THE_NIGHT" => Ok(Self::MiddleOfTheNight),
            "SEVENTH_OF_THE_NIGHT" => Ok(Self::SeventhOfTheNight),
            "TWILIGHT_ANGLE" => Ok(Self::TwilightAngle),
            other => Err(SalahError::invalid_config(format!(
                "unknown high latitude rule: {other}"
            ))),
        }
    }
}

/// Signed minute offsets applied to each prayer after base computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrayerAdjustments {
    pub fajr: i64,
    pub sunrise: i64,
    pub dhuhr: i64,
    pub asr: i64,
    pub maghrib: i64,
    pub isha: i64,
}

impl PrayerAdjustments {
    pub fn new(fajr: i64, sunrise: i64, dhuhr: i64, asr: i64, maghrib: i64, isha: i64) -> Self {
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        }
    }
}

/// Fractions of the night used to bound Fajr and Isha at high latitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NightPortions {
    pub fajr: f64,
    pub isha: f64,
}

/// Canonical parameter set consumed by the prayer-time calculator.
///
/// Built once per computation request and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationParameters {
    pub fajr_angle: f64,
    pub isha_angle: f64,
    /// Minutes after Maghrib for Isha; when > 0 this replaces the angle.
    pub isha_interval_minutes: i64,
    pub method: CalculationMethod,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
    pub adjustments: PrayerAdjustments,
}

impl CalculationParameters {
    /// Manual parameters with explicit angles.
    pub fn new(fajr_angle: f64, isha_angle: f64, method: CalculationMethod) -> Self {
        Self {
            fajr_angle,
            isha_angle,
            isha_interval_minutes: 0,
            method,
            madhab: Madhab::default(),
            high_latitude_rule: HighLatitudeRule::default(),
            adjustments: PrayerAdjustments::default(),
        }
    }

    /// Preset parameters for a named convention.
    pub fn for_method(method: CalculationMethod) -> Self {
        use CalculationMethod::*;
        match method {
            MuslimWorldLeague => Self::new(18.0, 17.0, method),
            Egyptian => Self::new(19.5, 17.5, method),
            Karachi => Self::new(18.0, 18.0, method),
            Makkah => Self::new(18.5, 0.0, method).with_isha_interval(90),
            Dubai => Self::new(18.2, 18.2, method),
            Moonsighting => Self::new(18.0, 18.0, method),
            Isna => Self::new(15.0, 15.0, method),
            Kuwait => Self::new(18.0, 17.5, method),
            Qatar => Self::new(18.0, 0.0, method).with_isha_interval(90),
            Singapore => Self::new(20.0, 18.0, method),
            France => Self::new(12.0, 12.0, method),
            Turkey => Self::new(18.0, 17.0, method),
            Russia => Self::new(16.0, 15.0, method),
            Ireland => Self::new(16.0, 14.0, method).with_madhab(Madhab::Hanafi),
            Tehran => Self::new(17.7, 14.0, method)
                .with_adjustments(PrayerAdjustments::new(0, 0, 0, 0, 4, 0)),
            Shia => Self::new(16.0, 14.0, method)
                .with_adjustments(PrayerAdjustments::new(0, 0, 0, 0, 4, 0)),
            Gulf => Self::new(19.5, 0.0, method).with_isha_interval(90),
            Other => Self::new(0.0, 0.0, method),
        }
    }

    pub fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub fn with_isha_interval(mut self, minutes: i64) -> Self {
        self.isha_interval_minutes = minutes;
        self
    }

    pub fn with_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.adjustments = adjustments;
        self
    }

    /// Night fractions bounding Fajr and Isha per the high-latitude rule.
    pub fn night_portions(&self) -> NightPortions {
        match self.high_latitude_rule {
            HighLatitudeRule::MiddleOfTheNight => NightPortions {
                fajr: 1.0 / 2.0,
                isha: 1.0 / 2.0,
            },
            HighLatitudeRule::SeventhOfTheNight => NightPortions {
                fajr: 1.0 / 7.0,
                isha: 1.0 / 7.0,
            },
            HighLatitudeRule::TwilightAngle => NightPortions {
                fajr: self.fajr_angle / 60.0,
                isha: self.isha_angle / 60.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_presets() {
        let mwl = CalculationParameters::for_method(CalculationMethod::MuslimWorldLeague);
        assert_eq!(mwl.fajr_angle, 18.0);
        assert_eq!(mwl.isha_angle, 17.0);
        assert_eq!(mwl.isha_interval_minutes, 0);

        let makkah = CalculationParameters::for_method(CalculationMethod::Makkah);
        assert_eq!(makkah.isha_interval_minutes, 90);

        let ireland = CalculationParameters::for_method(CalculationMethod::Ireland);
        assert_eq!(ireland.madhab, Madhab::Hanafi);

        let tehran = CalculationParameters::for_method(CalculationMethod::Tehran);
        assert_eq!(tehran.adjustments.maghrib, 4);
    }

    #[test]
    fn test_method_parsing_case_insensitive() {
        assert_eq!(
            "ireland".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::Ireland
        );
        assert_eq!(
            "MWL".parse::<CalculationMethod>().unwrap(),
            CalculationMethod::MuslimWorldLeague
        );
        assert!("NOT_A_METHOD".parse::<CalculationMethod>().is_err());
    }

    #[test]
    fn test_night_portions() {
        let mut params = CalculationParameters::new(18.0, 15.0, CalculationMethod::Other);
        params.high_latitude_rule = HighLatitudeRule::TwilightAngle;
        let portions = params.night_portions();
        assert!((portions.fajr - 0.3).abs() < 1e-12);
        assert!((portions.isha - 0.25).abs() < 1e-12);

        params.high_latitude_rule = HighLatitudeRule::SeventhOfTheNight;
        assert!((params.night_portions().fajr - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_shadow_length() {
        assert_eq!(Madhab::Standard.shadow_length(), 1.0);
        assert_eq!(Madhab::Hanafi.shadow_length(), 2.0);
    }
}

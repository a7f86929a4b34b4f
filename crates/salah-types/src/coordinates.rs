use crate::error::SalahError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated geographic position.
///
/// Construction rejects out-of-range values eagerly so no computation ever
/// sees an invalid latitude or longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates coordinates, rejecting latitude outside [-90, 90] and
    /// longitude outside [-180, 180].
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` naming the offending axis.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SalahError> {
        if !(-90.0..=90.0).contains(&latitude) || latitude.is_nan() {
            return Err(SalahError::InvalidCoordinate {
                axis: "latitude",
                value: latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) || longitude.is_nan() {
            return Err(SalahError::InvalidCoordinate {
                axis: "longitude",
                value: longitude,
                min: -180.0,
                max: 180.0,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°, {:.4}°", self.latitude, self.longitude)
    }
}

use thiserror::Error;

/// Errors from salah value construction and configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SalahError {
    /// Latitude or longitude outside its valid range.
    #[error("{axis} {value} is out of range ({min} to {max})")]
    InvalidCoordinate {
        axis: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl SalahError {
    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

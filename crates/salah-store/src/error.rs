use chrono::NaiveDate;
use thiserror::Error;

/// Failures surfaced across the repository boundary.
///
/// Persistence problems are always carried as values; no panic or unchecked
/// failure crosses this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The persistence collaborator failed.
    #[error("storage unavailable: {reason}")]
    Unavailable { reason: String },

    /// A row that should exist after a successful write is missing.
    #[error("no row persisted for {date}")]
    MissingRow { date: NaiveDate },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

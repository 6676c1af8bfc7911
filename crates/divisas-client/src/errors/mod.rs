//! Error types for the divisas client.
//!
//! This module provides:
//! - [`RateError`]: The error enum for every fetch and query failure
//! - [`ErrorKind`]: Coarse classification of those failures

mod kind;

pub use kind::ErrorKind;

use thiserror::Error;

/// Errors that can occur while fetching the snapshot or answering a query.
#[derive(Error, Debug)]
pub enum RateError {
    /// The snapshot server answered with a non-success status.
    #[error("HTTP error: status {status}")]
    Status {
        /// The HTTP status code returned
        status: u16,
    },

    /// The request failed before a response was received, or the body
    /// could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body is not a JSON array of `{codigo, valor_actual}` records.
    #[error("Invalid snapshot format: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record's value is not a decimal number.
    #[error("Invalid value '{value}' for currency '{code}'")]
    InvalidValue {
        /// Currency code of the offending record
        code: String,
        /// The raw value as found in the snapshot
        value: String,
    },

    #[error("Base currency '{0}' was not found in the data source")]
    BaseCurrencyNotFound(String),

    #[error("Target currency '{0}' was not found in the data source")]
    TargetCurrencyNotFound(String),

    /// The target currency is valued at zero, so no rate exists.
    #[error("Exchange rate {base}-{target} is undefined: '{target}' has a zero value")]
    InvalidRate { base: String, target: String },

    /// The cross-rate is too large to be represented.
    #[error("Exchange rate {base}-{target} is out of range")]
    RateOverflow { base: String, target: String },
}

impl RateError {
    /// Returns the classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use divisas_client::errors::{ErrorKind, RateError};
    ///
    /// let error = RateError::Status { status: 503 };
    /// assert_eq!(error.kind(), ErrorKind::Transport);
    ///
    /// let error = RateError::TargetCurrencyNotFound("XYZ".to_string());
    /// assert_eq!(error.kind(), ErrorKind::Lookup);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Status { .. } | Self::Network(_) => ErrorKind::Transport,
            Self::Parse(_) | Self::InvalidValue { .. } => ErrorKind::Parse,
            Self::BaseCurrencyNotFound(_) | Self::TargetCurrencyNotFound(_) => ErrorKind::Lookup,
            Self::InvalidRate { .. } | Self::RateOverflow { .. } => ErrorKind::Computation,
        }
    }
}

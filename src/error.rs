use thiserror::Error;

use crate::config::FORECAST_API;

/// Everything that can go wrong between pressing the button and seeing data.
/// The Display strings double as the alert text shown to the user.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error(
        "'{input}' is not a valid horizon: enter a whole number of days between {min} and {max}",
        min = FORECAST_API.horizon.min_days,
        max = FORECAST_API.horizon.max_days
    )]
    InvalidHorizon { input: String },

    #[error("forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forecast service answered with HTTP status {status}")]
    BadStatus { status: u16 },

    #[error("forecast response was not a JSON array of points: {reason}")]
    MalformedBody { reason: String },

    #[error("malformed forecast point at index {index}: field '{field}' is not numeric ({reason})")]
    MalformedPoint {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

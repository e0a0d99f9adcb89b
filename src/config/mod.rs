//! Configuration module for the forecast-scope application.

mod api;

// Can't be private because we don't re-export it
pub mod plot;

pub use api::{FORECAST_API, ForecastApiConfig};
pub use plot::PLOT_CONFIG;

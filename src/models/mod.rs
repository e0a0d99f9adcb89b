mod forecast;

pub use forecast::{ForecastPoint, ForecastSeries, parse_forecast_body, parse_horizon};

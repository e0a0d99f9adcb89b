// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::HttpForecastSource;
pub use error::ForecastError;
pub use models::{ForecastPoint, ForecastSeries};

use crate::config::FORECAST_API;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Forecast service endpoint to query instead of the default local one
    #[arg(long, default_value_t = String::from(FORECAST_API.endpoint))]
    pub endpoint: String,
}

/// Main application entry point - creates the GUI app.
/// This is the public API for the binary to call.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

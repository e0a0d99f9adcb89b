use crate::config::FORECAST_API;
use crate::error::ForecastError;
use crate::models::{ForecastPoint, parse_forecast_body};

#[cfg(not(target_arch = "wasm32"))]
use async_trait::async_trait;

/// Abstract interface for retrieving a forecast. The app talks to the HTTP
/// service through this seam so the fetch plumbing can be exercised against
/// a canned source in tests.
#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Fetch the forecast for the requested number of days.
    async fn fetch_forecast(&self, horizon_days: u32) -> Result<Vec<ForecastPoint>, ForecastError>;
}

/// The real source: one unauthenticated GET against the forecast service.
pub struct HttpForecastSource {
    endpoint: String,
}

impl HttpForecastSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub(crate) fn predict_url(&self, horizon_days: u32) -> String {
        format!(
            "{}{}?days={}",
            self.endpoint.trim_end_matches('/'),
            FORECAST_API.predict_path,
            horizon_days
        )
    }

    fn build_client() -> Result<reqwest::Client, ForecastError> {
        let builder = reqwest::Client::builder();
        // The browser's fetch has no per-request timeout knob
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_millis(
            FORECAST_API.client.timeout_ms,
        ));
        Ok(builder.build()?)
    }

    pub async fn fetch(&self, horizon_days: u32) -> Result<Vec<ForecastPoint>, ForecastError> {
        let url = self.predict_url(horizon_days);
        log::info!("requesting forecast: {url}");

        let client = Self::build_client()?;
        let response = client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_forecast_body(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait]
impl ForecastSource for HttpForecastSource {
    async fn fetch_forecast(&self, horizon_days: u32) -> Result<Vec<ForecastPoint>, ForecastError> {
        self.fetch(horizon_days).await
    }
}

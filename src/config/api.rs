/// Accepted range for the user-entered horizon. Requests outside this range
/// are rejected before anything is transmitted.
pub struct HorizonBounds {
    pub min_days: u32,
    pub max_days: u32,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
}

pub struct ForecastApiConfig {
    /// Default base URL of the forecast service (overridable via --endpoint).
    pub endpoint: &'static str,
    pub predict_path: &'static str,
    pub window_title: &'static str,
    pub client: ClientDefaults,
    pub horizon: HorizonBounds,
}

pub const FORECAST_API: ForecastApiConfig = ForecastApiConfig {
    endpoint: "http://127.0.0.1:5000",
    predict_path: "/predict",
    window_title: "Forecast Scope - Potato Price Outlook",
    client: ClientDefaults { timeout_ms: 10_000 },
    horizon: HorizonBounds {
        min_days: 1,
        max_days: 365,
    },
};

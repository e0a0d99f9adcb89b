mod fetch;
mod source;

pub use source::HttpForecastSource;

pub(crate) use fetch::spawn_fetch;

#[cfg(not(target_arch = "wasm32"))]
pub use source::ForecastSource;

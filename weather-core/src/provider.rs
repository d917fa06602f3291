use crate::{Config, WeatherReading, error::WidgetError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod goweather;

pub use goweather::GoWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch the raw reading for `city`. Sentinel readings are returned as-is;
    /// deciding whether a reading is usable is up to the caller.
    async fn get_weather(&self, city: &str) -> Result<WeatherReading, WidgetError>;
}

/// Construct the provider for the configured endpoint.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WidgetError> {
    let provider = GoWeatherProvider::new(&config.endpoint)?;
    Ok(Box::new(provider))
}

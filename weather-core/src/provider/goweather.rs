use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, instrument};

use crate::{error::WidgetError, model::WeatherReading};

use super::WeatherProvider;

/// Client for the goweather API: `GET <endpoint>/<city>`.
#[derive(Debug, Clone)]
pub struct GoWeatherProvider {
    endpoint: Url,
    http: Client,
}

impl GoWeatherProvider {
    pub fn new(endpoint: &str) -> Result<Self, WidgetError> {
        let parsed =
            Url::parse(endpoint).map_err(|_| WidgetError::InvalidEndpoint(endpoint.to_string()))?;

        if parsed.cannot_be_a_base() {
            return Err(WidgetError::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self { endpoint: parsed, http: Client::new() })
    }

    /// URL for `city`, which is pushed as a single percent-encoded segment.
    pub fn city_url(&self, city: &str) -> Url {
        let mut url = self.endpoint.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(city);
        }
        url
    }
}

#[async_trait]
impl WeatherProvider for GoWeatherProvider {
    #[instrument(skip(self))]
    async fn get_weather(&self, city: &str) -> Result<WeatherReading, WidgetError> {
        let url = self.city_url(city);
        debug!(%url, "requesting weather");

        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WidgetError::Fetch { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

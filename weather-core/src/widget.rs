use chrono::Local;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::{
    Config, WeatherReading, error::WidgetError, provider::WeatherProvider, view::WidgetView,
};

/// City searched by [`WeatherWidget::initial_load`] when nothing is configured.
pub const DEFAULT_CITY: &str = "Bansdroni";

/// Result of one [`WeatherWidget::search`].
#[derive(Debug)]
pub enum SearchOutcome {
    /// Blank input: no request was made and the view is unchanged.
    Skipped,
    Displayed(WeatherReading),
    /// Already logged and shown as the error banner.
    Failed(WidgetError),
}

impl SearchOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, SearchOutcome::Failed(_))
    }
}

/// Fetches readings and projects them into a [`WidgetView`].
///
/// Searches take `&self` and may overlap. They share nothing but the view,
/// so whichever search resolves last decides what is shown.
#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    default_city: String,
    view: watch::Sender<WidgetView>,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>, default_city: impl Into<String>) -> Self {
        let (view, _) = watch::channel(WidgetView::default());
        Self { provider, default_city: default_city.into(), view }
    }

    pub fn from_config(config: &Config) -> Result<Self, WidgetError> {
        let provider = crate::provider::provider_from_config(config)?;
        Ok(Self::new(provider, config.default_city.clone()))
    }

    pub fn default_city(&self) -> &str {
        &self.default_city
    }

    /// Receiver notified on every view change.
    pub fn subscribe(&self) -> watch::Receiver<WidgetView> {
        self.view.subscribe()
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> WidgetView {
        self.view.borrow().clone()
    }

    /// Search for the configured default city.
    pub async fn initial_load(&self) -> SearchOutcome {
        self.search(&self.default_city).await
    }

    pub async fn search(&self, city: &str) -> SearchOutcome {
        let city = city.trim();
        if city.is_empty() {
            debug!("ignoring blank city");
            return SearchOutcome::Skipped;
        }

        self.view.send_modify(WidgetView::begin_loading);

        let outcome = match self.fetch_usable(city).await {
            Ok(reading) => {
                info!(city, temperature = %reading.temperature, "weather displayed");
                let today = Local::now().date_naive();
                self.view.send_modify(|view| view.show_reading(city, today, &reading));
                SearchOutcome::Displayed(reading)
            }
            Err(err) => {
                error!(city, error = %err, "fetch error");
                self.view.send_modify(WidgetView::show_error);
                SearchOutcome::Failed(err)
            }
        };

        self.view.send_modify(WidgetView::finish_loading);
        outcome
    }

    async fn fetch_usable(&self, city: &str) -> Result<WeatherReading, WidgetError> {
        let reading = self.provider.get_weather(city).await?;
        if !reading.is_usable() {
            return Err(WidgetError::DataUnavailable { city: city.to_string() });
        }
        Ok(reading)
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// Shown in place of the next-day temperature when the API sent none.
pub const MISSING_FORECAST: &str = "N/A";

/// One parsed response for a queried city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReading {
    /// Temperature text including the unit, e.g. "+19 °C".
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: String,
    /// Free-text condition, matched against icon keys.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Upcoming days in order; index 0 is tomorrow.
    #[serde(deserialize_with = "null_as_default")]
    pub forecast: Vec<ForecastDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastDay {
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: String,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherReading {
    /// The API answers unknown cities with a zero temperature instead of an
    /// error status. The degree sign is not reliably encoded, so the sentinel
    /// is matched on the leading number rather than the raw text.
    pub fn is_usable(&self) -> bool {
        let temperature = self.temperature.trim();
        if temperature.is_empty() {
            return false;
        }

        match parse_leading_number(temperature) {
            Some(value) => value != 0.0,
            None => true,
        }
    }

    /// Temperature of the first forecast entry, or [`MISSING_FORECAST`].
    pub fn next_day_temperature(&self) -> &str {
        self.forecast
            .first()
            .map(|day| day.temperature.trim())
            .filter(|t| !t.is_empty())
            .unwrap_or(MISSING_FORECAST)
    }
}

/// Parse the optional sign and decimal digits at the start of `text`.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let end = text
        .char_indices()
        .find(|&(i, c)| {
            let sign = i == 0 && (c == '+' || c == '-');
            !(sign || c.is_ascii_digit() || c == '.')
        })
        .map_or(text.len(), |(i, _)| i);

    text[..end].parse::<f64>().ok()
}

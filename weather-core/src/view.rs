//! Display state of the widget.
//!
//! Front ends render a [`WidgetView`]; they never talk to the provider.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    icon::{Condition, resolve_icon},
    model::WeatherReading,
};

/// The loader, the error banner, the result card and the card's fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WidgetView {
    pub loader_visible: bool,
    pub error_visible: bool,
    pub card_visible: bool,

    pub city_name: String,
    pub date: String,
    #[serde(serialize_with = "serialize_condition")]
    pub icon: Condition,
    pub temperature: String,
    pub description: String,
    pub wind: String,
    pub forecast_temperature: String,
}

impl WidgetView {
    /// Show the loader and hide everything else.
    pub fn begin_loading(&mut self) {
        self.loader_visible = true;
        self.error_visible = false;
        self.card_visible = false;
    }

    /// Fill the card from `reading` and reveal it.
    pub fn show_reading(&mut self, city: &str, date: NaiveDate, reading: &WeatherReading) {
        self.city_name = city.to_string();
        self.date = format_display_date(date);
        self.icon = resolve_icon(&reading.description);
        self.temperature = reading.temperature.clone();
        self.description = reading.description.clone();
        self.wind = reading.wind.clone();
        self.forecast_temperature = reading.next_day_temperature().to_string();
        self.card_visible = true;
    }

    /// Reveal the error banner. Card fields keep whatever they held.
    pub fn show_error(&mut self) {
        self.error_visible = true;
    }

    pub fn finish_loading(&mut self) {
        self.loader_visible = false;
    }
}

/// Long US-English date, e.g. "Wednesday, October 14, 2026".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn serialize_condition<S: serde::Serializer>(icon: &Condition, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(icon.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ForecastDay;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
    }

    fn sunny() -> WeatherReading {
        WeatherReading {
            temperature: "+24 °C".into(),
            wind: "11 km/h".into(),
            description: "Sunny".into(),
            forecast: vec![ForecastDay { temperature: "+26 °C".into(), ..Default::default() }],
        }
    }

    #[test]
    fn formats_dates_like_en_us_long_form() {
        assert_eq!(format_display_date(date()), "Wednesday, October 14, 2026");
        let jan = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid date");
        assert_eq!(format_display_date(jan), "Friday, January 5, 2024");
    }

    #[test]
    fn loading_hides_banner_and_card() {
        let mut view = WidgetView { error_visible: true, card_visible: true, ..Default::default() };
        view.begin_loading();

        assert!(view.loader_visible);
        assert!(!view.error_visible);
        assert!(!view.card_visible);
    }

    #[test]
    fn reading_fills_every_field() {
        let mut view = WidgetView::default();
        view.begin_loading();
        view.show_reading("Bansdroni", date(), &sunny());
        view.finish_loading();

        assert_eq!(view.city_name, "Bansdroni");
        assert_eq!(view.date, "Wednesday, October 14, 2026");
        assert_eq!(view.icon, Condition::Sunny);
        assert_eq!(view.temperature, "+24 °C");
        assert_eq!(view.description, "Sunny");
        assert_eq!(view.wind, "11 km/h");
        assert_eq!(view.forecast_temperature, "+26 °C");
        assert!(view.card_visible);
        assert!(!view.loader_visible);
        assert!(!view.error_visible);
    }

    #[test]
    fn error_keeps_previous_fields_but_card_stays_hidden() {
        let mut view = WidgetView::default();
        view.show_reading("Bansdroni", date(), &sunny());

        view.begin_loading();
        view.show_error();
        view.finish_loading();

        assert!(view.error_visible);
        assert!(!view.card_visible);
        assert_eq!(view.city_name, "Bansdroni");
    }

    #[test]
    fn serializes_icon_by_key() {
        let mut view = WidgetView::default();
        view.show_reading("Oslo", date(), &sunny());
        let json = serde_json::to_value(&view).expect("serializable");
        assert_eq!(json["icon"], "Sunny");
        assert_eq!(json["card_visible"], true);
    }
}

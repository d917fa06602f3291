use weather_widget_core::WidgetView;

/// Shown for every failure; network errors and unknown cities look the same.
pub const ERROR_BANNER: &str = "Could not fetch weather data. Please check the city name and try again.";

pub fn loading(city: &str) -> String {
    format!("Loading weather for {}...", city.trim())
}

/// Banner and card, if visible. The loader is drawn separately by
/// [`loading`] while a search is in flight.
pub fn render_view(view: &WidgetView) -> String {
    let mut out = String::new();

    if view.error_visible {
        out.push_str(ERROR_BANNER);
        out.push('\n');
    }
    if view.card_visible {
        out.push_str(&render_card(view));
    }

    out
}

fn render_card(view: &WidgetView) -> String {
    format!(
        "{city}\n{date}\n\n  {glyph}  {temperature}  {description}\n\n  Wind:     {wind}\n  Tomorrow: {forecast}\n",
        city = view.city_name,
        date = view.date,
        glyph = view.icon.glyph(),
        temperature = view.temperature,
        description = view.description,
        wind = view.wind,
        forecast = view.forecast_temperature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_widget_core::Condition;

    fn card() -> WidgetView {
        WidgetView {
            card_visible: true,
            city_name: "Bansdroni".into(),
            date: "Wednesday, October 14, 2026".into(),
            icon: Condition::Sunny,
            temperature: "+31 °C".into(),
            description: "Sunny".into(),
            wind: "9 km/h".into(),
            forecast_temperature: "N/A".into(),
            ..Default::default()
        }
    }

    #[test]
    fn card_lists_every_field() {
        let text = render_view(&card());
        for part in ["Bansdroni", "Wednesday, October 14, 2026", "☀", "+31 °C", "Sunny", "9 km/h", "N/A"] {
            assert!(text.contains(part), "missing {part} in {text}");
        }
        assert!(!text.contains(ERROR_BANNER));
    }

    #[test]
    fn hidden_card_is_not_rendered() {
        let view = WidgetView { card_visible: false, error_visible: true, ..card() };
        let text = render_view(&view);
        assert_eq!(text, format!("{ERROR_BANNER}\n"));
    }

    #[test]
    fn empty_view_renders_nothing() {
        assert_eq!(render_view(&WidgetView::default()), "");
    }

    #[test]
    fn loading_line_names_city() {
        assert_eq!(loading(" Oslo "), "Loading weather for Oslo...");
    }
}

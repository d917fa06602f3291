use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use weather_widget_core::{
    Config, GoWeatherProvider, SearchOutcome, WeatherWidget, WidgetView, resolve_icon,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Weather widget for the terminal")]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Weather endpoint the city is appended to, overriding the config file.
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// City searched on startup, overriding the config file.
    #[arg(long, global = true)]
    pub city: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the default city, then prompt for more (the default).
    Run,

    /// Show weather for a single city.
    Show {
        /// City name.
        city: String,

        /// Print the raw reading as JSON instead of the card.
        #[arg(long)]
        json: bool,
    },

    /// Print the icon picked for a weather description.
    Icon {
        /// Description text, e.g. "Light rain showers".
        description: String,

        /// Print the SVG markup instead of the condition name.
        #[arg(long)]
        svg: bool,
    },

    /// Interactively set the endpoint and default city.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?.with_overrides(self.endpoint, self.city);

        match self.command.unwrap_or(Command::Run) {
            Command::Run => run_interactive(&config).await,
            Command::Show { city, json } => show(&config, &city, json).await,
            Command::Icon { description, svg } => {
                println!("{}", icon_report(&description, svg));
                Ok(())
            }
            Command::Configure => tokio::task::spawn_blocking(move || configure(config))
                .await
                .context("Configure task failed")?,
        }
    }
}

async fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let widget = WeatherWidget::from_config(config)?;

    search_and_render(&widget, widget.default_city()).await;

    loop {
        let answer = tokio::task::spawn_blocking(|| {
            Text::new("City:").with_help_message("Enter to search, Esc to quit").prompt()
        })
        .await
        .context("Prompt task failed")?;

        match answer {
            Ok(city) => {
                search_and_render(&widget, &city).await;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        }
    }

    Ok(())
}

async fn show(config: &Config, city: &str, json: bool) -> anyhow::Result<()> {
    let widget = WeatherWidget::from_config(config)?;

    let outcome = search_and_render_with(&widget, city, false).await;
    match show_report(&outcome, &widget.view(), city, json) {
        Ok(text) => {
            print!("{text}");
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", render::ERROR_BANNER);
            Err(err)
        }
    }
}

/// Output of `show` for a finished search. A failed search is an error so
/// the process exits non-zero.
fn show_report(
    outcome: &SearchOutcome,
    view: &WidgetView,
    city: &str,
    json: bool,
) -> anyhow::Result<String> {
    match outcome {
        SearchOutcome::Skipped => Ok(String::new()),
        SearchOutcome::Displayed(reading) if json => {
            Ok(format!("{}\n", serde_json::to_string_pretty(reading)?))
        }
        SearchOutcome::Displayed(_) => Ok(render::render_view(view)),
        SearchOutcome::Failed(_) => Err(anyhow!("No weather available for '{}'", city.trim())),
    }
}

fn icon_report(description: &str, svg: bool) -> String {
    let condition = resolve_icon(description);
    if svg { condition.markup().to_string() } else { format!("{} {condition}", condition.glyph()) }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    let endpoint = Text::new("Weather endpoint:")
        .with_default(&config.endpoint)
        .prompt()
        .context("Failed to read endpoint")?;

    GoWeatherProvider::new(endpoint.trim())?;

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .prompt()
        .context("Failed to read default city")?;

    config = config.with_overrides(Some(endpoint.trim().to_string()), Some(city));

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn search_and_render(widget: &WeatherWidget, city: &str) -> SearchOutcome {
    search_and_render_with(widget, city, true).await
}

/// Run one search, printing the loader line once the widget enters the
/// loading state and, if `print_view`, the final banner or card.
async fn search_and_render_with(
    widget: &WeatherWidget,
    city: &str,
    print_view: bool,
) -> SearchOutcome {
    let mut rx = widget.subscribe();
    let search = widget.search(city);
    tokio::pin!(search);

    let mut announced = false;
    let outcome = loop {
        tokio::select! {
            outcome = &mut search => break outcome,
            Ok(()) = rx.changed(), if !announced => {
                if rx.borrow_and_update().loader_visible {
                    eprintln!("{}", render::loading(city));
                    announced = true;
                }
            }
        }
    };

    if print_view && !matches!(outcome, SearchOutcome::Skipped) {
        print!("{}", render::render_view(&widget.view()));
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use weather_widget_core::{Condition, ForecastDay, WeatherReading, WidgetError};

    fn reading() -> WeatherReading {
        WeatherReading {
            temperature: "+20 °C".into(),
            wind: "7 km/h".into(),
            description: "Sunny".into(),
            forecast: vec![ForecastDay { temperature: "+22 °C".into(), ..Default::default() }],
        }
    }

    fn card() -> WidgetView {
        WidgetView {
            card_visible: true,
            city_name: "Oslo".into(),
            icon: Condition::Sunny,
            temperature: "+20 °C".into(),
            ..Default::default()
        }
    }

    #[test]
    fn show_prints_card_for_displayed_reading() {
        let outcome = SearchOutcome::Displayed(reading());
        let text = show_report(&outcome, &card(), "Oslo", false).expect("displayed");
        assert!(text.contains("Oslo"));
        assert!(text.contains("+20 °C"));
    }

    #[test]
    fn show_json_prints_reading() {
        let outcome = SearchOutcome::Displayed(reading());
        let text = show_report(&outcome, &card(), "Oslo", true).expect("displayed");

        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["temperature"], "+20 °C");
        assert_eq!(value["forecast"][0]["temperature"], "+22 °C");
    }

    #[test]
    fn show_fails_when_search_failed() {
        let outcome =
            SearchOutcome::Failed(WidgetError::DataUnavailable { city: "Atlantis".into() });
        let view = WidgetView { error_visible: true, ..Default::default() };

        for json in [false, true] {
            let err = show_report(&outcome, &view, " Atlantis ", json).unwrap_err();
            assert_eq!(err.to_string(), "No weather available for 'Atlantis'");
        }
    }

    #[test]
    fn show_prints_nothing_for_blank_city() {
        let text = show_report(&SearchOutcome::Skipped, &WidgetView::default(), "  ", false)
            .expect("skipped");
        assert!(text.is_empty());
    }

    #[test]
    fn icon_prints_glyph_and_key() {
        assert_eq!(icon_report("Light rain showers", false), "☂ Light rain");
        assert_eq!(icon_report("Foggy", false), "✕ Default");
    }

    #[test]
    fn icon_svg_prints_markup() {
        let markup = icon_report("Sunny", true);
        assert!(markup.starts_with("<svg "));
        assert!(markup.contains("text-yellow-500"));
    }
}

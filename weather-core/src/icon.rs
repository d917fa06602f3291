macro_rules! svg {
    ($class:literal, $path:literal) => {
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="w-full h-full "#,
            $class,
            r#"" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="2"><path stroke-linecap="round" stroke-linejoin="round" d=""#,
            $path,
            r#"" /></svg>"#
        )
    };
}

/// Weather conditions the widget has an icon for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Condition {
    Sunny,
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    LightRain,
    #[default]
    Default,
}

impl Condition {
    /// Conditions matched against descriptions, in declared key order.
    pub const KNOWN: &'static [Condition] = &[
        Condition::Sunny,
        Condition::Clear,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rain,
        Condition::LightRain,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Clear => "Clear",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::Rain => "Rain",
            Condition::LightRain => "Light rain",
            Condition::Default => "Default",
        }
    }

    /// SVG markup for the icon.
    pub fn markup(&self) -> &'static str {
        match self {
            Condition::Sunny => svg!(
                "text-yellow-500",
                "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
            ),
            Condition::Clear => svg!(
                "text-blue-400",
                "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
            ),
            Condition::PartlyCloudy | Condition::Cloudy => svg!(
                "text-gray-500",
                "M3 15a4 4 0 004 4h9a5 5 0 10-.1-9.999 5.002 5.002 0 10-9.78 2.096A4.001 4.001 0 003 15z"
            ),
            Condition::Rain => svg!("text-blue-600", "M13 10V3L4 14h7v7l9-11h-7z"),
            Condition::LightRain => svg!(
                "text-blue-500",
                "M3 15a4 4 0 004 4h9a5 5 0 10-.1-9.999 5.002 5.002 0 10-9.78 2.096A4.001 4.001 0 003 15zM12 17l-2-2m2 2l2-2"
            ),
            Condition::Default => svg!("text-gray-400", "M6 18L18 6M6 6l12 12"),
        }
    }

    /// Short glyph for terminal output.
    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Sunny => "☀",
            Condition::Clear => "☼",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁",
            Condition::Rain => "⛈",
            Condition::LightRain => "☂",
            Condition::Default => "✕",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Pick the icon for a free-text description.
///
/// Keys are matched as case-insensitive substrings. The key found earliest in
/// the description wins, so "Light rain showers" is `LightRain` even though
/// "Rain" is declared first. Matches starting at the same position keep the
/// declared key order.
pub fn resolve_icon(description: &str) -> Condition {
    let description = description.to_lowercase();

    Condition::KNOWN
        .iter()
        .filter_map(|&c| description.find(&c.key().to_lowercase()).map(|at| (at, c)))
        .min_by_key(|&(at, _)| at)
        .map_or(Condition::Default, |(_, c)| c)
}

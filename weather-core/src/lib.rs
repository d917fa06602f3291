//! Core library for the weather widget.
//!
//! This crate defines:
//! - The reading model returned by the weather endpoint
//! - Icon resolution for condition descriptions
//! - Abstraction over the weather provider
//! - The widget itself and the view state it publishes
//! - Configuration handling
//!
//! It is used by `weather-widget`, but any front end that can draw a
//! [`WidgetView`] can drive a [`WeatherWidget`].

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod view;
pub mod widget;

pub use config::Config;
pub use error::WidgetError;
pub use icon::{Condition, resolve_icon};
pub use model::{ForecastDay, WeatherReading};
pub use provider::{GoWeatherProvider, WeatherProvider};
pub use view::WidgetView;
pub use widget::{SearchOutcome, WeatherWidget};

//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - The normalized weather record and unit/format selectors
//! - Unit suffixes and compass directions
//! - Output renderers (pretty text, JSON) and the dispatcher choosing between them
//! - Configuration file handling & settings resolution
//! - The OpenWeatherMap provider
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod provider;
pub mod render;
pub mod units;

pub use config::{Config, Settings, SettingsOverrides};
pub use model::{OutputFormat, UnitSelection, WeatherRecord};
pub use provider::{WeatherProvider, WeatherQuery, provider_from_settings};
pub use render::{OutputRenderer, RenderError, dispatch};

use crate::{
    Settings,
    model::{UnitSelection, WeatherRecord},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// One current-weather lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    /// City name, optionally followed by an ISO 3166 country code, e.g. `London,gb`.
    pub city: String,
    pub units: UnitSelection,
    /// Passed through to the upstream API untouched.
    pub lang: Option<String>,
}

impl From<&Settings> for WeatherQuery {
    fn from(settings: &Settings) -> Self {
        Self {
            city: settings.city.clone(),
            units: settings.units,
            lang: settings.lang.clone(),
        }
    }
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, query: &WeatherQuery) -> anyhow::Result<WeatherRecord>;
}

/// Construct the provider from resolved settings.
pub fn provider_from_settings(settings: &Settings) -> Box<dyn WeatherProvider> {
    Box::new(OpenWeatherProvider::new(settings.appid.clone()))
}

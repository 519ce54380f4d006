use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;

use crate::model::WeatherRecord;

use super::{WeatherProvider, WeatherQuery};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, query: &WeatherQuery) -> Result<WeatherRecord> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let mut params = vec![
            ("q", query.city.as_str()),
            ("units", query.units.as_str()),
            ("APPID", self.api_key.as_str()),
        ];
        if let Some(lang) = query.lang.as_deref() {
            params.push(("lang", lang));
        }

        tracing::debug!(
            %url,
            city = %query.city,
            units = %query.units,
            "requesting current weather"
        );

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        tracing::debug!(%status, bytes = body.len(), "OpenWeather responded");

        if !status.is_success() {
            return Err(match serde_json::from_str::<OwErrorResponse>(&body) {
                Ok(err) if !err.message.is_empty() => anyhow!(
                    "OpenWeather request failed with status {}.\nCode: {}\nMessage: {}",
                    status,
                    err.code(),
                    err.message,
                ),
                _ => anyhow!(
                    "OpenWeather request failed with status {}: {}",
                    status,
                    truncate_body(&body),
                ),
            });
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        WeatherRecord::try_from(parsed)
    }
}

#[derive(Debug, Deserialize)]
struct OwErrorResponse {
    /// OpenWeather sends this as a number on some errors and a string on others.
    #[serde(default)]
    cod: serde_json::Value,
    #[serde(default)]
    message: String,
}

impl OwErrorResponse {
    fn code(&self) -> String {
        match &self.cod {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    pressure: i64,
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: i64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
}

impl TryFrom<OwCurrentResponse> for WeatherRecord {
    type Error = anyhow::Error;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self> {
        let condition_description = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| w.description)
            .ok_or_else(|| anyhow!("OpenWeather response contained no weather conditions"))?;

        Ok(WeatherRecord {
            location_name: parsed.name,
            condition_description,
            temperature: parsed.main.temp,
            pressure_hpa: parsed.main.pressure,
            humidity_percent: parsed.main.humidity,
            wind_speed: parsed.wind.speed,
            wind_degrees: parsed.wind.deg,
            sunrise_epoch_seconds: parsed.sys.sunrise,
            sunset_epoch_seconds: parsed.sys.sunset,
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<WeatherRecord> {
        self.fetch_current(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}

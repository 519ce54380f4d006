use serde::Serialize;
use std::io::Write;

use crate::model::{UnitSelection, WeatherRecord};

use super::{OutputRenderer, RenderError, temperature_label, wind_clause};

/// Single-line JSON object.
///
/// Two fields intentionally differ from what a fresh design would emit and
/// are kept for compatibility with existing consumers:
/// - `wind` is the pretty wind clause verbatim (`", 3.6 m/s (E) wind"`).
/// - `sunrise` / `sunset` are raw epoch seconds as decimal strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Debug, Serialize)]
struct JsonWeather<'a> {
    city: &'a str,
    description: &'a str,
    temp: String,
    wind: String,
    pressure: String,
    humidity: String,
    sunrise: String,
    sunset: String,
}

impl<'a> JsonWeather<'a> {
    fn new(record: &'a WeatherRecord, units: UnitSelection) -> Self {
        Self {
            city: &record.location_name,
            description: &record.condition_description,
            temp: temperature_label(record, units),
            wind: wind_clause(record, units),
            pressure: format!("{} hPa", record.pressure_hpa),
            humidity: format!("{}%", record.humidity_percent),
            sunrise: record.sunrise_epoch_seconds.to_string(),
            sunset: record.sunset_epoch_seconds.to_string(),
        }
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(
        &self,
        record: &WeatherRecord,
        units: UnitSelection,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        serde_json::to_writer(&mut *out, &JsonWeather::new(record, units))?;
        writeln!(out)?;
        Ok(())
    }
}

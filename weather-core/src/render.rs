use std::io::Write;

use crate::{
    model::{OutputFormat, UnitSelection, WeatherRecord},
    render::{json::JsonRenderer, pretty::PrettyRenderer},
    units::{compass_direction, normalize_degrees, suffixes},
};

pub mod json;
pub mod pretty;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to write weather output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize weather output as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timestamp {0} cannot be represented as local time")]
    InvalidTimestamp(i64),
}

/// Formats a [`WeatherRecord`] and writes it to `out`.
pub trait OutputRenderer {
    fn render(
        &self,
        record: &WeatherRecord,
        units: UnitSelection,
        out: &mut dyn Write,
    ) -> Result<(), RenderError>;
}

/// Pick the renderer for `format`. Pretty output uses the local time zone.
pub fn renderer_for(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Pretty => Box::new(PrettyRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

pub fn dispatch(
    format: OutputFormat,
    record: &WeatherRecord,
    units: UnitSelection,
    out: &mut dyn Write,
) -> Result<(), RenderError> {
    tracing::debug!(%format, %units, location = %record.location_name, "rendering weather");
    renderer_for(format).render(record, units, out)
}

/// Rounded temperature with its unit suffix, e.g. `15°C`.
pub fn temperature_label(record: &WeatherRecord, units: UnitSelection) -> String {
    format!("{:.0}{}", record.temperature, suffixes(units).temperature)
}

/// `, 3.6 m/s (E) wind`, or an empty string when no wind was reported.
///
/// The JSON renderer reuses this clause verbatim, leading comma included.
pub fn wind_clause(record: &WeatherRecord, units: UnitSelection) -> String {
    if record.wind_speed <= 0.0 {
        return String::new();
    }

    format!(
        ", {:.1} {} ({}) wind",
        record.wind_speed,
        suffixes(units).speed,
        compass_direction(normalize_degrees(record.wind_degrees)),
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn london() -> WeatherRecord {
        WeatherRecord {
            location_name: "London".to_string(),
            condition_description: "clear sky".to_string(),
            temperature: 15.4,
            pressure_hpa: 1012,
            humidity_percent: 60,
            wind_speed: 0.0,
            wind_degrees: 0,
            sunrise_epoch_seconds: 1_600_000_000,
            sunset_epoch_seconds: 1_600_040_000,
        }
    }

    pub(crate) fn windy_london() -> WeatherRecord {
        WeatherRecord { wind_speed: 3.6, wind_degrees: 90, ..london() }
    }

    fn dispatch_to_string(format: OutputFormat, record: &WeatherRecord) -> String {
        let mut out = Vec::new();
        dispatch(format, record, UnitSelection::Metric, &mut out).expect("render should succeed");
        String::from_utf8(out).expect("output must be utf-8")
    }

    #[test]
    fn temperature_is_rounded_with_suffix() {
        assert_eq!(temperature_label(&london(), UnitSelection::Metric), "15°C");

        let warm = WeatherRecord { temperature: 59.7, ..london() };
        assert_eq!(temperature_label(&warm, UnitSelection::Imperial), "60°F");
    }

    #[test]
    fn wind_clause_is_empty_without_wind() {
        let record = WeatherRecord { wind_degrees: 180, ..london() };
        assert_eq!(wind_clause(&record, UnitSelection::Metric), "");
    }

    #[test]
    fn wind_clause_formats_speed_and_direction() {
        assert_eq!(wind_clause(&windy_london(), UnitSelection::Metric), ", 3.6 m/s (E) wind");

        let gusty = WeatherRecord { wind_speed: 12.04, wind_degrees: 225, ..london() };
        assert_eq!(wind_clause(&gusty, UnitSelection::Imperial), ", 12.0 mph (SW) wind");
    }

    #[test]
    fn wind_degrees_are_normalized_before_lookup() {
        let record = WeatherRecord { wind_degrees: 450, ..windy_london() };
        assert_eq!(wind_clause(&record, UnitSelection::Metric), ", 3.6 m/s (E) wind");
    }

    #[test]
    fn dispatch_selects_json_renderer() {
        let output = dispatch_to_string(OutputFormat::Json, &windy_london());
        assert!(output.starts_with('{'));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn dispatch_selects_pretty_renderer() {
        let output = dispatch_to_string(OutputFormat::Pretty, &windy_london());
        assert!(output.starts_with("Current weather in London:\n"));
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let record = windy_london();
        for format in [OutputFormat::Pretty, OutputFormat::Json] {
            assert_eq!(dispatch_to_string(format, &record), dispatch_to_string(format, &record));
        }
    }
}

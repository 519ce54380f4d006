use chrono::{Local, TimeZone, Timelike};
use std::io::Write;

use crate::model::{UnitSelection, WeatherRecord};

use super::{OutputRenderer, RenderError, temperature_label, wind_clause};

/// Multi-line human readable output.
///
/// Sunrise and sunset are shown as `HH:MM` wall-clock time in `tz`.
#[derive(Debug, Clone)]
pub struct PrettyRenderer<Tz: TimeZone = Local> {
    tz: Tz,
}

impl PrettyRenderer<Local> {
    pub fn new() -> Self {
        Self { tz: Local }
    }
}

impl Default for PrettyRenderer<Local> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> PrettyRenderer<Tz> {
    pub fn with_timezone(tz: Tz) -> Self {
        Self { tz }
    }

    fn clock_time(&self, epoch_seconds: i64) -> Result<String, RenderError> {
        let time = self
            .tz
            .timestamp_opt(epoch_seconds, 0)
            .earliest()
            .ok_or(RenderError::InvalidTimestamp(epoch_seconds))?;

        Ok(format!("{:02}:{:02}", time.hour(), time.minute()))
    }
}

impl<Tz: TimeZone> OutputRenderer for PrettyRenderer<Tz> {
    fn render(
        &self,
        record: &WeatherRecord,
        units: UnitSelection,
        out: &mut dyn Write,
    ) -> Result<(), RenderError> {
        let sunset = self.clock_time(record.sunset_epoch_seconds)?;
        let sunrise = self.clock_time(record.sunrise_epoch_seconds)?;

        writeln!(out, "Current weather in {}:", record.location_name)?;
        writeln!(
            out,
            "{}, {}{}",
            record.condition_description,
            temperature_label(record, units),
            wind_clause(record, units),
        )?;
        writeln!(out, "Pressure: {} hPa", record.pressure_hpa)?;
        writeln!(out, "Humidity: {}%", record.humidity_percent)?;
        writeln!(out, "Sunset: {sunset}")?;
        writeln!(out, "Sunrise: {sunrise}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{london, windy_london};
    use chrono::{FixedOffset, Utc};

    fn render_utc(record: &WeatherRecord, units: UnitSelection) -> String {
        let mut out = Vec::new();
        PrettyRenderer::with_timezone(Utc)
            .render(record, units, &mut out)
            .expect("render should succeed");
        String::from_utf8(out).expect("output must be utf-8")
    }

    #[test]
    fn calm_weather_has_no_wind_clause() {
        let output = render_utc(&london(), UnitSelection::Metric);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Current weather in London:",
                "clear sky, 15°C",
                "Pressure: 1012 hPa",
                "Humidity: 60%",
                "Sunset: 23:33",
                "Sunrise: 12:26",
            ]
        );
    }

    #[test]
    fn windy_weather_includes_wind_clause() {
        let output = render_utc(&windy_london(), UnitSelection::Metric);
        assert_eq!(output.lines().nth(1), Some("clear sky, 15°C, 3.6 m/s (E) wind"));
    }

    #[test]
    fn imperial_suffixes() {
        let record = WeatherRecord { temperature: 59.7, ..windy_london() };
        let output = render_utc(&record, UnitSelection::Imperial);
        assert_eq!(output.lines().nth(1), Some("clear sky, 60°F, 3.6 mph (E) wind"));
    }

    #[test]
    fn clock_times_follow_the_time_zone() {
        let plus_two = FixedOffset::east_opt(2 * 3600).expect("valid offset");
        let mut out = Vec::new();
        PrettyRenderer::with_timezone(plus_two)
            .render(&london(), UnitSelection::Metric, &mut out)
            .expect("render should succeed");
        let output = String::from_utf8(out).expect("output must be utf-8");

        assert!(output.contains("Sunset: 01:33\n"));
        assert!(output.contains("Sunrise: 14:26\n"));
    }

    #[test]
    fn out_of_range_timestamp_is_an_error() {
        let record = WeatherRecord { sunset_epoch_seconds: i64::MAX, ..london() };
        let mut out = Vec::new();
        let err = PrettyRenderer::with_timezone(Utc)
            .render(&record, UnitSelection::Metric, &mut out)
            .unwrap_err();

        assert!(matches!(err, RenderError::InvalidTimestamp(i64::MAX)));
        assert!(out.is_empty());
    }
}

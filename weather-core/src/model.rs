use std::{fmt, str::FromStr};

/// Normalized snapshot of one current-weather query.
///
/// `condition_description` is taken from the first entry of the upstream
/// condition list. Providers must refuse to build a record when that list
/// is empty; renderers rely on it being present.
///
/// `temperature` and `wind_speed` are already expressed in the unit system
/// that was requested upstream. Renderers only attach suffixes.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRecord {
    pub location_name: String,
    pub condition_description: String,
    pub temperature: f64,
    pub pressure_hpa: i64,
    pub humidity_percent: i64,
    /// `0.0` means no wind data was reported.
    pub wind_speed: f64,
    pub wind_degrees: i64,
    pub sunrise_epoch_seconds: i64,
    pub sunset_epoch_seconds: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnitSelection {
    #[default]
    Metric,
    Imperial,
}

impl UnitSelection {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSelection::Metric => "metric",
            UnitSelection::Imperial => "imperial",
        }
    }

    /// Lenient parse: anything other than "imperial" falls back to metric.
    pub fn from_selector(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("imperial") {
            UnitSelection::Imperial
        } else {
            UnitSelection::Metric
        }
    }
}

impl fmt::Display for UnitSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSelection {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSelection::Metric),
            "imperial" => Ok(UnitSelection::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported values: metric, imperial."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Unknown output format '{value}'. Supported values: pretty, json."
            )),
        }
    }
}

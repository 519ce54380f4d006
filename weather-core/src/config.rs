use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::{OutputFormat, UnitSelection};

/// Defaults stored on disk.
///
/// Example TOML:
/// city = "London,gb"
/// units = "metric"
/// appid = "..."
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub city: Option<String>,
    pub units: Option<String>,
    pub appid: Option<String>,
    pub format: Option<String>,
    pub lang: Option<String>,
}

/// Values supplied on the command line or through `GOWEATHER_*` variables.
/// They win over anything in the config file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub city: Option<String>,
    pub units: Option<UnitSelection>,
    pub appid: Option<String>,
    pub format: Option<OutputFormat>,
    pub lang: Option<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub city: String,
    pub appid: String,
    pub units: UnitSelection,
    pub format: OutputFormat,
    pub lang: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

impl Config {
    /// Merge `overrides` over the stored defaults.
    pub fn resolve(&self, overrides: SettingsOverrides) -> Result<Settings> {
        let city = non_empty(overrides.city.as_deref())
            .or_else(|| non_empty(self.city.as_deref()))
            .ok_or_else(|| {
                anyhow!(
                    "You must set the city.\n\
                     Hint: pass `--city London,gb`, set GOWEATHER_CITY, or run `weather configure`."
                )
            })?;

        let appid = non_empty(overrides.appid.as_deref())
            .or_else(|| non_empty(self.appid.as_deref()))
            .ok_or_else(|| {
                anyhow!(
                    "No OpenWeather API key configured.\n\
                     Hint: pass `--appid`, set GOWEATHER_APPID, or run `weather configure`."
                )
            })?;

        let units = overrides
            .units
            .or_else(|| self.units.as_deref().map(UnitSelection::from_selector))
            .unwrap_or_default();

        let format = overrides.format.or_else(|| self.stored_format()).unwrap_or_default();

        let lang = non_empty(overrides.lang.as_deref()).or_else(|| non_empty(self.lang.as_deref()));

        Ok(Settings { city, appid, units, format, lang })
    }

    fn stored_format(&self) -> Option<OutputFormat> {
        let raw = self.format.as_deref()?;
        match raw.parse::<OutputFormat>() {
            Ok(format) => Some(format),
            Err(err) => {
                tracing::warn!("Ignoring output format from config file: {err}");
                None
            }
        }
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

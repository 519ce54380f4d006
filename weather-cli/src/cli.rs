use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{Password, Select, Text};
use std::io::Write;
use weather_core::{
    Config, OutputFormat, SettingsOverrides, UnitSelection, WeatherProvider, WeatherQuery,
    dispatch, provider_from_settings,
};

/// Read outside clap: unlike `--units`, an unrecognized value here falls back to metric.
const UNITS_ENV: &str = "GOWEATHER_UNITS";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weather",
    version,
    about = "Print the current weather for a city",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub show: ShowArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively store a default city, unit system and API key.
    Configure,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// City name and country code separated by comma, using ISO 3166 codes, e.g. "London,gb".
    #[arg(short, long, env = "GOWEATHER_CITY")]
    pub city: Option<String>,

    /// Unit system: metric (°C, m/s) or imperial (°F, mph).
    /// Defaults to GOWEATHER_UNITS, then metric.
    #[arg(short, long)]
    pub units: Option<UnitSelection>,

    /// Your APPID from https://openweathermap.org.
    #[arg(short, long, env = "GOWEATHER_APPID", hide_env_values = true)]
    pub appid: Option<String>,

    /// Output format: pretty or json. Defaults to pretty.
    #[arg(short, long, env = "GOWEATHER_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Language code passed through to OpenWeather, e.g. "de".
    #[arg(short, long, env = "GOWEATHER_LANG")]
    pub lang: Option<String>,
}

impl ShowArgs {
    fn into_overrides(self, units_env: Option<String>) -> SettingsOverrides {
        let units = self
            .units
            .or_else(|| units_env.as_deref().map(UnitSelection::from_selector));

        SettingsOverrides {
            city: self.city,
            units,
            appid: self.appid,
            format: self.format,
            lang: self.lang,
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            None => show(self.show).await,
        }
    }
}

async fn show(args: ShowArgs) -> anyhow::Result<()> {
    let config = Config::load()?;
    let settings = config.resolve(args.into_overrides(std::env::var(UNITS_ENV).ok()))?;
    tracing::info!(
        city = %settings.city,
        units = %settings.units,
        format = %settings.format,
        "fetching current weather"
    );

    let provider = provider_from_settings(&settings);
    let record = provider.current_weather(&WeatherQuery::from(&settings)).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    dispatch(settings.format, &record, settings.units, &mut out)?;
    out.flush().context("Failed to flush standard output")?;

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let mut city_prompt = Text::new("Default city (e.g. London,gb):");
    if let Some(city) = config.city.as_deref() {
        city_prompt = city_prompt.with_default(city);
    }
    let city = city_prompt.prompt().context("Failed to read city")?;

    let units_options = vec![UnitSelection::Metric, UnitSelection::Imperial];
    let current_units = config
        .units
        .as_deref()
        .map(UnitSelection::from_selector)
        .unwrap_or_default();
    let starting_cursor = units_options.iter().position(|u| *u == current_units).unwrap_or(0);
    let units = Select::new("Unit system:", units_options)
        .with_starting_cursor(starting_cursor)
        .prompt()
        .context("Failed to read unit system")?;

    let mut key_prompt = Password::new("OpenWeather API key:").without_confirmation();
    if config.appid.is_some() {
        key_prompt = key_prompt.with_help_message("Leave empty to keep the current key");
    }
    let appid = key_prompt.prompt().context("Failed to read API key")?;

    config.city = Some(city.trim().to_string()).filter(|c| !c.is_empty());
    config.units = Some(units.as_str().to_string());
    if !appid.trim().is_empty() {
        config.appid = Some(appid.trim().to_string());
    }

    let path = config.save()?;
    println!("Configuration saved to {}", path.display());

    Ok(())
}

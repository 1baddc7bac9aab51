use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use screen_core::{Config, OpenWeatherClient, ScreenController, WeatherQuery};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherscreen", version, about = "Min/max temperature screen")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and an optional default city.
    Configure,

    /// Fetch the weather once and print the screen.
    Show {
        /// City name; falls back to the configured or default city.
        #[arg(long)]
        location: Option<String>,

        /// API key override for this run.
        #[arg(long)]
        api_key: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { location, api_key }) => show(location, api_key).await,
            // Bare invocation behaves like `show` with configured defaults.
            None => show(None, None).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()?;
    config.set_api_key(api_key);

    let location = inquire::Text::new("Default city:")
        .with_default(config.location())
        .prompt()?;
    if !location.trim().is_empty() {
        config.set_location(location);
    }

    config.save()?;
    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

async fn show(location: Option<String>, api_key: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let location = location.unwrap_or_else(|| config.location().to_string());
    let api_key = match api_key {
        Some(key) => key,
        None => config.api_key()?.to_string(),
    };
    let query = WeatherQuery::new(location, api_key);

    let mut controller = ScreenController::new();
    controller
        .run_once(Arc::new(OpenWeatherClient::new()), query)
        .await;

    print!("{}", view::render(controller.display()));
    Ok(())
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// The city shown when none is configured, matching the original screen.
pub const DEFAULT_LOCATION: &str = "Rome";

/// Top-level configuration stored on disk.
///
/// The original hardcoded both the location and the API key at the call
/// site; here they are externalized without changing the default behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional city name; falls back to [`DEFAULT_LOCATION`].
    pub location: Option<String>,

    /// OpenWeather API key. Required to run the screen.
    pub api_key: Option<String>,
}

impl Config {
    /// The location to query, falling back to the default city.
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    /// The configured API key, or an actionable error when missing.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weatherscreen configure` and enter your OpenWeather API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn set_location(&mut self, location: String) {
        self.location = Some(location);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherscreen", "weatherscreen")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_falls_back_to_default_city() {
        let cfg = Config::default();
        assert_eq!(cfg.location(), "Rome");
    }

    #[test]
    fn configured_location_wins_over_default() {
        let mut cfg = Config::default();
        cfg.set_location("Milan".to_string());
        assert_eq!(cfg.location(), "Milan");
    }

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `weatherscreen configure`"));
    }

    #[test]
    fn api_key_round_trips_through_setter() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        assert_eq!(cfg.api_key().expect("key must exist"), "KEY");
    }

    #[test]
    fn config_serializes_to_toml_and_back() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        cfg.set_location("Rome".to_string());

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed: Config = toml::from_str(&text).expect("parses");

        assert_eq!(parsed.location(), "Rome");
        assert_eq!(parsed.api_key().expect("key survives"), "KEY");
    }
}

use crate::constants::{env_vars, gesture, transition};
use crate::error::AppError;
use crate::input::GestureConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing presentation settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Duration of one slide transition in milliseconds.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    /// Minimum horizontal travel (terminal cells) for a drag to count as a swipe.
    #[serde(default = "default_swipe_min_distance")]
    pub swipe_min_distance: f64,
    /// Maximum press-to-release time for a swipe in milliseconds. 0 disables the time gate.
    #[serde(default = "default_swipe_max_duration_ms")]
    pub swipe_max_duration_ms: u64,
    /// Width of the left and right tap zones as a fraction of the screen width.
    #[serde(default = "default_tap_zone_fraction")]
    pub tap_zone_fraction: f64,
}

fn default_transition_ms() -> u64 {
    transition::DURATION_MS
}

fn default_swipe_min_distance() -> f64 {
    gesture::SWIPE_MIN_DISTANCE
}

fn default_swipe_max_duration_ms() -> u64 {
    gesture::SWIPE_MAX_DURATION_MS
}

fn default_tap_zone_fraction() -> f64 {
    gesture::TAP_ZONE_FRACTION
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            transition_ms: default_transition_ms(),
            swipe_min_distance: default_swipe_min_distance(),
            swipe_max_duration_ms: default_swipe_max_duration_ms(),
            tap_zone_fraction: default_tap_zone_fraction(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TELETEXT_DECK_LOG_FILE` - Override log file path
    /// - `TELETEXT_DECK_TRANSITION_MS` - Override transition duration in milliseconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides from a variable lookup (the process environment in production).
    /// Unparseable values are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(raw) = lookup(env_vars::TRANSITION_MS) {
            match raw.parse::<u64>() {
                Ok(ms) => self.transition_ms = ms,
                Err(_) => tracing::warn!(
                    "Ignoring {}={raw}: not a number of milliseconds",
                    env_vars::TRANSITION_MS
                ),
            }
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Transition duration as a [`Duration`]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Gesture recognition parameters for the input dispatcher
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            swipe_min_distance: self.swipe_min_distance,
            swipe_max_duration: (self.swipe_max_duration_ms > 0)
                .then(|| Duration::from_millis(self.swipe_max_duration_ms)),
            tap_zone_fraction: self.tap_zone_fraction,
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Defaults are in use)");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Transition:");
        println!("{} ms", config.transition_ms);
        println!("────────────────────────────────────");
        println!("Swipe:");
        println!("min distance {} cells", config.swipe_min_distance);
        if config.swipe_max_duration_ms > 0 {
            println!("max duration {} ms", config.swipe_max_duration_ms);
        } else {
            println!("no duration limit");
        }
        println!("────────────────────────────────────");
        println!("Tap zones:");
        println!("{:.0}% of screen width", config.tap_zone_fraction * 100.0);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

//! Configuration management for the `DengueWatch` service
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::DengueWatchError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `DengueWatch` application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DengueWatchConfig {
    /// Weather provider configuration
    pub weather: WeatherConfig,
    /// Web server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Default application settings
    pub defaults: DefaultsConfig,
}

/// Weather provider configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// WeatherAPI key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the weather provider
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Transport timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_seconds: u32,
}

/// Web server configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the dashboard API listens on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Default application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Location queried when the caller supplies none
    #[serde(default = "default_location")]
    pub location: String,
    /// Minutes between periodic advisory refreshes
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_minutes: u64,
}

// Default value functions
fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_weather_timeout() -> u32 {
    30
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_location() -> String {
    "Manila".to_string()
}

fn default_refresh_interval() -> u64 {
    30
}

impl Default for DengueWatchConfig {
    fn default() -> Self {
        Self {
            weather: WeatherConfig {
                api_key: String::new(),
                base_url: default_weather_base_url(),
                timeout_seconds: default_weather_timeout(),
            },
            server: ServerConfig {
                port: default_server_port(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
            },
            defaults: DefaultsConfig {
                location: default_location(),
                refresh_interval_minutes: default_refresh_interval(),
            },
        }
    }
}

impl DengueWatchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with DENGUEWATCH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("DENGUEWATCH")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: DengueWatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("denguewatch").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.weather.base_url.is_empty() {
            self.weather.base_url = default_weather_base_url();
        }
        if self.weather.timeout_seconds == 0 {
            self.weather.timeout_seconds = default_weather_timeout();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.defaults.location.is_empty() {
            self.defaults.location = default_location();
        }
        if self.defaults.refresh_interval_minutes == 0 {
            self.defaults.refresh_interval_minutes = default_refresh_interval();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_key()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate the weather provider credential
    pub fn validate_api_key(&self) -> Result<()> {
        if self.weather.api_key.is_empty() {
            return Err(DengueWatchError::config(
                "Weather API key is required. Set DENGUEWATCH_WEATHER_API_KEY or add it to the config file."
            ).into());
        }

        if self.weather.api_key.len() < 8 {
            return Err(DengueWatchError::config(
                "Weather API key appears to be invalid (too short). Please check your API key.",
            )
            .into());
        }

        if self.weather.api_key.len() > 100 {
            return Err(DengueWatchError::config(
                "Weather API key appears to be invalid (too long). Please check your API key.",
            )
            .into());
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.weather.timeout_seconds > 300 {
            return Err(
                DengueWatchError::config("Weather API timeout cannot exceed 300 seconds").into(),
            );
        }

        if self.defaults.refresh_interval_minutes > 24 * 60 {
            return Err(
                DengueWatchError::config("Refresh interval cannot exceed 24 hours").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(DengueWatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        if !self.weather.base_url.starts_with("http://")
            && !self.weather.base_url.starts_with("https://")
        {
            return Err(DengueWatchError::config(
                "Weather API base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> DengueWatchConfig {
        let mut config = DengueWatchConfig::default();
        config.weather.api_key = "valid_api_key_123".to_string();
        config
    }

    #[test]
    fn test_default_config() {
        let config = DengueWatchConfig::default();
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.weather.timeout_seconds, 30);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.location, "Manila");
        assert_eq!(config.defaults.refresh_interval_minutes, 30);
    }

    #[test]
    fn test_config_validation_missing_api_key() {
        let config = DengueWatchConfig::default();
        let result = config.validate_api_key();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key is required"));
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let config = config_with_key();
        assert!(config.validate_api_key().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = config_with_key();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = config_with_key();
        config.weather.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_base_url() {
        let mut config = config_with_key();
        config.weather.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_location() {
        let mut config = config_with_key();
        config.defaults.location = String::new();
        config.apply_defaults();
        assert_eq!(config.defaults.location, "Manila");
    }

    #[test]
    fn test_config_path_generation() {
        let path = DengueWatchConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("denguewatch"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}

//! Configuration management for the `TravelGems` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelGemsError;
use crate::map::{MAX_ZOOM, MIN_ZOOM};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variables consulted for the AI credential when the config has none
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Root configuration structure for the `TravelGems` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelGemsConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Generative AI configuration
    #[serde(default)]
    pub ai: AiConfig,
    /// Map view defaults
    #[serde(default)]
    pub map: MapConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the built frontend bundle
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Serve HTTPS when both paths are present
    #[serde(default)]
    pub tls: Option<TlsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
}

/// Generative AI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Credential for the generative language API. AI features are off without it.
    pub api_key: Option<String>,
    /// Base URL of the generative language API
    #[serde(default = "default_ai_base_url")]
    pub base_url: String,
    /// Model used for structured itinerary generation
    #[serde(default = "default_itinerary_model")]
    pub itinerary_model: String,
    /// Model used for maps-grounded search
    #[serde(default = "default_search_model")]
    pub search_model: String,
    /// Request timeout in seconds
    #[serde(default = "default_ai_timeout")]
    pub timeout_seconds: u32,
}

/// Map view defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_map_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_map_longitude")]
    pub default_longitude: f64,
    #[serde(default = "default_map_zoom")]
    pub default_zoom: u8,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "frontend/dist".to_string()
}

fn default_ai_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_itinerary_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_search_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_ai_timeout() -> u32 {
    60
}

// Mysuru palace grounds
fn default_map_latitude() -> f64 {
    12.3052
}

fn default_map_longitude() -> f64 {
    76.6552
}

fn default_map_zoom() -> u8 {
    15
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            tls: None,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_ai_base_url(),
            itinerary_model: default_itinerary_model(),
            search_model: default_search_model(),
            timeout_seconds: default_ai_timeout(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_map_latitude(),
            default_longitude: default_map_longitude(),
            default_zoom: default_map_zoom(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelGemsConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            tracing::debug!("Reading configuration from {}", config_file.display());
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // TRAVELGEMS_AI__API_KEY style overrides
        builder = builder.add_source(
            Environment::with_prefix("TRAVELGEMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelGemsConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = API_KEY_FALLBACK_VARS
                .iter()
                .find_map(|var| std::env::var(var).ok())
                .filter(|key| !key.trim().is_empty());
        }

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelgems").join("config.toml"))
    }

    /// Whether the generative AI features can be used
    #[must_use]
    pub fn ai_enabled(&self) -> bool {
        self.ai.api_key.is_some()
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.server.static_dir.is_empty() {
            self.server.static_dir = default_static_dir();
        }
        if self.ai.base_url.is_empty() {
            self.ai.base_url = default_ai_base_url();
        }
        if self.ai.itinerary_model.is_empty() {
            self.ai.itinerary_model = default_itinerary_model();
        }
        if self.ai.search_model.is_empty() {
            self.ai.search_model = default_search_model();
        }
        if self.ai.timeout_seconds == 0 {
            self.ai.timeout_seconds = default_ai_timeout();
        }
        if self.map.default_zoom == 0 {
            self.map.default_zoom = default_map_zoom();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_api_keys()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate API keys and credentials
    pub fn validate_api_keys(&self) -> Result<()> {
        if let Some(api_key) = &self.ai.api_key {
            if api_key.trim().is_empty() {
                return Err(TravelGemsError::config(
                    "AI API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TravelGemsError::config("Server port cannot be 0").into());
        }

        if self.ai.timeout_seconds > 300 {
            return Err(TravelGemsError::config("AI request timeout cannot exceed 300 seconds").into());
        }

        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.map.default_zoom) {
            return Err(TravelGemsError::config(format!(
                "Default map zoom must be between {MIN_ZOOM} and {MAX_ZOOM}"
            ))
            .into());
        }

        if !(-90.0..=90.0).contains(&self.map.default_latitude)
            || !(-180.0..=180.0).contains(&self.map.default_longitude)
        {
            return Err(TravelGemsError::config("Default map center is not a valid coordinate").into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelGemsError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelGemsError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if !self.ai.base_url.starts_with("http://") && !self.ai.base_url.starts_with("https://") {
            return Err(
                TravelGemsError::config("AI API base URL must be a valid HTTP or HTTPS URL").into(),
            );
        }

        Ok(())
    }
}

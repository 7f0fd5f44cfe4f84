//! CLI Configuration
//!
//! Configuration types and defaults for the arrangement command line.

use arrangement_core::{Bound, DEFAULT_BOUND};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log levels accepted by `log_level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Labelled `Total` / `Blue` lines
    #[default]
    Text,
    /// JSON array of `{"total", "blue"}` objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown output format {:?}",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Lower bound on the total disc count; prompted for when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound: Option<String>,

    /// Number of arrangements to report
    pub count: usize,

    /// Output format
    pub output_format: OutputFormat,

    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bound: None,
            count: 1,
            output_format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Create a new configuration builder
    pub fn builder() -> CliConfigBuilder {
        CliConfigBuilder::default()
    }

    /// Default configuration with the canonical 10^12 bound filled in
    pub fn sample() -> Self {
        Self {
            bound: Some(DEFAULT_BOUND.to_string()),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::IoError(e.to_string()))
    }

    /// The configured bound, if any, as a validated `Bound`
    pub fn parsed_bound(&self) -> Result<Option<Bound>, ConfigError> {
        self.bound
            .as_deref()
            .map(|text| {
                text.parse::<Bound>()
                    .map_err(|e| ConfigError::InvalidValue(format!("bound: {}", e)))
            })
            .transpose()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_bound()?;

        if self.count == 0 {
            return Err(ConfigError::InvalidValue("count cannot be 0".into()));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.log_level
            )));
        }

        Ok(())
    }
}

/// Configuration builder
#[derive(Default)]
pub struct CliConfigBuilder {
    config: CliConfig,
}

impl CliConfigBuilder {
    /// Start from an existing configuration (e.g. one loaded from a file)
    pub fn from_config(config: CliConfig) -> Self {
        Self { config }
    }

    /// Set the lower bound
    pub fn bound(mut self, bound: impl Into<String>) -> Self {
        self.config.bound = Some(bound.into());
        self
    }

    /// Set the number of arrangements to report
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Set output format
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Set log level
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CliConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

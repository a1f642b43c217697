#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, RecordFormat};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::{validate_log_level, TomlConfig, DEFAULT_SOURCE_LOCATION, DEFAULT_TIMEOUT_SECONDS};

/// Effective settings after layering: built-in defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySettings {
    pub source_location: String,
    pub source_format: Option<RecordFormat>,
    pub timeout_seconds: u64,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            source_location: DEFAULT_SOURCE_LOCATION.to_string(),
            source_format: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_level: None,
            log_format: LogFormat::default(),
            verbose: false,
        }
    }
}

impl DirectorySettings {
    pub fn with_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(location) = config.location() {
            self.source_location = location.to_string();
        }
        if let Some(format) = config.format() {
            self.source_format = Some(format);
        }
        if let Some(timeout) = config.timeout_seconds() {
            self.timeout_seconds = timeout;
        }
        if let Some(level) = config.log_level() {
            self.log_level = Some(level.to_string());
        }
        if let Some(format) = config.log_format() {
            self.log_format = format;
        }
        self
    }
}

impl ConfigProvider for DirectorySettings {
    fn source_location(&self) -> &str {
        &self.source_location
    }

    fn source_format(&self) -> Option<RecordFormat> {
        self.source_format
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for DirectorySettings {
    fn validate(&self) -> Result<()> {
        validation::validate_source_location("source", &self.source_location)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        if let Some(level) = &self.log_level {
            validate_log_level("log_level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = DirectorySettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.source_location(), DEFAULT_SOURCE_LOCATION);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            "[source]\nlocation = \"staff.csv\"\n\n[logging]\nlevel = \"warn\"\n",
        )
        .unwrap();

        let settings = DirectorySettings::default().with_toml(&config);
        assert_eq!(settings.source_location, "staff.csv");
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_invalid_timeout() {
        let settings = DirectorySettings {
            timeout_seconds: 0,
            ..DirectorySettings::default()
        };
        assert!(settings.validate().is_err());
    }
}

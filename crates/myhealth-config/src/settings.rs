//! Application settings.

use std::path::{Path, PathBuf};

use myhealth_core::Date;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::labels::{LabelTable, Locale};

/// Default output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// JSON.
    Json,
    /// CSV.
    Csv,
    /// Headline value only.
    Minimal,
}

/// How dates are echoed back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `YYYY-MM-DD`.
    #[default]
    Iso,
    /// `DD.MM.YYYY`.
    Dotted,
}

impl DateStyle {
    /// Formats `date` in this style.
    pub fn format(&self, date: Date) -> String {
        match self {
            Self::Iso => date.to_string(),
            Self::Dotted => date.to_dotted_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Label locale
    #[serde(default)]
    pub locale: Locale,

    /// Optional TOML file with label overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_file: Option<PathBuf>,

    /// Output format when none is given on the command line
    #[serde(default)]
    pub output_format: DisplayFormat,

    /// Date rendering
    #[serde(default)]
    pub date_style: DateStyle,
}

impl AppConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `labels_file` is resolved against the config file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let mut config = Self::from_toml_str(&content)?;

        if let Some(dir) = path.parent() {
            config.labels_file = config
                .labels_file
                .map(|file| if file.is_relative() { dir.join(file) } else { file });
        }

        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("loading configuration from {}", path.display());
            Self::from_file(path)
        } else {
            log::debug!("{} not found, using default configuration", path.display());
            Ok(Self::default())
        }
    }

    /// Standard location: `<config dir>/myhealth/config.toml`.
    pub fn default_path() -> ConfigResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| ConfigError::Validation {
                field: "path".to_string(),
                message: "could not determine config directory".to_string(),
            })?;
        Ok(base.join("myhealth").join("config.toml"))
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(|e| ConfigError::io(path, e))
    }

    /// Effective label table: the locale's built-in table plus any overrides.
    pub fn label_table(&self) -> ConfigResult<LabelTable> {
        match &self.labels_file {
            Some(file) => LabelTable::from_file(file, self.locale),
            None => Ok(LabelTable::for_locale(self.locale)),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.labels_file {
            if !file.is_file() {
                errors.push(ValidationError::new(
                    "labels_file",
                    format!("{} does not exist", file.display()),
                ));
            }
        }
        errors
    }
}

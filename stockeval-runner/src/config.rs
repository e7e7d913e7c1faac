//! Serializable run configuration.
//!
//! A run is described by a TOML file:
//!
//! ```toml
//! [sources]
//! metadata = "metadata.csv"
//! prices = "prices.csv"
//! delimiter = ","
//!
//! [output]
//! summary = "summary.csv"
//! format = "csv"
//!
//! [columns]
//! price = "Close"
//! ```
//!
//! Only `[sources]` is required.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use stockeval_core::{ColumnNames, ReadOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

/// Everything needed to reproduce one summary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub sources: SourcesConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub columns: ColumnNames,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Metadata table (ticker, company name).
    pub metadata: PathBuf,

    /// Price table (ticker, trade date, price).
    pub prices: PathBuf,

    /// Field delimiter shared by both sources.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the summary is written.
    pub summary: PathBuf,

    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary: PathBuf::from("summary.csv"),
            format: OutputFormat::Csv,
        }
    }
}

/// Summary sink format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected csv or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

impl RunConfig {
    /// Config for two sources with default output and column names.
    pub fn new(metadata: impl Into<PathBuf>, prices: impl Into<PathBuf>) -> Self {
        Self {
            sources: SourcesConfig {
                metadata: metadata.into(),
                prices: prices.into(),
                delimiter: default_delimiter(),
            },
            output: OutputConfig::default(),
            columns: ColumnNames::default(),
        }
    }

    /// Load a config from a TOML file.
    ///
    /// Relative source and output paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reader options for both sources.
    pub fn read_options(&self) -> Result<ReadOptions, ConfigError> {
        Ok(ReadOptions {
            delimiter: self.delimiter_byte()?,
            columns: self.columns.clone(),
        })
    }

    fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let c = self.sources.delimiter;
        if c.is_ascii() {
            Ok(c as u8)
        } else {
            Err(ConfigError::InvalidDelimiter(c))
        }
    }

    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.sources.metadata,
            &mut self.sources.prices,
            &mut self.output.summary,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

//! Configuration management for tweetlens
//!
//! Settings come from a TOML file when one is given, otherwise from
//! `TWEETLENS_*` environment variables layered over the defaults.
//! Command-line flags override either source in the command layer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::analytics::{Aliases, ExclusionRules, Lexicon};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tweet archive location and column names
    pub input: InputConfig,

    /// Positive/negative adjective lists for tagging
    pub lexicon: Lexicon,

    /// Country word list and ranking filters
    pub countries: CountriesConfig,

    /// Where exported files go
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Input file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the tweet CSV
    pub tweets_path: PathBuf,

    /// Header of the tweet text column
    pub text_column: String,

    /// Header of the timestamp column
    pub date_column: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            tweets_path: PathBuf::from("djt_tweets.csv"),
            text_column: String::from("Text"),
            date_column: String::from("Date"),
        }
    }
}

/// Country ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountriesConfig {
    /// Word list with one `"CC Name"` entry per line
    pub list_path: PathBuf,

    /// Characters stripped from the start of each entry
    pub prefix_len: usize,

    /// Filters applied before bucketing
    pub exclude: ExclusionRules,

    /// Variant spellings counted as one country (`"united kingdom" = ["uk"]`)
    pub aliases: Aliases,
}

impl Default for CountriesConfig {
    fn default() -> Self {
        Self {
            list_path: PathBuf::from("country_names.txt"),
            prefix_len: 3,
            exclude: ExclusionRules::default(),
            aliases: Aliases::new(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for relative output paths
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("TWEETLENS_INPUT") {
            config.input.tweets_path = PathBuf::from(path);
        }
        if let Ok(column) = std::env::var("TWEETLENS_TEXT_COLUMN") {
            config.input.text_column = column;
        }
        if let Ok(column) = std::env::var("TWEETLENS_DATE_COLUMN") {
            config.input.date_column = column;
        }
        if let Ok(path) = std::env::var("TWEETLENS_COUNTRY_LIST") {
            config.countries.list_path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("TWEETLENS_OUTPUT_DIR") {
            config.output.dir = PathBuf::from(dir);
        }

        config.logging.level =
            std::env::var("TWEETLENS_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));
        config.logging.format =
            std::env::var("TWEETLENS_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.text_column.trim().is_empty() || self.input.date_column.trim().is_empty() {
            anyhow::bail!("text_column and date_column must not be empty");
        }

        if self.input.text_column == self.input.date_column {
            anyhow::bail!(
                "text_column and date_column must differ (both are '{}')",
                self.input.text_column
            );
        }

        if self.countries.exclude.max_count == Some(0) {
            anyhow::bail!("countries.exclude.max_count must be greater than 0");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("logging.format must be 'text' or 'json', got '{}'", self.logging.format);
        }

        Ok(())
    }

    /// Resolve an output file name against the output directory
    ///
    /// Absolute paths are returned unchanged.
    #[must_use]
    pub fn output_path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.output.dir.join(name)
    }
}

//! tweetlens - keyword frequency analysis for tweet archives
//!
//! Loads a CSV of tweets, normalizes the text and answers simple counting
//! questions about it: how many tweets mention a keyword, how that changes
//! by year and month, which countries come up most, and which tweets use
//! positive or negative adjectives. Results are exported as flat files for
//! an external visualization tool.
//!
//! # Architecture
//!
//! - [`text`] - Text normalization and tokenization
//! - [`models`] - Records and text views
//! - [`analytics`] - Keyword counts, timelines, ranking/bucketing, tagging
//! - [`dataset`] - CSV and word-list loading
//! - [`export`] - CSV/JSON export
//! - [`config`] - Configuration management
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use tweetlens::analytics::{count_keywords, year_span, counts_by_year};
//! use tweetlens::config::Config;
//! use tweetlens::dataset::load_records;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let dataset = load_records(Path::new("djt_tweets.csv"), &config.input)?;
//!
//!     let counts = count_keywords(&dataset.records, &["obama", "fake news"]);
//!     if let Some(years) = year_span(&dataset.records) {
//!         let by_year = counts_by_year(&dataset.records, "obama", years);
//!         println!("{counts:?} {by_year:?}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod models;
pub mod text;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{BucketLabel, CountTable, KeywordCount, Lexicon, Tags, TimeSeries};
    pub use crate::config::Config;
    pub use crate::dataset::{Dataset, DatasetSummary};
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::models::{Record, TextSource};
}

// Direct re-exports for convenience
pub use models::{Record, TextSource};

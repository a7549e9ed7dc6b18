//! Loading tweet records and country word lists
//!
//! Rows that cannot become a [`Record`] (missing or empty text, a date that
//! does not parse, a malformed CSV row) are dropped and counted. Only
//! problems with the file as a whole, such as a missing header, are errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::path::Path;

use crate::config::InputConfig;
use crate::error::{Error, Result};
use crate::models::Record;
use crate::text::normalize;

/// Date-time layouts tried after RFC 3339
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m-%d-%Y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, read as midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse a timestamp in any of the supported layouts
///
/// Offsets in RFC 3339 values are applied, giving a UTC wall-clock time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Records loaded from one input file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,

    /// Rows skipped because they could not be read as a record
    pub dropped: usize,
}

/// Headline numbers for a dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub dropped: usize,
    pub first: Option<NaiveDateTime>,
    pub last: Option<NaiveDateTime>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            records: self.records.len(),
            dropped: self.dropped,
            first: self.records.iter().map(Record::timestamp).min(),
            last: self.records.iter().map(Record::timestamp).max(),
        }
    }
}

/// Read tweets from a CSV file with a header row
pub fn load_records(path: &Path, input: &InputConfig) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::missing_column(name, path.display().to_string()))
    };
    let text_idx = column(input.text_column.as_str())?;
    let date_idx = column(input.date_column.as_str())?;

    let mut dataset = Dataset::default();

    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                tracing::debug!(row = index, error = %e, "Dropping unreadable row");
                dataset.dropped += 1;
                continue;
            }
        };

        let text = row.get(text_idx).filter(|t| !t.trim().is_empty());
        let timestamp = row.get(date_idx).and_then(parse_timestamp);

        match (text, timestamp) {
            (Some(text), Some(timestamp)) => {
                dataset.records.push(Record::new(index, text, timestamp));
            }
            _ => {
                tracing::debug!(row = index, "Dropping row with missing text or bad date");
                dataset.dropped += 1;
            }
        }
    }

    if dataset.dropped > 0 {
        tracing::warn!(
            path = %path.display(),
            dropped = dataset.dropped,
            "Skipped incomplete rows"
        );
    }
    tracing::info!(
        path = %path.display(),
        records = dataset.records.len(),
        "Loaded tweets"
    );

    Ok(dataset)
}

/// Parse a country word list
///
/// Each line is a two-letter code, a separator, then the name
/// (`"FR France"`). The first `prefix_len` characters are stripped and the
/// rest is normalized like tweet text, so `"Guinea-Bissau"` becomes
/// `"guineabissau"` and matches the normalized tweet. A leading `Country`
/// header line and blank lines are skipped.
pub fn parse_country_names(content: &str, prefix_len: usize) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter(|(i, line)| !(*i == 0 && line.trim().eq_ignore_ascii_case("country")))
        .map(|(_, line)| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let name: String = line.chars().skip(prefix_len).collect();
            normalize(&name).trim().to_string()
        })
        .filter(|name| !name.is_empty())
        .collect()
}

/// Read and parse a country word list from disk
pub fn load_country_names(path: &Path, prefix_len: usize) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::with_source(format!("Failed to read country list: {}", path.display()), e)
    })?;

    let names = parse_country_names(&content, prefix_len);
    tracing::debug!(path = %path.display(), countries = names.len(), "Loaded country list");
    Ok(names)
}

// Core data structures for tweetlens

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::text;

/// One tweet from the input archive
///
/// `normalized_text` is derived from `raw_text` when the record is built and
/// cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    index: usize,
    raw_text: String,
    timestamp: NaiveDateTime,
    normalized_text: String,
}

impl Record {
    /// Build a record, computing its normalized text
    ///
    /// `index` is the zero-based row position in the source file.
    pub fn new(index: usize, raw_text: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let raw_text = raw_text.into();
        let normalized_text = text::normalize(&raw_text);
        Self {
            index,
            raw_text,
            timestamp,
            normalized_text,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn normalized_text(&self) -> &str {
        &self.normalized_text
    }

    /// Calendar year of the timestamp
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month of the timestamp, 1..=12
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    /// Whether `keyword` occurs in the chosen view of this record
    pub fn contains(&self, keyword: &str, source: TextSource) -> bool {
        match source {
            TextSource::Raw => self.raw_text.contains(keyword),
            TextSource::Normalized => self.normalized_text.contains(keyword),
            TextSource::Tokens => text::contains_token(&self.normalized_text, keyword),
        }
    }
}

impl AsRef<str> for Record {
    fn as_ref(&self) -> &str {
        &self.normalized_text
    }
}

/// Which view of a record keyword matching runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    /// Original tweet text, case-sensitive
    Raw,
    /// Normalized text, substring match
    #[default]
    Normalized,
    /// Normalized text split on spaces, whole-token match
    Tokens,
}

impl TextSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Normalized => "normalized",
            Self::Tokens => "tokens",
        }
    }

    /// Bring a user-supplied keyword into the form this source compares against
    pub fn prepare_keyword(&self, keyword: &str) -> String {
        match self {
            Self::Raw => keyword.to_string(),
            Self::Normalized | Self::Tokens => text::normalize(keyword),
        }
    }
}

impl fmt::Display for TextSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" | "text" => Ok(Self::Raw),
            "normalized" | "clean" => Ok(Self::Normalized),
            "tokens" | "split" => Ok(Self::Tokens),
            other => Err(format!("unknown text source: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_record_normalizes_on_construction() {
        let record = Record::new(0, "OBAMA care now!", ts(2013, 10, 1));
        assert_eq!(record.raw_text(), "OBAMA care now!");
        assert_eq!(record.normalized_text(), "obama care now");
        assert_eq!(record.year(), 2013);
        assert_eq!(record.month(), 10);
    }

    #[test]
    fn test_record_contains_by_source() {
        let record = Record::new(3, "Repeal Obamacare!", ts(2017, 3, 24));

        assert!(!record.contains("obama", TextSource::Raw));
        assert!(record.contains("Obama", TextSource::Raw));
        assert!(record.contains("obama", TextSource::Normalized));
        assert!(!record.contains("obama", TextSource::Tokens));
        assert!(record.contains("obamacare", TextSource::Tokens));
    }

    #[test]
    fn test_text_source_parse() {
        assert_eq!("clean".parse::<TextSource>(), Ok(TextSource::Normalized));
        assert_eq!("SPLIT".parse::<TextSource>(), Ok(TextSource::Tokens));
        assert_eq!("raw".parse::<TextSource>(), Ok(TextSource::Raw));
        assert!("words".parse::<TextSource>().is_err());
    }

    #[test]
    fn test_prepare_keyword() {
        assert_eq!(TextSource::Raw.prepare_keyword("UK "), "UK ");
        assert_eq!(TextSource::Normalized.prepare_keyword("Fake News!"), "fake news");
    }
}

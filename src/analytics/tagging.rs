//! Positive/negative adjective tagging
//!
//! A tweet is tagged positive if its normalized text contains any word from
//! the positive list, and negative likewise. The two flags are independent:
//! "a great and terrible day" is both.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// Positive and negative keyword lists used for tagging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        let positive = [
            "good", "great", "fantastic", "super", "excellent", "awesome", "superb", "amazing",
            "fabulous", "outstanding", "phenomenal", "strong", "mighty", "powerful",
        ];
        let negative = [
            "bad", "awful", "terrible", "worse", "worst", "revolting", "disgusting", "atrocious",
            "abominable", "dreadful", "crummy", "lousy", "sad", "unacceptable", "crap", "junk",
            "shit", "fuck", "hideous", "slimy", "shame", "shameful",
        ];

        Self {
            positive: positive.iter().map(|w| w.to_string()).collect(),
            negative: negative.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Tag a record against this lexicon
    #[must_use]
    pub fn tag(&self, record: &Record) -> Tags {
        tag(record, &self.positive, &self.negative)
    }
}

/// Independent positive/negative flags for one record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    pub is_positive: bool,
    pub is_negative: bool,
}

impl Tags {
    /// Both flags set
    #[must_use]
    pub fn is_mixed(&self) -> bool {
        self.is_positive && self.is_negative
    }
}

/// Tag one record
pub fn tag<K: AsRef<str>>(record: &Record, positive: &[K], negative: &[K]) -> Tags {
    let text = record.normalized_text();
    let any_of = |words: &[K]| words.iter().any(|word| text.contains(word.as_ref()));

    Tags {
        is_positive: any_of(positive),
        is_negative: any_of(negative),
    }
}

/// A record's date with its tags, in export column naming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedRecord {
    pub index: usize,
    #[serde(rename = "Date")]
    pub date: NaiveDateTime,
    #[serde(rename = "pos_col")]
    pub is_positive: bool,
    #[serde(rename = "neg_col")]
    pub is_negative: bool,
}

/// Tag every record, producing a new record set
pub fn tag_records<K: AsRef<str>>(
    records: &[Record],
    positive: &[K],
    negative: &[K],
) -> Vec<TaggedRecord> {
    records
        .iter()
        .map(|record| {
            let tags = tag(record, positive, negative);
            TaggedRecord {
                index: record.index(),
                date: record.timestamp(),
                is_positive: tags.is_positive,
                is_negative: tags.is_negative,
            }
        })
        .collect()
}

/// Totals over a tagged record set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub mixed: usize,
    pub untagged: usize,
}

impl TagSummary {
    pub fn from_tagged(tagged: &[TaggedRecord]) -> Self {
        tagged.iter().fold(Self::default(), |mut summary, row| {
            summary.total += 1;
            match (row.is_positive, row.is_negative) {
                (true, true) => {
                    summary.positive += 1;
                    summary.negative += 1;
                    summary.mixed += 1;
                }
                (true, false) => summary.positive += 1,
                (false, true) => summary.negative += 1,
                (false, false) => summary.untagged += 1,
            }
            summary
        })
    }
}

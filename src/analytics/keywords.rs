//! Keyword document-frequency counting
//!
//! A record counts once for a keyword if the keyword occurs anywhere in it,
//! no matter how many times. Matching is a plain case-sensitive substring
//! test; callers normalize keywords and records the same way beforehand.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::{Record, TextSource};

/// A keyword with its document frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

impl KeywordCount {
    pub fn new(keyword: impl Into<String>, count: u64) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }
}

/// Keyword -> count mapping that iterates in keyword input order
///
/// A keyword that appears more than once keeps its first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountTable {
    entries: Vec<KeywordCount>,
}

impl CountTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `keyword`, if it was part of the table
    #[must_use]
    pub fn get(&self, keyword: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.keyword == keyword)
            .map(|entry| entry.count)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in keyword input order
    pub fn iter(&self) -> impl Iterator<Item = &KeywordCount> {
        self.entries.iter()
    }

    /// Sum of all counts
    ///
    /// A record matching several keywords contributes once per keyword.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// The `n` highest counts, ties kept in input order
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<KeywordCount> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<KeywordCount> {
        self.entries
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let entries = iter
            .into_iter()
            .map(|(keyword, count)| KeywordCount::new(keyword, count))
            .filter(|entry| seen.insert(entry.keyword.clone()))
            .collect();
        Self { entries }
    }
}

impl IntoIterator for CountTable {
    type Item = KeywordCount;
    type IntoIter = std::vec::IntoIter<KeywordCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Number of records containing `keyword` at least once
pub fn count_keyword<S: AsRef<str>>(records: &[S], keyword: &str) -> u64 {
    records
        .iter()
        .filter(|record| record.as_ref().contains(keyword))
        .count() as u64
}

/// Number of records containing at least one of `variants`
pub fn count_any<S, K>(records: &[S], variants: &[K]) -> u64
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    records
        .iter()
        .filter(|record| {
            let text = record.as_ref();
            variants.iter().any(|v| text.contains(v.as_ref()))
        })
        .count() as u64
}

/// Document frequency of each keyword, independently
///
/// Empty `records` gives all-zero counts; empty `keywords` gives an empty
/// table.
pub fn count_keywords<S, K>(records: &[S], keywords: &[K]) -> CountTable
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            (keyword, count_keyword(records, keyword))
        })
        .collect()
}

/// Document frequency of each keyword against a chosen view of the records
pub fn count_keywords_in<K: AsRef<str>>(
    records: &[Record],
    keywords: &[K],
    source: TextSource,
) -> CountTable {
    let table: CountTable = keywords
        .iter()
        .map(|keyword| {
            let keyword = keyword.as_ref();
            let count = records
                .iter()
                .filter(|record| record.contains(keyword, source))
                .count() as u64;
            (keyword, count)
        })
        .collect();

    tracing::debug!(
        source = %source,
        keywords = table.len(),
        records = records.len(),
        "Counted keywords"
    );

    table
}

/// Counts of one keyword under each text view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceComparison {
    pub raw: u64,
    pub normalized: u64,
    pub tokens: u64,
}

/// Count `keyword` against raw text, normalized text and split tokens
///
/// The keyword is used verbatim for all three, so a lowercase keyword will
/// miss capitalized mentions in the raw text.
pub fn compare_sources(records: &[Record], keyword: &str) -> SourceComparison {
    let count = |source| {
        records
            .iter()
            .filter(|record| record.contains(keyword, source))
            .count() as u64
    };

    SourceComparison {
        raw: count(TextSource::Raw),
        normalized: count(TextSource::Normalized),
        tokens: count(TextSource::Tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn record(i: usize, text: &str) -> Record {
        let ts = NaiveDate::from_ymd_opt(2016, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Record::new(i, text, ts)
    }

    #[test]
    fn test_count_keyword_after_normalization() {
        let records: Vec<String> = ["Obama is great", "OBAMA care now", "no mention"]
            .iter()
            .map(|t| normalize(t))
            .collect();

        assert_eq!(count_keyword(&records, "obama"), 2);
    }

    #[test]
    fn test_count_any_counts_each_record_once() {
        let tweets = vec!["uk and britain", "great britain", "france"];
        assert_eq!(count_any(&tweets, &["uk", "britain"]), 2);
        assert_eq!(count_any(&tweets, &[] as &[&str]), 0);
    }

    #[test]
    fn test_document_frequency_not_term_frequency() {
        let records = vec!["obama obama obama", "obama"];
        assert_eq!(count_keyword(&records, "obama"), 2);
    }

    #[test]
    fn test_count_keywords_preserves_input_order() {
        let records = vec!["fake news", "jeb", "jeb and fake news"];
        let table = count_keywords(&records, &["jeb", "fake news", "obama"]);

        let order: Vec<_> = table.iter().map(|e| e.keyword.as_str()).collect();
        assert_eq!(order, vec!["jeb", "fake news", "obama"]);
        assert_eq!(table.get("jeb"), Some(2));
        assert_eq!(table.get("fake news"), Some(2));
        assert_eq!(table.get("obama"), Some(0));
        assert_eq!(table.get("hillary"), None);
    }

    #[test]
    fn test_count_keywords_duplicates_collapse() {
        let records = vec!["crap", "junk"];
        let table = count_keywords(&records, &["crap", "junk", "crap"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("crap"), Some(1));
    }

    #[test]
    fn test_count_keywords_empty_inputs() {
        let none: Vec<&str> = Vec::new();
        let table = count_keywords(&none, &["a", "b"]);
        assert_eq!(table.get("a"), Some(0));
        assert_eq!(table.get("b"), Some(0));

        let no_keywords: [&str; 0] = [];
        assert!(count_keywords(&["a"], &no_keywords).is_empty());
    }

    #[test]
    fn test_top_is_stable() {
        let table: CountTable = vec![("good", 5), ("great", 9), ("super", 5), ("joy", 1)]
            .into_iter()
            .collect();

        let top = table.top(3);
        assert_eq!(
            top,
            vec![
                KeywordCount::new("great", 9),
                KeywordCount::new("good", 5),
                KeywordCount::new("super", 5),
            ]
        );
        assert_eq!(table.total(), 20);
    }

    #[test]
    fn test_compare_sources_diverge() {
        let records = vec![
            record(0, "Obama is weak"),
            record(1, "Repeal obamacare"),
            record(2, "obama, again"),
            record(3, "nothing here"),
        ];

        let cmp = compare_sources(&records, "obama");
        assert_eq!(cmp.raw, 2);
        assert_eq!(cmp.normalized, 3);
        assert_eq!(cmp.tokens, 2);
    }

    #[test]
    fn test_count_keywords_in_raw_source() {
        let records = vec![record(0, "Visiting the UK soon"), record(1, "uk trade")];
        let table = count_keywords_in(&records, &["UK "], TextSource::Raw);
        assert_eq!(table.get("UK "), Some(1));
    }

    proptest! {
        #[test]
        fn prop_single_record_count_is_zero_or_one(t in ".{0,40}", k in "[a-z ]{0,4}") {
            let c = count_keyword(&[t], &k);
            prop_assert!(c == 0 || c == 1);
        }

        #[test]
        fn prop_batched_matches_single(
            records in proptest::collection::vec("[a-c ]{0,12}", 0..20),
            k in "[a-c]{1,3}",
        ) {
            let table = count_keywords(&records, &[k.as_str()]);
            prop_assert_eq!(table.get(&k), Some(count_keyword(&records, &k)));
        }
    }
}

//! Ranking, filtering and bucketing of keyword counts
//!
//! Used for the country table: count every country name, sort by count,
//! drop noise, and discretize counts into fixed bands for map colouring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::keywords::{count_any, count_keywords, CountTable, KeywordCount};
use crate::text::normalize;

/// Canonical keyword -> variants that count as a mention of it
pub type Aliases = BTreeMap<String, Vec<String>>;

/// Fixed count bands, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BucketLabel {
    #[serde(rename = "1-5")]
    UpTo5,
    #[serde(rename = "6-10")]
    UpTo10,
    #[serde(rename = "11-25")]
    UpTo25,
    #[serde(rename = "26-50")]
    UpTo50,
    #[serde(rename = "51-100")]
    UpTo100,
    #[serde(rename = "101-200")]
    UpTo200,
    #[serde(rename = "201-300")]
    UpTo300,
    #[serde(rename = "Over 301")]
    Over300,
}

impl BucketLabel {
    /// All bands in ascending order
    pub const ALL: [BucketLabel; 8] = [
        Self::UpTo5,
        Self::UpTo10,
        Self::UpTo25,
        Self::UpTo50,
        Self::UpTo100,
        Self::UpTo200,
        Self::UpTo300,
        Self::Over300,
    ];

    /// Band for a count
    ///
    /// Each band includes its upper bound. Zero falls in the lowest band and
    /// anything above 300 in the catch-all top band, so every count resolves.
    #[must_use]
    pub fn for_count(count: u64) -> Self {
        match count {
            0..=5 => Self::UpTo5,
            6..=10 => Self::UpTo10,
            11..=25 => Self::UpTo25,
            26..=50 => Self::UpTo50,
            51..=100 => Self::UpTo100,
            101..=200 => Self::UpTo200,
            201..=300 => Self::UpTo300,
            _ => Self::Over300,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpTo5 => "1-5",
            Self::UpTo10 => "6-10",
            Self::UpTo25 => "11-25",
            Self::UpTo50 => "26-50",
            Self::UpTo100 => "51-100",
            Self::UpTo200 => "101-200",
            Self::UpTo300 => "201-300",
            Self::Over300 => "Over 301",
        }
    }
}

impl fmt::Display for BucketLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked keyword with its band
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketedKeyword {
    pub keyword: String,
    pub count: u64,
    pub group: BucketLabel,
}

/// Filters applied to a ranked table before bucketing
///
/// `max_count` exists for over-broad keywords such as the country
/// abbreviation "us", which also matches the pronoun and inflates its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionRules {
    /// Drop keywords that never occur
    pub drop_zero: bool,

    /// Drop keywords whose count is at or above this value
    pub max_count: Option<u64>,

    /// Drop these keywords regardless of count
    pub drop: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            drop_zero: true,
            max_count: None,
            drop: Vec::new(),
        }
    }
}

impl ExclusionRules {
    /// Normalize `drop` entries so they compare equal to normalized keywords
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.drop = self
            .drop
            .iter()
            .map(|keyword| normalize(keyword).trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();
        self
    }

    /// Whether `entry` should be removed
    #[must_use]
    pub fn matches(&self, entry: &KeywordCount) -> bool {
        (self.drop_zero && entry.count == 0)
            || self.max_count.is_some_and(|max| entry.count >= max)
            || self.drop.iter().any(|keyword| *keyword == entry.keyword)
    }
}

/// Sort a count table by count, highest first, ties in input order
#[must_use]
pub fn rank_counts(table: CountTable) -> Vec<KeywordCount> {
    let mut ranked = table.into_entries();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Count every keyword and rank the results
pub fn rank_keywords<S, K>(records: &[S], keywords: &[K]) -> Vec<KeywordCount>
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    rank_counts(count_keywords(records, keywords))
}

/// Normalize canonical names and variants the same way tweet text is
#[must_use]
pub fn normalize_aliases(aliases: &Aliases) -> Aliases {
    let clean = |word: &str| normalize(word).trim().to_string();
    aliases
        .iter()
        .map(|(canonical, variants)| {
            let variants = variants
                .iter()
                .map(|v| clean(v))
                .filter(|v| !v.is_empty())
                .collect();
            (clean(canonical), variants)
        })
        .filter(|(canonical, _)| !canonical.is_empty())
        .collect()
}

/// Count and rank keywords, folding alias variants into their canonical name
///
/// A record counts once for a canonical name when it contains the name or
/// any of its variants. Variants that also appear in `keywords` are merged
/// into the canonical entry instead of being ranked on their own. Canonical
/// names missing from `keywords` are appended after them.
pub fn rank_keywords_with_aliases<S, K>(
    records: &[S],
    keywords: &[K],
    aliases: &Aliases,
) -> Vec<KeywordCount>
where
    S: AsRef<str>,
    K: AsRef<str>,
{
    let is_variant = |keyword: &str| {
        aliases.iter().any(|(canonical, variants)| {
            canonical != keyword && variants.iter().any(|v| v == keyword)
        })
    };

    let mut names: Vec<&str> = keywords
        .iter()
        .map(|k| k.as_ref())
        .filter(|k| !is_variant(*k))
        .collect();
    for canonical in aliases.keys() {
        if !names.contains(&canonical.as_str()) {
            names.push(canonical);
        }
    }

    let table: CountTable = names
        .iter()
        .map(|&name| {
            let mut group = vec![name];
            if let Some(variants) = aliases.get(name) {
                group.extend(variants.iter().map(String::as_str));
            }
            (name, count_any(records, &group))
        })
        .collect();

    tracing::debug!(
        keywords = keywords.len(),
        groups = aliases.len(),
        ranked = table.len(),
        "Counted keywords with aliases"
    );
    rank_counts(table)
}

/// Remove entries matching `predicate`, keeping order
pub fn exclude<F>(ranked: Vec<KeywordCount>, predicate: F) -> Vec<KeywordCount>
where
    F: Fn(&KeywordCount) -> bool,
{
    let before = ranked.len();
    let kept: Vec<_> = ranked.into_iter().filter(|entry| !predicate(entry)).collect();
    tracing::debug!(removed = before - kept.len(), kept = kept.len(), "Applied exclusions");
    kept
}

/// Attach a band to every ranked entry
#[must_use]
pub fn bucket(ranked: &[KeywordCount]) -> Vec<BucketedKeyword> {
    ranked
        .iter()
        .map(|entry| BucketedKeyword {
            keyword: entry.keyword.clone(),
            count: entry.count,
            group: BucketLabel::for_count(entry.count),
        })
        .collect()
}

/// Number of entries in each band, in band order
#[must_use]
pub fn bucket_histogram(bucketed: &[BucketedKeyword]) -> Vec<(BucketLabel, usize)> {
    BucketLabel::ALL
        .iter()
        .map(|&label| {
            let n = bucketed.iter().filter(|entry| entry.group == label).count();
            (label, n)
        })
        .collect()
}

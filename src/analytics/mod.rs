//! Keyword frequency analysis over tweet records
//!
//! Every function here is a pure pass over an in-memory `&[Record]` (or any
//! slice of normalized strings) and returns a new value.

pub mod keywords;
pub mod ranking;
pub mod tagging;
pub mod timeline;

pub use keywords::{
    compare_sources, count_any, count_keyword, count_keywords, count_keywords_in, CountTable,
    KeywordCount, SourceComparison,
};
pub use ranking::{
    bucket, bucket_histogram, exclude, normalize_aliases, rank_counts, rank_keywords,
    rank_keywords_with_aliases, Aliases, BucketLabel, BucketedKeyword, ExclusionRules,
};
pub use tagging::{tag, tag_records, Lexicon, TagSummary, TaggedRecord, Tags};
pub use timeline::{
    counts_by_year, counts_by_year_month, keyword_mentions, year_span, yearly_totals, Mention,
    TimeSeries,
};

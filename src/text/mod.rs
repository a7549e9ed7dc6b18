//! Text normalization and tokenization
//!
//! Tweets are compared by plain substring containment, so every record is
//! normalized once at load time: lowercased, with everything except ASCII
//! letters, digits and whitespace removed.

use regex::Regex;
use std::sync::OnceLock;

/// Lowercase `text` and strip every character that is not `[A-Za-z0-9]` or
/// whitespace.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    static STRIP_RE: OnceLock<Regex> = OnceLock::new();

    let re = STRIP_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9\s]").expect("Invalid regex pattern"));

    re.replace_all(&text.to_lowercase(), "").into_owned()
}

/// Split normalized text on single spaces.
///
/// Runs of spaces produce empty tokens and other whitespace (newlines, tabs)
/// is not a separator, which is why token matching undercounts compared to
/// substring matching.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split(' ').collect()
}

/// Whether any token of `normalized` is exactly `keyword`
pub fn contains_token(normalized: &str, keyword: &str) -> bool {
    normalized.split(' ').any(|token| token == keyword)
}

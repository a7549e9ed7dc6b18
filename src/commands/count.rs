use anyhow::Result;
use std::path::PathBuf;

use tweetlens::analytics::{compare_sources, count_keywords_in, CountTable, SourceComparison};
use tweetlens::config::Config;
use tweetlens::export;
use tweetlens::text::normalize;
use tweetlens::TextSource;

use super::{export_with, load_dataset, resolve_output};

pub fn count(
    config: &Config,
    keywords: Vec<String>,
    source: TextSource,
    top: Option<usize>,
    output: Option<PathBuf>,
) -> Result<()> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| source.prepare_keyword(k))
        .filter(|k| !k.is_empty())
        .collect();

    if keywords.is_empty() {
        println!("No keywords to count.");
        return Ok(());
    }

    let dataset = load_dataset(config)?;
    let table = count_keywords_in(&dataset.records, &keywords, source);

    println!(
        "Keyword counts over {} tweets ({} text)",
        dataset.len(),
        source
    );
    println!("================================");

    let shown = match top {
        Some(n) => table.top(n),
        None => table.iter().cloned().collect(),
    };
    for entry in &shown {
        println!("  {:<20} {:>7}", format!("'{}'", entry.keyword), entry.count);
    }

    if let Some(path) = resolve_output(config, output) {
        let exported: CountTable = shown.into_iter().map(|e| (e.keyword, e.count)).collect();
        export_with(&path, &exported, |p| export::write_counts_csv(p, &exported))?;
    }

    Ok(())
}

const COMPARISON_COLUMNS: [&str; 4] = ["keyword", "raw", "normalized", "tokens"];

#[derive(serde::Serialize)]
struct ComparisonRow {
    keyword: String,
    raw: u64,
    normalized: u64,
    tokens: u64,
}

impl ComparisonRow {
    fn new(keyword: String, counts: SourceComparison) -> Self {
        Self {
            keyword,
            raw: counts.raw,
            normalized: counts.normalized,
            tokens: counts.tokens,
        }
    }
}

pub fn compare(config: &Config, keywords: Vec<String>, output: Option<PathBuf>) -> Result<()> {
    let dataset = load_dataset(config)?;

    let rows: Vec<ComparisonRow> = keywords
        .iter()
        .map(|k| normalize(k))
        .filter(|k| !k.is_empty())
        .map(|keyword| {
            let counts = compare_sources(&dataset.records, &keyword);
            ComparisonRow::new(keyword, counts)
        })
        .collect();

    println!("{:<20} {:>9} {:>11} {:>9}", "keyword", "raw", "normalized", "tokens");
    println!("{}", "-".repeat(52));
    for row in &rows {
        println!(
            "{:<20} {:>9} {:>11} {:>9}",
            row.keyword, row.raw, row.normalized, row.tokens
        );
        if row.tokens < row.normalized {
            tracing::debug!(
                keyword = %row.keyword,
                lost = row.normalized - row.tokens,
                "Token matching misses substring mentions"
            );
        }
    }

    if let Some(path) = resolve_output(config, output) {
        export_with(&path, &rows, |p| export::write_csv(p, &COMPARISON_COLUMNS, &rows))?;
    }

    Ok(())
}

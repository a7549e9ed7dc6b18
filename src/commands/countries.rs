use anyhow::{Context, Result};
use std::path::PathBuf;

use tweetlens::analytics::{
    bucket, bucket_histogram, exclude, normalize_aliases, rank_keywords_with_aliases,
    ExclusionRules,
};
use tweetlens::config::Config;
use tweetlens::dataset::load_country_names;
use tweetlens::export;

use super::{export_with, load_dataset, resolve_output};

/// Command-line overrides for the country table
pub struct CountriesParams {
    pub list: Option<PathBuf>,
    pub drop: Vec<String>,
    pub max_count: Option<u64>,
    pub keep_zero: bool,
    pub rows: usize,
    pub output: Option<PathBuf>,
}

impl CountriesParams {
    /// Merge overrides into the configured exclusion rules
    ///
    /// Every `drop` entry, configured or given on the command line, is
    /// normalized to match the normalized country names.
    fn rules(&self, base: &ExclusionRules) -> ExclusionRules {
        let mut rules = base.clone();
        rules.drop.extend(self.drop.iter().cloned());
        if self.max_count.is_some() {
            rules.max_count = self.max_count;
        }
        if self.keep_zero {
            rules.drop_zero = false;
        }
        rules.normalized()
    }
}

pub fn countries(config: &Config, params: CountriesParams) -> Result<()> {
    let list_path = params
        .list
        .clone()
        .unwrap_or_else(|| config.countries.list_path.clone());
    let names = load_country_names(&list_path, config.countries.prefix_len)
        .with_context(|| format!("Failed to load country list {}", list_path.display()))?;

    if names.is_empty() {
        println!("Country list {} is empty.", list_path.display());
        return Ok(());
    }

    let dataset = load_dataset(config)?;
    let rules = params.rules(&config.countries.exclude);
    let aliases = normalize_aliases(&config.countries.aliases);

    let ranked = rank_keywords_with_aliases(&dataset.records, &names, &aliases);
    let kept = exclude(ranked, |entry| rules.matches(entry));
    let bucketed = bucket(&kept);

    tracing::info!(
        countries = names.len(),
        kept = bucketed.len(),
        "Ranked country mentions"
    );

    println!("Country mentions ({} of {} countries)", bucketed.len(), names.len());
    println!("================================");
    for entry in bucketed.iter().take(params.rows) {
        println!("  {:<24} {:>6}  {}", entry.keyword, entry.count, entry.group);
    }
    if bucketed.len() > params.rows {
        println!("  ... {} more", bucketed.len() - params.rows);
    }

    println!();
    println!("Countries per group:");
    for (label, n) in bucket_histogram(&bucketed) {
        println!("  {:<10} {n}", label.as_str());
    }

    if let Some(path) = resolve_output(config, params.output) {
        export_with(&path, &bucketed, |p| export::write_buckets_csv(p, &bucketed))?;
    }

    Ok(())
}

use anyhow::Result;
use std::path::PathBuf;

use tweetlens::analytics::{tag_records, TagSummary};
use tweetlens::config::Config;
use tweetlens::export;

use super::{export_with, load_dataset, resolve_output};

pub fn tag(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let lexicon = &config.lexicon;
    let dataset = load_dataset(config)?;

    let tagged = tag_records(&dataset.records, &lexicon.positive, &lexicon.negative);
    let summary = TagSummary::from_tagged(&tagged);

    let pct = |n: usize| {
        if summary.total == 0 {
            0.0
        } else {
            n as f64 * 100.0 / summary.total as f64
        }
    };

    println!("Adjective tags over {} tweets", summary.total);
    println!("================================");
    println!("  Positive:      {:>7} ({:.1}%)", summary.positive, pct(summary.positive));
    println!("  Negative:      {:>7} ({:.1}%)", summary.negative, pct(summary.negative));
    println!("  Both:          {:>7} ({:.1}%)", summary.mixed, pct(summary.mixed));
    println!("  Neither:       {:>7} ({:.1}%)", summary.untagged, pct(summary.untagged));

    if let Some(path) = resolve_output(config, output) {
        export_with(&path, &tagged, |p| export::write_tags_csv(p, &tagged))?;
    }

    Ok(())
}

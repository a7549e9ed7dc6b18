use anyhow::Result;
use std::path::PathBuf;

use tweetlens::analytics::timeline::MONTHS;
use tweetlens::analytics::{counts_by_year, counts_by_year_month, keyword_mentions, year_span};
use tweetlens::config::Config;
use tweetlens::export;
use tweetlens::text::normalize;

use super::{export_with, load_dataset, resolve_output};

pub fn timeline(
    config: &Config,
    keyword: &str,
    monthly: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let keyword = normalize(keyword);
    let dataset = load_dataset(config)?;

    let Some(years) = year_span(&dataset.records) else {
        println!("No tweets loaded; nothing to chart.");
        return Ok(());
    };

    println!(
        "Occurrences of \"{keyword}\" over time ({}-{})",
        years.start(),
        years.end()
    );
    println!("================================");

    let output = resolve_output(config, output);

    if monthly {
        let series = counts_by_year_month(&dataset.records, &keyword, years);

        println!("{:<6}{}", "year", MONTHS.map(|m| format!("{m:>6}")).concat());
        for (year, months) in &series {
            let cells: String = months.iter().map(|c| format!("{c:>6}")).collect();
            println!("{year:<6}{cells}");
        }

        if let Some(path) = output {
            export_with(&path, &series, |p| export::write_timeline_csv(p, &series))?;
        }
    } else {
        let counts = counts_by_year(&dataset.records, &keyword, years);

        for (year, count) in &counts {
            println!("  {year}: {count}");
        }

        if let Some(path) = output {
            export_with(&path, &counts, |p| export::write_yearly_csv(p, &counts))?;
        }
    }

    Ok(())
}

pub fn mentions(config: &Config, keyword: &str, output: Option<PathBuf>) -> Result<()> {
    const PREVIEW: usize = 10;

    let keyword = normalize(keyword);
    let dataset = load_dataset(config)?;
    let found = keyword_mentions(&dataset.records, &keyword);

    println!("\"{keyword}\" appears in {} tweets", found.len());
    for mention in found.iter().take(PREVIEW) {
        println!("  #{:<7} {}", mention.index, mention.date);
    }
    if found.len() > PREVIEW {
        println!("  ... and {} more", found.len() - PREVIEW);
    }

    if let Some(path) = resolve_output(config, output) {
        export_with(&path, &found, |p| export::write_mentions_csv(p, &found))?;
    }

    Ok(())
}

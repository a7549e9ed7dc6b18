use anyhow::Result;

use tweetlens::analytics::year_span;
use tweetlens::config::Config;

use super::load_dataset;

pub fn summary(config: &Config) -> Result<()> {
    let dataset = load_dataset(config)?;
    let summary = dataset.summary();

    println!("Dataset: {}", config.input.tweets_path.display());
    println!("================================");
    println!("  Tweets loaded:  {}", summary.records);
    println!("  Rows dropped:   {}", summary.dropped);

    match (summary.first, summary.last) {
        (Some(first), Some(last)) => {
            println!("  First tweet:    {first}");
            println!("  Last tweet:     {last}");
            if let Some(years) = year_span(&dataset.records) {
                let n = years.end() - years.start() + 1;
                println!("  Years covered:  {}-{} ({n} years)", years.start(), years.end());
            }
        }
        _ => println!("  No tweets with a readable date."),
    }

    Ok(())
}

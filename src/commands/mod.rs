pub mod count;
pub mod countries;
pub mod summary;
pub mod tag;
pub mod timeline;

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

use tweetlens::config::Config;
use tweetlens::dataset::{self, Dataset};
use tweetlens::export;

// Re-export command functions for convenience
pub use count::{compare, count};
pub use countries::{countries, CountriesParams};
pub use summary::summary;
pub use tag::tag;
pub use timeline::{mentions, timeline};

/// Load the configured tweet file
fn load_dataset(config: &Config) -> Result<Dataset> {
    let path = &config.input.tweets_path;
    dataset::load_records(path, &config.input)
        .with_context(|| format!("Failed to load tweets from {}", path.display()))
}

/// Resolve an `--output` argument against the configured output directory
fn resolve_output(config: &Config, output: Option<PathBuf>) -> Option<PathBuf> {
    output.map(|path| config.output_path(path))
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Write `value` as JSON, or fall back to `write_csv` for any other extension
fn export_with<T, F>(path: &Path, value: &T, write_csv: F) -> Result<()>
where
    T: ?Sized + Serialize,
    F: FnOnce(&Path) -> tweetlens::error::Result<usize>,
{
    let written = if is_json(path) {
        export::write_json(path, value)
    } else {
        write_csv(path).map(|_| ())
    };
    written.with_context(|| format!("Failed to export to {}", path.display()))?;

    println!("Exported to {}", path.display());
    tracing::info!(path = %path.display(), "Export complete");
    Ok(())
}

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tweetlens::config::Config;
use tweetlens::TextSource;

mod commands;

#[derive(Parser)]
#[command(
    name = "tweetlens",
    version,
    about = "Keyword, country and adjective frequency analysis over tweet archives",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file (defaults to environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Tweet CSV file, overriding the configured path
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceArg {
    /// Original tweet text
    Raw,
    /// Lowercased, punctuation-free text
    Normalized,
    /// Whole tokens of the normalized text
    Tokens,
}

impl From<SourceArg> for TextSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Raw => TextSource::Raw,
            SourceArg::Normalized => TextSource::Normalized,
            SourceArg::Tokens => TextSource::Tokens,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LexiconArg {
    Positive,
    Negative,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how many tweets were loaded and the date range they cover
    Summary,

    /// Count tweets mentioning each keyword
    Count {
        /// Keyword to count (repeatable)
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Also count every word of the configured lexicon side
        #[arg(long, value_enum)]
        lexicon: Option<LexiconArg>,

        /// Text view to search
        #[arg(short, long, value_enum, default_value = "normalized")]
        source: SourceArg,

        /// Only show the N most frequent keywords
        #[arg(short, long)]
        top: Option<usize>,

        /// Export file (.csv or .json), relative to the output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compare keyword counts over raw, normalized and tokenized text
    Compare {
        /// Keyword to compare (repeatable)
        #[arg(short, long = "keyword", required = true)]
        keywords: Vec<String>,

        /// Export file (.json or .csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Count a keyword per year (or per month) across the dataset's span
    Timeline {
        /// Keyword to track
        #[arg(short, long)]
        keyword: String,

        /// Break each year down by month
        #[arg(short, long, default_value = "false")]
        monthly: bool,

        /// Export file (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rank and bucket country mentions
    Countries {
        /// Country word list, overriding the configured path
        #[arg(short, long)]
        list: Option<PathBuf>,

        /// Drop a country from the table (repeatable)
        #[arg(long)]
        drop: Vec<String>,

        /// Drop countries with a count at or above this value
        #[arg(long)]
        max_count: Option<u64>,

        /// Keep countries that are never mentioned
        #[arg(long, default_value = "false")]
        keep_zero: bool,

        /// Show this many ranked rows
        #[arg(short, long, default_value = "25")]
        rows: usize,

        /// Export file (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Tag tweets containing positive and negative adjectives
    Tag {
        /// Export file (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the row index and date of every tweet mentioning a keyword
    Mentions {
        /// Keyword to look up
        #[arg(short, long)]
        keyword: String,

        /// Export file (.csv or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env()?,
    };
    if let Some(input) = cli.input {
        config.input.tweets_path = input;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    config.validate()?;

    // Initialize tracing/logging
    setup_tracing(&config.logging.format, &config.logging.level, cli.verbose)?;

    tracing::info!(input = %config.input.tweets_path.display(), "tweetlens starting");

    match cli.command {
        Commands::Summary => {
            commands::summary(&config)?;
        }

        Commands::Count {
            keywords,
            lexicon,
            source,
            top,
            output,
        } => {
            let mut keywords = keywords;
            match lexicon {
                Some(LexiconArg::Positive) => keywords.extend(config.lexicon.positive.clone()),
                Some(LexiconArg::Negative) => keywords.extend(config.lexicon.negative.clone()),
                None => {}
            }
            tracing::info!(
                keywords = keywords.len(),
                source = %TextSource::from(source),
                top = ?top,
                "Starting count command"
            );
            commands::count(&config, keywords, source.into(), top, output)?;
        }

        Commands::Compare { keywords, output } => {
            tracing::info!(keywords = keywords.len(), "Starting compare command");
            commands::compare(&config, keywords, output)?;
        }

        Commands::Timeline {
            keyword,
            monthly,
            output,
        } => {
            tracing::info!(keyword = %keyword, monthly = %monthly, "Starting timeline command");
            commands::timeline(&config, &keyword, monthly, output)?;
        }

        Commands::Countries {
            list,
            drop,
            max_count,
            keep_zero,
            rows,
            output,
        } => {
            tracing::info!(
                list = ?list,
                max_count = ?max_count,
                keep_zero = %keep_zero,
                "Starting countries command"
            );
            let params = commands::CountriesParams {
                list,
                drop,
                max_count,
                keep_zero,
                rows,
                output,
            };
            commands::countries(&config, params)?;
        }

        Commands::Tag { output } => {
            tracing::info!("Starting tag command");
            commands::tag(&config, output)?;
        }

        Commands::Mentions { keyword, output } => {
            tracing::info!(keyword = %keyword, "Starting mentions command");
            commands::mentions(&config, &keyword, output)?;
        }
    }

    tracing::info!("tweetlens completed successfully");
    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("tweetlens=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new(format!("tweetlens={level},warn"))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

//! Unified error handling for the tweetlens crate
//!
//! Library functions return [`Result`]. The command layer wraps these in
//! `anyhow` with extra context before they reach the user.
//!
//! Row-level problems (a tweet with no text, an unparseable date) are not
//! errors at all: the loader drops those rows and counts them. Everything
//! that does surface here aborts the current command.

use std::io;
use thiserror::Error;

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Input file shape problems (missing columns, unreadable rows)
    Input,
    /// Parsing and deserialization errors
    Parsing,
    /// Filesystem errors while reading or exporting
    Storage,
    /// Configuration and validation errors
    Config,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    /// Short human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "input error",
            Self::Parsing => "parse error",
            Self::Storage => "storage error",
            Self::Config => "config error",
            Self::Other => "error",
        }
    }
}

/// Unified error type for the tweetlens crate
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV reader/writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is absent from the input header
    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: String },

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a missing-column error
    pub fn missing_column(column: impl Into<String>, path: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            path: path.into(),
        }
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get the error category for handling strategies
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) => ErrorCategory::Storage,
            Self::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(_) => ErrorCategory::Storage,
                csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::Utf8 { .. } => {
                    ErrorCategory::Parsing
                }
                _ => ErrorCategory::Input,
            },
            Self::Json(_) => ErrorCategory::Parsing,
            Self::MissingColumn { .. } => ErrorCategory::Input,
            Self::Config(_) => ErrorCategory::Config,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }

    /// Whether a retry of the same command could succeed without changes
    /// to the input or configuration
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            Self::Json(_) | Self::MissingColumn { .. } | Self::Config(_) | Self::Other { .. } => {
                false
            }
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;

//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating rule tables.
///
/// Any of these is a defect in the data files and is fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {table}: {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("keyword rule '{rule}' has an empty word")]
    EmptyKeyword { rule: String },

    #[error("keyword rule '{rule}' has non-lowercase word '{word}'")]
    UppercaseKeyword { rule: String, word: String },

    #[error("date span '{0}' is missing the '|' delimiter")]
    MissingDelimiter(String),

    #[error("invalid date '{value}' in span '{span}' (expected YYYY-MM-DD or {{year}}-MM-DD)")]
    InvalidDate { span: String, value: String },

    #[error("date span '{0}' ends before it starts")]
    InvertedSpan(String),

    #[error("invalid shift ending time '{0}' (expected HH:MM)")]
    InvalidTime(String),

    #[error("snack shop ranking is empty")]
    EmptyRanking,
}

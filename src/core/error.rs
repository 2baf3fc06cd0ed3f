//! Error types for bridge-triage
//!
//! Provides error handling for ingestion, configuration and argument
//! validation, plus fuzzy highway suggestions for empty query results.

use std::fmt;

use strsim::{jaro_winkler, normalized_levenshtein};

/// Minimum hybrid score for a highway designation to be suggested
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// Suggest the closest known highway designation for a query that matched nothing.
///
/// Scores combine Jaro-Winkler (70%) and normalized Levenshtein (30%) on
/// lowercased input. Returns `None` on an exact match or when nothing scores
/// above the threshold.
pub fn suggest_highway<'a, I>(query: &str, known: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_lower = query.to_lowercase();
    let mut best: Option<(&str, f64)> = None;

    for candidate in known {
        if candidate == query {
            return None;
        }

        let candidate_lower = candidate.to_lowercase();
        let score = 0.7 * jaro_winkler(&query_lower, &candidate_lower)
            + 0.3 * normalized_levenshtein(&query_lower, &candidate_lower);

        if score >= SUGGESTION_THRESHOLD && best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.map(|(name, _)| name.to_string())
}

/// Main error type for bridge-triage operations
#[derive(Debug)]
pub enum Error {
    /// A raw data row could not be normalized into a bridge record
    InvalidRecord { row: usize, reason: String },

    /// The table violates the dense identity invariant
    InconsistentTable(String),

    /// CSV reader failure
    CsvError(csv::Error),

    /// Configuration file could not be decoded
    ConfigError(String),

    /// File I/O error
    IoError(std::io::Error),

    /// Invalid parameters
    InvalidInput(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRecord { row, reason } => {
                write!(f, "Invalid bridge record at row {row}: {reason}")
            }
            Error::InconsistentTable(msg) => {
                write!(f, "Inconsistent bridge table: {msg}")
            }
            Error::CsvError(err) => {
                write!(f, "CSV error: {err}")
            }
            Error::ConfigError(msg) => {
                write!(f, "Configuration error: {msg}")
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {err}")
            }
            Error::InvalidInput(msg) => {
                write!(f, "Invalid input: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            Error::CsvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::CsvError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

/// Convenience result type for bridge-triage operations
pub type Result<T> = std::result::Result<T, Error>;

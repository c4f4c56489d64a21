use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by ingestion and cleaning.
///
/// The cleaning operations treat their error conditions as contract
/// violations: they are detected before the first write, never retried, and
/// a failed call leaves the table as it found it.
#[derive(Debug, Error)]
pub enum Error {
    /// The referenced column is absent from the table or is not numeric.
    #[error("column {name:?} is missing or not numeric")]
    InvalidColumn {
        /// The name the caller asked for.
        name: String,
    },

    /// The table has no rows, so no statistic is defined over it.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// Too few present values to compute quartiles for the column.
    #[error("column {name:?} has {got} present values, quartiles need at least {need}")]
    InsufficientData {
        /// The column that was about to be clamped.
        name: String,
        /// How many present values it holds.
        got: usize,
        /// How many the quartiles need.
        need: usize,
    },

    /// Failed to open or create a file.
    #[error("failed to access file {path:?}")]
    Access {
        /// The file in question.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        inner: io::Error,
    },

    /// The source file could not be parsed as delimited records.
    #[error("malformed delimited data in {path:?}")]
    Malformed {
        /// The file in question.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        inner: csv::Error,
    },

    /// Encoding or decoding a report failed.
    #[error("failed to encode or decode reports")]
    Report(#[from] serde_json::Error),
}

/// Short-hand for a result carrying a fenceline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

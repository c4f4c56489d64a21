//! Persistable summaries of a cleaning run.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What [`clamp_outliers`](crate::clamp_outliers) did to one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampReport {
    /// The column the fences were computed for.
    pub column: String,
    /// Lower fence: `Q1 - 1.5 * IQR`.
    pub lower: f64,
    /// Upper fence: `Q3 + 1.5 * IQR`.
    pub upper: f64,
    /// Values raised to the lower fence.
    pub clamped_low: usize,
    /// Values lowered to the upper fence.
    pub clamped_high: usize,
}

impl ClampReport {
    /// Total number of values the clamp changed.
    pub fn clamped(&self) -> usize {
        self.clamped_low + self.clamped_high
    }
}

/// Saves a run's reports to `path` as JSON.
///
/// # Errors
///
/// `Access` when the file cannot be created, `Report` when encoding fails.
pub fn save_reports(path: impl AsRef<Path>, reports: &[ClampReport]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|inner| Error::Access {
        path: path.to_owned(),
        inner,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), reports)?;

    Ok(())
}

/// Loads the reports written by [`save_reports`].
///
/// # Errors
///
/// `Access` when the file cannot be opened, `Report` when decoding fails.
pub fn load_reports(path: impl AsRef<Path>) -> Result<Vec<ClampReport>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|inner| Error::Access {
        path: path.to_owned(),
        inner,
    })?;

    Ok(serde_json::from_reader(BufReader::new(file))?)
}

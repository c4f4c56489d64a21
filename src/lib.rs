//! A statistics-driven outlier clamping library for tabular data.
//!
//! `fenceline` loads a column subset of a delimited data set into an
//! in-memory [`Table`] and cleans it with an outlier-bounded correlation
//! selector: the numeric columns are ranked by Pearson correlation against
//! a target column, and each of the best correlated ones is clamped to its
//! interquartile fences, in place.
//!
//! ```no_run
//! use fenceline::table::reader::{read_csv, EMISSION_COLUMNS};
//! use fenceline::clean_pipeline;
//!
//! # fn main() -> fenceline::Result<()> {
//! let mut table = read_csv("Data_CO.csv", EMISSION_COLUMNS)?;
//! let reports = clean_pipeline(&mut table, "WLTP CO2", 4)?;
//! for report in &reports {
//!     println!("{}: {} values clamped", report.column, report.clamped());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The statistics the selector is built on (percentiles by linear
//! interpolation, Tukey fences, the two-sample t statistic, Pearson
//! correlation) live in [`stats`] and can be used on their own.

#![warn(missing_docs)]
#![warn(bare_trait_objects)]

pub mod pipeline;
pub mod report;
pub mod stats;
pub mod table;

mod error;

pub use crate::error::{Error, Result};
pub use crate::pipeline::{clamp_outliers, clean_pipeline, rank_correlated_columns};
pub use crate::report::ClampReport;
pub use crate::table::{Column, Table};

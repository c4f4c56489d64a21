//! The outlier-bounded correlation selector.
//!
//! A two-step cleaning transform over a [`Table`]: rank the numeric
//! columns by Pearson correlation against a target column, then clamp each
//! of the top-ranked columns to its interquartile fences, in place. The
//! steps are usable on their own ([`rank_correlated_columns`],
//! [`clamp_outliers`]) or composed ([`clean_pipeline`]).

use log::debug;

use crate::error::{Error, Result};
use crate::report::ClampReport;
use crate::stats::bivariate::Data;
use crate::stats::univariate::outliers::tukey::Fences;
use crate::stats::univariate::Sample;
use crate::table::Table;

/// Quartiles need at least this many present values to be meaningful.
pub const MIN_QUARTILE_VALUES: usize = 4;

/// Ranks every other numeric column by its Pearson correlation with
/// `target` and returns the first `min(top_k, available)` names, strongest
/// positive correlation first.
///
/// Each coefficient is computed over the rows where both the column and
/// the target are present. Columns with an undefined coefficient (constant
/// values, or fewer than two complete pairs) are left out of the ranking.
/// Equal coefficients keep the table's column order.
///
/// Ranking is by *signed* coefficient, descending, so strongly negatively
/// correlated columns sort last rather than among the leaders.
///
/// # Errors
///
/// `InvalidColumn` when `target` is absent or not numeric, `EmptyDataset`
/// when the table has no rows.
pub fn rank_correlated_columns(table: &Table, target: &str, top_k: usize) -> Result<Vec<String>> {
    let target_cells = table.numeric(target)?;
    if table.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut ranking: Vec<(&str, f64)> = Vec::new();
    for (name, cells) in table.numeric_columns() {
        if name == target {
            continue;
        }
        if let Some(r) = pairwise_pearson(target_cells, cells) {
            ranking.push((name, r));
        } else {
            debug!("column {:?} has no defined correlation with {:?}", name, target);
        }
    }

    // Stable sort: equal coefficients keep insertion order.
    ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranking.truncate(top_k);

    Ok(ranking.into_iter().map(|(name, _)| name.to_owned()).collect())
}

/// Pearson over the rows where both cells are present. `None` when fewer
/// than two such rows exist or the coefficient is undefined.
fn pairwise_pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let mut x = Vec::with_capacity(xs.len());
    let mut y = Vec::with_capacity(ys.len());
    for (a, b) in xs.iter().zip(ys) {
        if let (Some(a), Some(b)) = (a, b) {
            if !a.is_nan() && !b.is_nan() {
                x.push(*a);
                y.push(*b);
            }
        }
    }

    if x.len() < 2 {
        return None;
    }

    Data::new(&x, &y).pearson()
}

/// Clamps every value of `column` to the column's interquartile fences, in
/// place: values strictly above the upper fence become the upper fence,
/// values strictly below the lower fence become the lower fence, and
/// everything inside the closed interval is untouched. Missing cells stay
/// missing.
///
/// The quartiles are computed from the column's present values by linear
/// interpolation between order statistics; the fences are
/// `Q1 - 1.5 * IQR` and `Q3 + 1.5 * IQR`.
///
/// # Errors
///
/// `InvalidColumn` when `column` is absent or not numeric, `EmptyDataset`
/// when the table has no rows, `InsufficientData` when fewer than
/// [`MIN_QUARTILE_VALUES`] values are present. Every precondition is
/// checked before the first write, so a failed call leaves the table
/// unchanged.
pub fn clamp_outliers(table: &mut Table, column: &str) -> Result<ClampReport> {
    let present = table.numeric_present(column)?;
    if table.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if present.len() < MIN_QUARTILE_VALUES {
        return Err(Error::InsufficientData {
            name: column.to_owned(),
            got: present.len(),
            need: MIN_QUARTILE_VALUES,
        });
    }

    let fences = Fences::of(Sample::new(&present));

    let mut clamped_low = 0;
    let mut clamped_high = 0;
    for cell in table.numeric_mut(column)?.iter_mut() {
        if let Some(value) = cell {
            if *value > fences.upper {
                clamped_high += 1;
            } else if *value < fences.lower {
                clamped_low += 1;
            }
            *value = fences.clamp(*value);
        }
    }

    debug!(
        "clamped {:?} to [{}, {}]: {} low, {} high",
        column, fences.lower, fences.upper, clamped_low, clamped_high
    );

    Ok(ClampReport {
        column: column.to_owned(),
        lower: fences.lower,
        upper: fences.upper,
        clamped_low,
        clamped_high,
    })
}

/// Runs the full cleaning pass: ranks the numeric columns against `target`
/// and clamps each of the `top_k` best correlated ones, in ranked order.
/// Returns one report per clamped column.
///
/// Re-running the pipeline over its own output changes nothing: clamping
/// only ever moves values inward, so the second pass finds every value
/// already inside its fences.
///
/// # Errors
///
/// Whatever [`rank_correlated_columns`] and [`clamp_outliers`] report.
/// Columns already clamped before a later column fails stay clamped; there
/// is no cross-column rollback.
pub fn clean_pipeline(table: &mut Table, target: &str, top_k: usize) -> Result<Vec<ClampReport>> {
    let selected = rank_correlated_columns(table, target, top_k)?;
    debug!("cleaning {:?} against {:?}", selected, target);

    let mut reports = Vec::with_capacity(selected.len());
    for column in &selected {
        reports.push(clamp_outliers(table, column)?);
    }

    Ok(reports)
}

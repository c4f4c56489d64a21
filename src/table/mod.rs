//! The in-memory table the cleaning operations work on.
//!
//! A [`Table`] is an ordered collection of uniquely named, equally long
//! columns. Row order is insertion order and every operation in this crate
//! preserves it: cleaning mutates cells but never adds, removes or
//! reorders rows.

pub mod reader;

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A single column of cells; `None` marks a missing cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Column {
    /// Floating point cells.
    Numeric(Vec<Option<f64>>),
    /// Free-form text cells.
    Categorical(Vec<Option<String>>),
}

impl Column {
    /// Number of cells, missing ones included.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(cells) => cells.len(),
            Column::Categorical(cells) => cells.len(),
        }
    }

    /// Whether the column holds no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the column holds numeric cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }
}

/// An ordered collection of uniquely named, equally long columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    columns: Vec<(String, Column)>,
    rows: usize,
}

impl Table {
    /// Creates a table with no columns.
    pub fn new() -> Table {
        Table::default()
    }

    /// Appends a named column.
    ///
    /// # Panics
    ///
    /// Panics if a column with the same name already exists, or if the
    /// column's length differs from the table's row count.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) {
        let name = name.into();

        assert!(
            self.columns.iter().all(|(existing, _)| *existing != name),
            "duplicate column {:?}",
            name
        );
        if self.columns.is_empty() {
            self.rows = column.len();
        }
        assert_eq!(
            column.len(),
            self.rows,
            "column {:?} does not match the table's row count",
            name
        );

        self.columns.push((name, column));
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks a column up by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
    }

    /// The numeric columns and their cells, in insertion order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.columns.iter().filter_map(|(name, column)| match column {
            Column::Numeric(cells) => Some((name.as_str(), cells.as_slice())),
            Column::Categorical(_) => None,
        })
    }

    /// The cells of a numeric column.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` when the column is absent or categorical.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>]> {
        match self.column(name) {
            Some(Column::Numeric(cells)) => Ok(cells),
            _ => Err(Error::InvalidColumn {
                name: name.to_owned(),
            }),
        }
    }

    /// The cells of a numeric column, mutably.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` when the column is absent or categorical.
    pub fn numeric_mut(&mut self, name: &str) -> Result<&mut [Option<f64>]> {
        match self
            .columns
            .iter_mut()
            .find(|(existing, _)| existing == name)
        {
            Some((_, Column::Numeric(cells))) => Ok(cells),
            _ => Err(Error::InvalidColumn {
                name: name.to_owned(),
            }),
        }
    }

    /// The present (non-missing) values of a numeric column, in row order.
    /// A `NaN` cell counts as missing.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` when the column is absent or categorical.
    pub fn numeric_present(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self
            .numeric(name)?
            .iter()
            .filter_map(|cell| *cell)
            .filter(|value| !value.is_nan())
            .collect())
    }

    /// Occurrence counts of the distinct values of a categorical column,
    /// most frequent first; equally frequent values stay in value order.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` when the column is absent or numeric.
    pub fn value_counts(&self, name: &str) -> Result<Vec<(String, usize)>> {
        let cells = match self.column(name) {
            Some(Column::Categorical(cells)) => cells,
            _ => {
                return Err(Error::InvalidColumn {
                    name: name.to_owned(),
                })
            }
        };

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for cell in cells.iter().flatten() {
            *counts.entry(cell).or_insert(0) += 1;
        }

        let mut counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(value, count)| (value.to_owned(), count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(counts)
    }

    /// Partitions the present values of numeric `value_col` by the distinct
    /// values of categorical `by_col`. Rows where either cell is missing
    /// are skipped.
    ///
    /// # Errors
    ///
    /// `InvalidColumn` when either column is absent or of the wrong kind.
    pub fn group_numeric(
        &self,
        value_col: &str,
        by_col: &str,
    ) -> Result<BTreeMap<String, Vec<f64>>> {
        let values = self.numeric(value_col)?;
        let keys = match self.column(by_col) {
            Some(Column::Categorical(cells)) => cells,
            _ => {
                return Err(Error::InvalidColumn {
                    name: by_col.to_owned(),
                })
            }
        };

        let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
        for (key, value) in keys.iter().zip(values) {
            if let (Some(key), Some(value)) = (key, value) {
                groups.entry(key.clone()).or_default().push(*value);
            }
        }

        Ok(groups)
    }
}

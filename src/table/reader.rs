//! CSV ingestion.
//!
//! Reads a named column subset of a delimited file into a [`Table`],
//! inferring each column as numeric or categorical from its cells. Only
//! the requested columns are validated; the rest of the file is ignored.

use std::fs::File;
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::table::{Column, Table};

/// The column subset of the vehicle emissions data that the cleaning
/// analysis locks before doing anything else.
pub const EMISSION_COLUMNS: &[&str] = &[
    "Manufacturer",
    "Model",
    "Description",
    "Transmission",
    "Manual or Automatic",
    "Engine Capacity",
    "Fuel Type",
    "Powertrain",
    "Emissions CO [mg/km]",
    "Emissions NOx [mg/km]",
    "Date of change",
    "THC Emissions [mg/km]",
    "THC + NOx Emissions [mg/km]",
    "WLTP CO2",
    "Noise Level dB(A)",
];

/// Reads the `columns` of the delimited file at `path` into a [`Table`].
///
/// A column whose non-empty cells all parse as floats becomes
/// [`Column::Numeric`]; anything else is kept as text. Empty cells and the
/// literal `NaN` are missing cells. The file's row order is preserved.
///
/// # Errors
///
/// `InvalidColumn` when a requested column is not in the header, `Access`
/// when the file cannot be opened, `Malformed` when it does not parse as
/// delimited records.
pub fn read_csv(path: impl AsRef<Path>, columns: &[&str]) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|inner| Error::Access {
        path: path.to_owned(),
        inner,
    })?;
    let mut reader = csv::Reader::from_reader(file);

    let malformed = |inner| Error::Malformed {
        path: path.to_owned(),
        inner,
    };

    let header = reader.headers().map_err(malformed)?.clone();
    let mut indices = Vec::with_capacity(columns.len());
    for &name in columns {
        let index = header
            .iter()
            .position(|field| field == name)
            .ok_or_else(|| Error::InvalidColumn {
                name: name.to_owned(),
            })?;
        indices.push(index);
    }

    let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); columns.len()];
    for record in reader.records() {
        let record = record.map_err(malformed)?;
        for (cells, &index) in raw.iter_mut().zip(&indices) {
            cells.push(parse_cell(record.get(index)));
        }
    }

    let mut table = Table::new();
    for (&name, cells) in columns.iter().zip(raw) {
        let column = infer_column(cells);
        trace!(
            "column {:?} read as {}",
            name,
            if column.is_numeric() {
                "numeric"
            } else {
                "categorical"
            }
        );
        table.push_column(name, column);
    }

    debug!(
        "read {} rows x {} columns from {:?}",
        table.rows(),
        columns.len(),
        path
    );

    Ok(table)
}

fn parse_cell(cell: Option<&str>) -> Option<String> {
    match cell.map(str::trim) {
        None | Some("") | Some("NaN") | Some("nan") => None,
        Some(text) => Some(text.to_owned()),
    }
}

/// A column is numeric when it has at least one present cell and every
/// present cell parses as a float.
fn infer_column(cells: Vec<Option<String>>) -> Column {
    let mut present = cells.iter().flatten().peekable();
    let numeric = present.peek().is_some() && present.all(|cell| cell.parse::<f64>().is_ok());

    if numeric {
        Column::Numeric(
            cells
                .into_iter()
                // spellings of NaN that parse_cell does not catch ("NAN",
                // "+nan") still come back as missing, never as a NaN cell
                .map(|cell| {
                    cell.and_then(|text| text.parse().ok())
                        .filter(|value: &f64| !value.is_nan())
                })
                .collect(),
        )
    } else {
        Column::Categorical(cells)
    }
}

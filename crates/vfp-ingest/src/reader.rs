//! Annotation TSV reader.
//!
//! Reads a tab-separated annotation table into a DataFrame. The
//! annotator writes `.` for absent values; those become null. Columns
//! whose every non-null cell parses as a number are loaded as Float64,
//! everything else stays textual and is left to the transformers.

use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::*;
use tracing::info;
use vfp_common::parse_f64;

use crate::error::{IngestError, Result};

const MISSING_MARKER: &str = ".";

/// Read a tab-separated annotation file into a DataFrame.
pub fn read_annotations(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(false)
        .from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (column, value) in cells.iter_mut().zip(record.iter()) {
            let value = value.trim();
            if value.is_empty() || value == MISSING_MARKER {
                column.push(None);
            } else {
                column.push(Some(value.to_string()));
            }
        }
    }
    if cells.first().is_none_or(Vec::is_empty) {
        return Err(IngestError::EmptyInput);
    }

    let series: Vec<Column> = headers
        .iter()
        .zip(cells)
        .map(|(name, column)| build_series(name, column).into())
        .collect();
    let df = DataFrame::new(series)?;
    info!(
        rows = df.height(),
        columns = df.width(),
        path = %path.display(),
        "loaded annotation file"
    );
    Ok(df)
}

/// Numeric column when every present cell parses, textual otherwise.
fn build_series(name: &str, cells: Vec<Option<String>>) -> Series {
    let all_numeric = cells
        .iter()
        .flatten()
        .all(|value| parse_f64(value).is_some());
    let has_values = cells.iter().any(Option::is_some);
    if all_numeric && has_values {
        let values: Vec<Option<f64>> = cells
            .iter()
            .map(|cell| cell.as_deref().and_then(parse_f64))
            .collect();
        Series::new(name.into(), values)
    } else {
        Series::new(name.into(), cells)
    }
}

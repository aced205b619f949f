//! Tab-separated result export.

use std::path::Path;

use csv::WriterBuilder;
use polars::prelude::*;
use tracing::info;
use vfp_common::any_to_string;

use crate::error::Result;

/// Write a DataFrame as a tab-separated file. Null cells become empty
/// fields; floats are written without trailing zeros.
pub fn write_tsv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    writer.write_record(&names)?;

    let series: Vec<&Series> = df
        .get_columns()
        .iter()
        .map(Column::as_materialized_series)
        .collect();
    for row in 0..df.height() {
        let record: Vec<String> = series
            .iter()
            .map(|column| any_to_string(column.get(row).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    info!(rows = df.height(), path = %path.display(), "wrote results");
    Ok(())
}

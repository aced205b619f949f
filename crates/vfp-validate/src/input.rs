//! Post-parse dataset sanity checks.
//!
//! Run right after the annotation TSV is loaded, before any transform
//! pass. All checks here are fatal: a dataset that fails them cannot
//! produce meaningful features.

use polars::prelude::DataFrame;

use vfp_model::columns;

use crate::error::{Result, ValidationError};

/// A parsed annotation frame must at least carry the four identity
/// columns; fewer total columns means the header was not recognized.
pub fn validate_min_columns(df: &DataFrame) -> Result<()> {
    if df.width() < 4 {
        return Err(ValidationError::NotEnoughColumns);
    }
    Ok(())
}

/// Check that the identity columns plus any caller-required annotation
/// columns are present.
pub fn validate_required_columns(df: &DataFrame, additional: &[&str]) -> Result<()> {
    let mut required: Vec<&str> = vec![columns::CHR, columns::POS, columns::REF, columns::ALT];
    for feature in additional {
        if !required.contains(feature) {
            required.push(feature);
        }
    }

    let missing: Vec<&str> = required
        .into_iter()
        .filter(|name| df.column(name).is_err())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing.join(", ")));
    }
    Ok(())
}

/// Chromosome and position must be gapless; a null in either makes the
/// row unidentifiable.
pub fn validate_chrom_pos(df: &DataFrame) -> Result<()> {
    for name in [columns::CHR, columns::POS] {
        let column = df
            .column(name)
            .map_err(|_| ValidationError::MissingColumns(name.to_string()))?;
        if column.null_count() > 0 {
            return Err(ValidationError::IncompleteColumn(name.to_string()));
        }
    }
    Ok(())
}

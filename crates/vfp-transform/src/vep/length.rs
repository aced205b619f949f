//! Allele length difference.

use polars::prelude::*;
use vfp_model::columns;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

const OUTPUT: &str = "Length";

/// Absolute length difference between reference and alternate alleles.
/// Shares the `REF` input column with the type classifier, so the
/// column must stay in place.
pub struct Length;

impl Transformer for Length {
    fn name(&self) -> &str {
        columns::REF
    }

    fn drop_input(&self) -> bool {
        false
    }

    fn columns(&self) -> Vec<String> {
        vec![OUTPUT.to_string()]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let references = string_cells(df, columns::REF)?;
        let alternates = string_cells(df, columns::ALT)?;
        let lengths: Vec<Option<f64>> = references
            .iter()
            .zip(&alternates)
            .map(|(reference, alternate)| match (reference, alternate) {
                (Some(r), Some(a)) => Some((r.len() as f64 - a.len() as f64).abs()),
                _ => None,
            })
            .collect();
        df.with_column(Series::new(OUTPUT.into(), lengths))?;
        Ok(())
    }
}

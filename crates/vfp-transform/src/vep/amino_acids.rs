//! Amino-acid change splitter.
//!
//! The annotator reports an amino-acid change as `old/new`. A missing
//! `new` side means no change, so it is filled with the `old` side.

use polars::prelude::*;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

pub struct AminoAcids;

impl Transformer for AminoAcids {
    fn name(&self) -> &str {
        "Amino_acids"
    }

    fn columns(&self) -> Vec<String> {
        vec!["oAA".to_string(), "nAA".to_string()]
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.name())?;
        let mut old_values: Vec<Option<String>> = Vec::with_capacity(cells.len());
        let mut new_values: Vec<Option<String>> = Vec::with_capacity(cells.len());
        for cell in &cells {
            match cell.as_deref() {
                Some(value) => {
                    let (old, new) = match value.split_once('/') {
                        Some((old, new)) if !new.is_empty() => (old, new),
                        Some((old, _)) => (old, old),
                        None => (value, value),
                    };
                    old_values.push(Some(old.to_string()));
                    new_values.push(Some(new.to_string()));
                }
                None => {
                    old_values.push(None);
                    new_values.push(None);
                }
            }
        }
        df.with_column(Series::new("oAA".into(), old_values))?;
        df.with_column(Series::new("nAA".into(), new_values))?;
        Ok(())
    }
}

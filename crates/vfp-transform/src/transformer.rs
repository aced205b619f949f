//! The transformer interface and shared cell-access helpers.
//!
//! A transformer derives one or more feature columns from a single raw
//! annotation column. Transformers are stateless values registered once
//! at process start; the dispatcher decides which of them run for a
//! given dataset (see [`crate::dispatcher`]).
//!
//! Output columns must not overlap between transformers: every derived
//! column name belongs to exactly one transformer.

use polars::prelude::*;
use vfp_common::any_to_string_non_empty;

use crate::error::Result;

/// A stateless unit deriving feature columns from one annotation column.
pub trait Transformer: Send + Sync {
    /// The input annotation column this transformer consumes.
    fn name(&self) -> &str;

    /// Whether the transformer may run at all. Disabled transformers are
    /// skipped with a warning, same as an absent input column.
    fn usable(&self) -> bool {
        true
    }

    /// Whether the input column is consumed, to be dropped after every
    /// transform pass has run.
    fn drop_input(&self) -> bool {
        true
    }

    /// Output column names, in emission order.
    fn columns(&self) -> Vec<String>;

    /// Derive the output columns. Only called when the input column is
    /// present and carries at least one non-null value.
    fn transform(&self, df: &mut DataFrame) -> Result<()>;

    /// Emit the output columns for a fully null input batch. The default
    /// emits nullable float columns filled with null.
    fn fill_null_outputs(&self, df: &mut DataFrame) -> Result<()> {
        let height = df.height();
        for name in self.columns() {
            df.with_column(Series::new(name.as_str().into(), vec![None::<f64>; height]))?;
        }
        Ok(())
    }

    /// Entry point used by the dispatcher: short-circuits an entirely
    /// null input column to [`Transformer::fill_null_outputs`].
    fn process(&self, df: &mut DataFrame) -> Result<()> {
        let series = df.column(self.name())?.as_materialized_series();
        if series.null_count() == series.len() {
            return self.fill_null_outputs(df);
        }
        self.transform(df)
    }
}

/// Read a column as per-row optional strings. Null and whitespace-only
/// cells become `None`; numeric cells are formatted without trailing
/// zeros.
pub(crate) fn string_cells(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let series = df.column(name)?.as_materialized_series();
    Ok((0..series.len())
        .map(|idx| any_to_string_non_empty(series.get(idx).unwrap_or(AnyValue::Null)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;

    impl Transformer for Doubler {
        fn name(&self) -> &str {
            "raw"
        }

        fn columns(&self) -> Vec<String> {
            vec!["doubled".to_string()]
        }

        fn transform(&self, df: &mut DataFrame) -> Result<()> {
            let values: Vec<Option<f64>> = string_cells(df, self.name())?
                .iter()
                .map(|cell| {
                    cell.as_deref()
                        .and_then(vfp_common::parse_f64)
                        .map(|v| v * 2.0)
                })
                .collect();
            df.with_column(Series::new("doubled".into(), values))?;
            Ok(())
        }
    }

    #[test]
    fn process_runs_transform_for_mixed_input() {
        let mut df = DataFrame::new(vec![
            Series::new("raw".into(), vec![Some("2"), None, Some("bad")]).into(),
        ])
        .unwrap();
        Doubler.process(&mut df).unwrap();
        let doubled = df.column("doubled").unwrap().f64().unwrap();
        assert_eq!(doubled.get(0), Some(4.0));
        assert_eq!(doubled.get(1), None);
        assert_eq!(doubled.get(2), None);
    }

    #[test]
    fn process_short_circuits_all_null_input() {
        let mut df = DataFrame::new(vec![
            Series::new("raw".into(), vec![None::<&str>, None]).into(),
        ])
        .unwrap();
        Doubler.process(&mut df).unwrap();
        let doubled = df.column("doubled").unwrap();
        assert_eq!(doubled.null_count(), 2);
    }

    #[test]
    fn string_cells_treats_blank_as_missing() {
        let df = DataFrame::new(vec![
            Series::new("raw".into(), vec![Some("x"), Some("  "), None]).into(),
        ])
        .unwrap();
        let cells = string_cells(&df, "raw").unwrap();
        assert_eq!(cells, vec![Some("x".to_string()), None, None]);
    }
}

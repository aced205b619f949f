//! Schema reconciliation against the model's expected feature list.
//!
//! After encoding, the dataset must carry every feature the model was
//! trained on. Gaps are padded with null, not zero: a missing indicator
//! column must stay distinguishable from an indicator that is false.
//! Extra columns are tolerated so the frame stays inspectable; they are
//! simply not selected into the matrix.

use polars::prelude::*;
use tracing::debug;
use vfp_common::any_to_f64;

use crate::error::Result;

/// Pad every expected feature missing from the frame with a null column.
pub fn reconcile(df: &mut DataFrame, expected: &[String]) -> Result<()> {
    let height = df.height();
    for name in expected {
        if df.column(name).is_err() {
            debug!("expected feature {name} missing after encoding, padding with null");
            df.with_column(Series::new(name.as_str().into(), vec![None::<f64>; height]))?;
        }
    }
    Ok(())
}

/// Select the expected features, in order, into a row-major numeric
/// matrix. Null and non-numeric cells become NaN, the missing-value
/// marker the classifier understands.
pub fn select_matrix(df: &DataFrame, expected: &[String]) -> Result<Vec<Vec<f64>>> {
    let mut series: Vec<&Series> = Vec::with_capacity(expected.len());
    for name in expected {
        series.push(df.column(name)?.as_materialized_series());
    }
    let matrix = (0..df.height())
        .map(|row| {
            series
                .iter()
                .map(|column| {
                    any_to_f64(column.get(row).unwrap_or(AnyValue::Null)).unwrap_or(f64::NAN)
                })
                .collect()
        })
        .collect();
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn pads_missing_features_with_null() {
        let mut df = DataFrame::new(vec![
            Series::new("Length".into(), vec![1.0f64, 2.0]).into(),
        ])
        .unwrap();
        reconcile(&mut df, &expected(&["Length", "Type_SNV", "Type_DEL"])).unwrap();
        assert_eq!(df.width(), 3);
        assert_eq!(df.column("Type_SNV").unwrap().null_count(), 2);
        assert_eq!(df.column("Length").unwrap().null_count(), 0);
    }

    #[test]
    fn extra_columns_survive_reconciliation() {
        let mut df = DataFrame::new(vec![
            Series::new("Length".into(), vec![1.0f64]).into(),
            Series::new("chr_pos_ref_alt".into(), vec!["1_100_C_G"]).into(),
        ])
        .unwrap();
        reconcile(&mut df, &expected(&["Length"])).unwrap();
        assert!(df.column("chr_pos_ref_alt").is_ok());
    }

    #[test]
    fn matrix_follows_expected_order_with_nan_for_null() {
        let mut df = DataFrame::new(vec![
            Series::new("b".into(), vec![Some(2.0f64), None]).into(),
            Series::new("a".into(), vec![Some(1.0f64), Some(3.0)]).into(),
        ])
        .unwrap();
        reconcile(&mut df, &expected(&["a", "b", "c"])).unwrap();
        let matrix = select_matrix(&df, &expected(&["a", "b", "c"])).unwrap();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[0][1], 2.0);
        assert!(matrix[0][2].is_nan());
        assert!(matrix[1][1].is_nan());
    }

    #[test]
    fn intersection_with_expected_is_complete() {
        let mut df = DataFrame::new(vec![
            Series::new("x".into(), vec![1i32]).into(),
        ])
        .unwrap();
        let names = expected(&["x", "y", "z"]);
        reconcile(&mut df, &names).unwrap();
        let present = names
            .iter()
            .filter(|name| df.column(name).is_ok())
            .count();
        assert_eq!(present, names.len());
    }
}

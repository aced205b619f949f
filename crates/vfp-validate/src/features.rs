//! Post-transform feature presence check.
//!
//! After the transform pass every feature the model consumes (in its
//! pre-encoding form) must exist in the frame. A gap here means the
//! input was annotated with a different annotator configuration than
//! the model was trained on, and is fatal — unlike the per-transformer
//! skip, which is a warning.

use polars::prelude::DataFrame;
use tracing::error;

use crate::error::{Result, ValidationError};

pub fn validate_features_present(df: &DataFrame, features: &[String]) -> Result<()> {
    let missing: Vec<&str> = features
        .iter()
        .map(String::as_str)
        .filter(|name| df.column(name).is_err())
        .collect();
    if !missing.is_empty() {
        let joined = missing.join(", ");
        error!(
            "detected required feature(s) {joined} not present within transformed input"
        );
        return Err(ValidationError::MissingColumns(joined));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn passes_when_all_features_exist() {
        let df = DataFrame::new(vec![
            Series::new("Length".into(), vec![0i64, 2]).into(),
            Series::new("Type".into(), vec!["SNV", "DELINS"]).into(),
        ])
        .unwrap();
        assert!(
            validate_features_present(&df, &["Length".into(), "Type".into()]).is_ok()
        );
    }

    #[test]
    fn lists_every_missing_feature() {
        let df = DataFrame::new(vec![
            Series::new("Length".into(), vec![0i64]).into(),
        ])
        .unwrap();
        let err = validate_features_present(
            &df,
            &["Length".into(), "Type".into(), "SIFTval".into()],
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Type"));
        assert!(message.contains("SIFTval"));
        assert!(!message.contains("Length,"));
    }
}

//! Transform dispatch over a dataset.
//!
//! Runs every registered transformer whose input column is both present
//! in the dataset and named in the requested feature list, collects the
//! produced columns into a [`FeatureMap`], and drops consumed input
//! columns afterwards. Dropping is deferred until all transformers have
//! run because one input column may feed several of them.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;
use tracing::warn;

use crate::error::Result;
use crate::registry::registry;
use crate::transformer::Transformer;

/// Input annotation column name to the ordered list of feature columns
/// it produced during one dispatch pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureMap {
    map: BTreeMap<String, Vec<String>>,
}

impl FeatureMap {
    /// Record outputs for an input column. Several transformers may
    /// share one input; their outputs accumulate in run order.
    pub fn insert(&mut self, input: impl Into<String>, outputs: Vec<String>) {
        self.map.entry(input.into()).or_default().extend(outputs);
    }

    pub fn outputs(&self, input: &str) -> Option<&[String]> {
        self.map.get(input).map(Vec::as_slice)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every derived column produced during the pass, in input order.
    pub fn derived_columns(&self) -> Vec<String> {
        self.map.values().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Run all applicable transformers over the dataset in place.
///
/// `requested` is the caller-supplied list of annotation columns to
/// process: user-declared at train time, the model's input feature list
/// at predict time. Transformers whose input is absent or not requested
/// are skipped with a warning.
pub fn dispatch(df: &mut DataFrame, requested: &[String]) -> Result<FeatureMap> {
    dispatch_with(df, requested, &registry())
}

fn dispatch_with(
    df: &mut DataFrame,
    requested: &[String],
    transformers: &[Box<dyn Transformer>],
) -> Result<FeatureMap> {
    let mut feature_map = FeatureMap::default();
    let mut consumed: BTreeSet<String> = BTreeSet::new();

    for transformer in transformers {
        let name = transformer.name();
        if !requested.iter().any(|feature| feature == name) {
            warn!("column {name} not requested, skipping its transformer");
            continue;
        }
        if df.column(name).is_err() {
            warn!("column {name} is not present within the dataset, skipping its transformer");
            continue;
        }
        if !transformer.usable() {
            warn!("transformer for column {name} is disabled, skipping");
            continue;
        }
        transformer.process(df)?;
        feature_map.insert(name, transformer.columns());
        if transformer.drop_input() {
            consumed.insert(name.to_string());
        }
    }

    for name in consumed {
        df.drop_in_place(&name)?;
    }

    Ok(feature_map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn requested(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn annotated_frame() -> DataFrame {
        DataFrame::new(vec![
            Series::new("REF".into(), vec!["C", "CA"]).into(),
            Series::new("ALT".into(), vec!["G", "C"]).into(),
            Series::new("Amino_acids".into(), vec![Some("R/W"), None]).into(),
            Series::new("cDNA_position".into(), vec![Some("305/702"), Some("483-486")]).into(),
        ])
        .unwrap()
    }

    #[test]
    fn runs_requested_transformers_and_drops_consumed_inputs() {
        let mut df = annotated_frame();
        let feature_map =
            dispatch(&mut df, &requested(&["REF", "Amino_acids", "cDNA_position"])).unwrap();

        assert_eq!(
            feature_map.outputs("Amino_acids"),
            Some(&["oAA".to_string(), "nAA".to_string()][..])
        );
        assert_eq!(
            feature_map.outputs("REF"),
            Some(&["Type".to_string(), "Length".to_string()][..])
        );
        assert!(df.column("oAA").is_ok());
        assert!(df.column("cDNApos").is_ok());
        assert!(df.column("Type").is_ok());
        // Consumed inputs are gone, shared ones stay.
        assert!(df.column("Amino_acids").is_err());
        assert!(df.column("cDNA_position").is_err());
        assert!(df.column("REF").is_ok());
        assert!(df.column("ALT").is_ok());
    }

    #[test]
    fn unrequested_column_is_left_untouched() {
        let mut df = annotated_frame();
        let feature_map = dispatch(&mut df, &requested(&["REF"])).unwrap();
        assert!(feature_map.outputs("Amino_acids").is_none());
        assert!(df.column("Amino_acids").is_ok());
        assert!(df.column("oAA").is_err());
    }

    #[test]
    fn absent_column_is_skipped_without_error() {
        let mut df = annotated_frame();
        let feature_map = dispatch(&mut df, &requested(&["SIFT", "REF"])).unwrap();
        assert!(feature_map.outputs("SIFT").is_none());
        assert!(feature_map.outputs("REF").is_some());
    }

    #[test]
    fn shared_input_feeds_both_transformers() {
        let mut df = annotated_frame();
        let feature_map = dispatch(&mut df, &requested(&["REF"])).unwrap();
        // Type first (registry order), then Length, both recorded under REF.
        assert!(df.column("Type").is_ok());
        assert!(df.column("Length").is_ok());
        assert_eq!(
            feature_map.outputs("REF"),
            Some(&["Type".to_string(), "Length".to_string()][..])
        );
        let derived = feature_map.derived_columns();
        assert!(derived.contains(&"Type".to_string()));
        assert!(derived.contains(&"Length".to_string()));
    }

    #[test]
    fn derived_columns_cover_all_outputs() {
        let mut df = annotated_frame();
        let feature_map = dispatch(&mut df, &requested(&["Amino_acids", "cDNA_position"])).unwrap();
        let derived = feature_map.derived_columns();
        for name in ["oAA", "nAA", "cDNApos", "relcDNApos"] {
            assert!(derived.contains(&name.to_string()), "missing {name}");
        }
    }
}

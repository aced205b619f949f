//! Variant type classifier from reference and alternate alleles.
//!
//! Reads both `REF` and `ALT` but declares `REF` as its input so the
//! dispatcher matches it on the reference column; neither column is
//! consumed. The DEL/INS rules require the single-base side to equal
//! the first base of the longer side; anything else that is not a
//! clean substitution is a DELINS.

use polars::prelude::*;
use vfp_model::columns;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

const OUTPUT: &str = "Type";

fn classify(reference: &str, alternate: &str) -> &'static str {
    let mut variant_type = "DELINS";
    if reference.len() == 1 && alternate.len() == 1 {
        variant_type = "SNV";
    }
    // The `len() > 1` guards keep a degenerate identity row (ref == alt,
    // both one base) on the SNV branch instead of matching DEL/INS,
    // whose prefix checks would also pass for it.
    if alternate.len() == 1 && reference.starts_with(alternate) && reference.len() > 1 {
        variant_type = "DEL";
    }
    if reference.len() == 1 && alternate.starts_with(reference) && alternate.len() > 1 {
        variant_type = "INS";
    }
    variant_type
}

pub struct VariantType;

impl Transformer for VariantType {
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
        let types: Vec<Option<&str>> = references
            .iter()
            .zip(&alternates)
            .map(|(reference, alternate)| match (reference, alternate) {
                (Some(r), Some(a)) => Some(classify(r, a)),
                _ => None,
            })
            .collect();
        df.with_column(Series::new(OUTPUT.into(), types))?;
        Ok(())
    }

    fn fill_null_outputs(&self, df: &mut DataFrame) -> Result<()> {
        let height = df.height();
        df.with_column(Series::new(OUTPUT.into(), vec![None::<&str>; height]))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(pairs: Vec<(Option<&str>, Option<&str>)>) -> DataFrame {
        let (refs, alts): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        DataFrame::new(vec![
            Series::new("REF".into(), refs).into(),
            Series::new("ALT".into(), alts).into(),
        ])
        .unwrap()
    }

    #[test]
    fn classifies_all_four_types() {
        let mut df = frame(vec![
            (Some("C"), Some("G")),
            (Some("CA"), Some("C")),
            (Some("C"), Some("CG")),
            (Some("CA"), Some("GT")),
        ]);
        VariantType.process(&mut df).unwrap();
        let types = df.column("Type").unwrap().str().unwrap();
        assert_eq!(types.get(0), Some("SNV"));
        assert_eq!(types.get(1), Some("DEL"));
        assert_eq!(types.get(2), Some("INS"));
        assert_eq!(types.get(3), Some("DELINS"));
    }

    #[test]
    fn single_base_mismatch_is_delins_not_del() {
        // alt is length 1 but does not equal the first reference base
        let mut df = frame(vec![(Some("CA"), Some("G"))]);
        VariantType.process(&mut df).unwrap();
        assert_eq!(df.column("Type").unwrap().str().unwrap().get(0), Some("DELINS"));
    }

    #[test]
    fn identical_single_base_alleles_stay_snv() {
        let mut df = frame(vec![(Some("C"), Some("C"))]);
        VariantType.process(&mut df).unwrap();
        assert_eq!(df.column("Type").unwrap().str().unwrap().get(0), Some("SNV"));
    }

    #[test]
    fn reference_column_is_not_consumed() {
        assert!(!VariantType.drop_input());
    }

    #[test]
    fn missing_allele_yields_null() {
        let mut df = frame(vec![(Some("C"), None), (Some("C"), Some("G"))]);
        VariantType.process(&mut df).unwrap();
        assert_eq!(df.column("Type").unwrap().str().unwrap().get(0), None);
    }
}

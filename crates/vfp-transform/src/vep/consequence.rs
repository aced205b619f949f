//! Consequence multi-hot encoder.
//!
//! A `Consequence` cell is an ampersand-separated list of predicted
//! effect terms. Each term is reduced by removing the filler tokens
//! `_variant`, `_region`, `_gene` and `_transcript`, then matched
//! against a fixed vocabulary; one `is_<term>` indicator column is
//! emitted per vocabulary entry. Unknown terms are logged and ignored.
//!
//! Reduction folds a few raw terms together on purpose:
//! `splice_donor_variant` and `splice_donor_region_variant` both land
//! on `splice_donor`.

use polars::prelude::*;
use tracing::warn;

use crate::error::Result;
use crate::transformer::{Transformer, string_cells};

const FILLER_TOKENS: &[&str] = &["_variant", "_region", "_gene", "_transcript"];

/// Reduced vocabulary, deduplicated. Order fixes the output column order.
const TERMS: &[&str] = &[
    "transcript_ablation",
    "splice_acceptor",
    "splice_donor",
    "stop_gained",
    "frameshift",
    "stop_lost",
    "start_lost",
    "transcript_amplification",
    "inframe_insertion",
    "inframe_deletion",
    "missense",
    "protein_altering",
    "splice",
    "splice_donor_5th_base",
    "splice_polypyrimidine_tract",
    "incomplete_terminal_codon",
    "start_retained",
    "stop_retained",
    "synonymous",
    "coding_sequence",
    "mature_miRNA",
    "5_prime_UTR",
    "3_prime_UTR",
    "non_coding_exon",
    "intron",
    "NMD",
    "non_coding",
    "upstream",
    "downstream",
    "TFBS_ablation",
    "TFBS_amplification",
    "TF_binding_site",
    "regulatory_ablation",
    "regulatory_amplification",
    "feature_elongation",
    "regulatory",
    "feature_truncation",
    "intergenic",
];

fn reduce_term(term: &str) -> String {
    let mut reduced = term.to_string();
    for token in FILLER_TOKENS {
        reduced = reduced.replace(token, "");
    }
    reduced
}

pub struct Consequence;

impl Transformer for Consequence {
    fn name(&self) -> &str {
        "Consequence"
    }

    fn columns(&self) -> Vec<String> {
        TERMS.iter().map(|term| format!("is_{term}")).collect()
    }

    fn transform(&self, df: &mut DataFrame) -> Result<()> {
        let cells = string_cells(df, self.name())?;
        let mut indicators = vec![vec![0i32; cells.len()]; TERMS.len()];
        for (row, cell) in cells.iter().enumerate() {
            let Some(value) = cell.as_deref() else {
                continue;
            };
            for raw_term in value.split('&') {
                let reduced = reduce_term(raw_term);
                match TERMS.iter().position(|term| *term == reduced) {
                    Some(index) => indicators[index][row] = 1,
                    None => warn!("unknown consequence term {raw_term:?}, ignoring"),
                }
            }
        }
        for (name, values) in self.columns().iter().zip(indicators) {
            df.with_column(Series::new(name.as_str().into(), values))?;
        }
        Ok(())
    }

    /// A fully null batch still gets the whole indicator set, all zero.
    /// An absent consequence is "none of these", not unknown.
    fn fill_null_outputs(&self, df: &mut DataFrame) -> Result<()> {
        let height = df.height();
        for name in self.columns() {
            df.with_column(Series::new(name.as_str().into(), vec![0i32; height]))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(cells: Vec<Option<&str>>) -> DataFrame {
        DataFrame::new(vec![Series::new("Consequence".into(), cells).into()]).unwrap()
    }

    #[test]
    fn sets_indicator_for_each_listed_term() {
        let mut df = frame(vec![Some("missense_variant&splice_region_variant")]);
        Consequence.process(&mut df).unwrap();
        assert_eq!(df.column("is_missense").unwrap().i32().unwrap().get(0), Some(1));
        assert_eq!(df.column("is_splice").unwrap().i32().unwrap().get(0), Some(1));
        assert_eq!(df.column("is_stop_gained").unwrap().i32().unwrap().get(0), Some(0));
    }

    #[test]
    fn filler_tokens_are_removed_everywhere() {
        let mut df = frame(vec![
            Some("non_coding_transcript_exon_variant"),
            Some("NMD_transcript_variant"),
            Some("upstream_gene_variant"),
        ]);
        Consequence.process(&mut df).unwrap();
        assert_eq!(
            df.column("is_non_coding_exon").unwrap().i32().unwrap().get(0),
            Some(1)
        );
        assert_eq!(df.column("is_NMD").unwrap().i32().unwrap().get(1), Some(1));
        assert_eq!(df.column("is_upstream").unwrap().i32().unwrap().get(2), Some(1));
    }

    #[test]
    fn donor_region_folds_onto_splice_donor() {
        let mut df = frame(vec![Some("splice_donor_region_variant"), Some("splice_donor_variant")]);
        Consequence.process(&mut df).unwrap();
        let donor = df.column("is_splice_donor").unwrap().i32().unwrap();
        assert_eq!(donor.get(0), Some(1));
        assert_eq!(donor.get(1), Some(1));
    }

    #[test]
    fn unknown_term_is_ignored() {
        let mut df = frame(vec![Some("made_up_effect&intron_variant")]);
        Consequence.process(&mut df).unwrap();
        assert_eq!(df.column("is_intron").unwrap().i32().unwrap().get(0), Some(1));
        // No column was invented for the unknown term.
        assert!(df.column("is_made_up_effect").is_err());
    }

    #[test]
    fn null_batch_emits_all_zero_indicators() {
        let mut df = frame(vec![None, None]);
        Consequence.process(&mut df).unwrap();
        let missense = df.column("is_missense").unwrap().i32().unwrap();
        assert_eq!(missense.get(0), Some(0));
        assert_eq!(missense.null_count(), 0);
        assert_eq!(df.width(), 1 + TERMS.len());
    }

    #[test]
    fn vocabulary_is_unique() {
        for (index, term) in TERMS.iter().enumerate() {
            assert!(!TERMS[index + 1..].contains(term), "duplicate term {term}");
        }
    }
}

//! Post-load column renames.
//!
//! The annotator's column names are mapped onto the pipeline's layout
//! right after loading, so everything downstream sees one naming
//! scheme. Absent source columns are skipped silently; annotator
//! configurations differ.

use polars::prelude::*;
use vfp_model::columns;

use crate::error::Result;

/// Annotator column name to pipeline column name. Targets are the
/// shared column constants, so the renames cannot drift from what the
/// rest of the pipeline looks up.
const RENAMES: &[(&str, &str)] = &[
    ("CHROM", columns::CHR),
    ("POS", columns::POS),
    ("SYMBOL", columns::GENE_NAME),
    ("SYMBOL_SOURCE", columns::ID_SOURCE),
    ("Gene", columns::GENE_ID),
    ("Feature", columns::FEATURE),
    ("Feature_type", columns::FEATURE_TYPE),
    ("EXON", "Exon"),
    ("INTRON", "Intron"),
    ("MAX_AF", "max_AF"),
];

pub fn apply_column_renames(df: &mut DataFrame) -> Result<()> {
    for (source, target) in RENAMES {
        if df.column(source).is_ok() {
            df.rename(source, (*target).into())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_known_columns_and_keeps_the_rest() {
        let mut df = DataFrame::new(vec![
            Series::new("CHROM".into(), vec!["1"]).into(),
            Series::new("POS".into(), vec![100i64]).into(),
            Series::new("SYMBOL".into(), vec!["BRCA1"]).into(),
            Series::new("SIFT".into(), vec!["deleterious(0.01)"]).into(),
        ])
        .unwrap();
        apply_column_renames(&mut df).unwrap();
        assert!(df.column("chr").is_ok());
        assert!(df.column("pos").is_ok());
        assert!(df.column("gene_name").is_ok());
        assert!(df.column("SIFT").is_ok());
        assert!(df.column("CHROM").is_err());
    }

    #[test]
    fn absent_source_columns_are_skipped() {
        let mut df = DataFrame::new(vec![
            Series::new("CHROM".into(), vec!["1"]).into(),
        ])
        .unwrap();
        apply_column_renames(&mut df).unwrap();
        assert_eq!(df.width(), 1);
        assert!(df.column("chr").is_ok());
    }

    #[test]
    fn rename_targets_match_pipeline_constants() {
        let targets: Vec<&str> = RENAMES.iter().map(|(_, target)| *target).collect();
        for constant in [
            columns::CHR,
            columns::POS,
            columns::GENE_NAME,
            columns::GENE_ID,
            columns::ID_SOURCE,
            columns::FEATURE,
            columns::FEATURE_TYPE,
        ] {
            assert!(targets.contains(&constant), "no rename targets {constant}");
        }
    }

    #[test]
    fn exon_and_intron_are_title_cased() {
        let mut df = DataFrame::new(vec![
            Series::new("EXON".into(), vec!["3/11"]).into(),
            Series::new("INTRON".into(), vec!["1/9"]).into(),
        ])
        .unwrap();
        apply_column_renames(&mut df).unwrap();
        assert!(df.column("Exon").is_ok());
        assert!(df.column("Intron").is_ok());
    }
}

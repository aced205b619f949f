//! Well-known column names used across the pipeline.
//!
//! Annotation input follows the renamed post-load layout: `chr`, `pos`,
//! `REF`, `ALT` plus whatever annotation columns the upstream
//! variant-effect annotator produced.

/// Chromosome column.
pub const CHR: &str = "chr";
/// Position column.
pub const POS: &str = "pos";
/// Reference allele column.
pub const REF: &str = "REF";
/// Alternate allele column.
pub const ALT: &str = "ALT";
/// Gene symbol column (renamed from `SYMBOL`).
pub const GENE_NAME: &str = "gene_name";
/// Gene identifier column (renamed from `Gene`).
pub const GENE_ID: &str = "gene_id";
/// Symbol source column (renamed from `SYMBOL_SOURCE`).
pub const ID_SOURCE: &str = "id_source";
/// Transcript/feature identifier column (renamed from `Feature`).
pub const FEATURE: &str = "feature";
/// Feature type column (renamed from `Feature_type`).
pub const FEATURE_TYPE: &str = "feature_type";

/// The classifier probability output column.
pub const SCORE: &str = "score";

/// Variant identity column preserved through encoding.
pub const CHR_POS_REF_ALT: &str = "chr_pos_ref_alt";

/// Separator for the preserved variant identity column. Deliberately
/// unlikely to occur inside an allele or chromosome name.
pub const KEY_SEPARATOR: &str = "_VfpUniqueSeparator_";

/// Catch-all bucket sentinel for categorical encoding. Must never
/// collide with a genuine categorical value, so it is not the literal
/// word "other".
pub const OTHER_BUCKET: &str = "other_vfp_value";

/// Columns excluded from categorical encoding: identity and bookkeeping
/// columns that must never become model features.
pub const ENCODING_EXCLUDED: &[&str] = &[
    CHR_POS_REF_ALT,
    CHR,
    POS,
    GENE_NAME,
    GENE_ID,
    ID_SOURCE,
    FEATURE,
    FEATURE_TYPE,
];

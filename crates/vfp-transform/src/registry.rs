//! Static transformer registry.
//!
//! Every transformer the pipeline knows about is listed here, once, at
//! process start. Selection happens declaratively in the dispatcher by
//! matching input column names against the requested feature list; no
//! runtime discovery is involved.

use crate::transformer::Transformer;
use crate::vep::{
    AminoAcids, CategoryScore, Consequence, Domains, ExonIntron, Length, PositionFraction,
    VariantType,
};

/// All registered transformers, in a fixed order.
pub fn registry() -> Vec<Box<dyn Transformer>> {
    vec![
        Box::new(AminoAcids),
        Box::new(Consequence),
        Box::new(Domains),
        Box::new(PositionFraction::cdna()),
        Box::new(PositionFraction::cds()),
        Box::new(PositionFraction::protein()),
        Box::new(CategoryScore::sift()),
        Box::new(CategoryScore::polyphen()),
        Box::new(ExonIntron::exon()),
        Box::new(ExonIntron::intron()),
        Box::new(VariantType),
        Box::new(Length),
    ]
}

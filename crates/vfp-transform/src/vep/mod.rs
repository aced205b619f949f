//! Transformers for raw variant-effect annotation columns.

mod amino_acids;
mod consequence;
mod domain;
mod exon_intron;
mod length;
mod position;
mod sift_polyphen;
mod variant_type;

pub use amino_acids::AminoAcids;
pub use consequence::Consequence;
pub use domain::Domains;
pub use exon_intron::ExonIntron;
pub use length::Length;
pub use position::PositionFraction;
pub use sift_polyphen::CategoryScore;
pub use variant_type::VariantType;

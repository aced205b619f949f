//! Data model definitions for the variant feature pipeline.
//!
//! - **columns**: well-known column names and separators
//! - **category**: train-time learned categorical value tables
//! - **artifact**: the model artifact bundle (metadata + optional booster)
//! - **classifier**: the opaque classifier seam and a serialized
//!   tree-ensemble scorer
//! - **error**: shared error type

pub mod artifact;
pub mod category;
pub mod classifier;
pub mod columns;
pub mod error;

pub use artifact::{ModelArtifact, ModelMetadata};
pub use category::CategoryTable;
pub use classifier::{Classifier, Tree, TreeEnsemble};
pub use error::{Result, VfpError};

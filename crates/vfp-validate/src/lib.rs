//! Validation for the variant feature pipeline.
//!
//! - **version**: version string parsing and model/tool compatibility
//! - **input**: post-parse dataset sanity checks
//! - **features**: post-transform feature presence checks

pub mod error;
pub mod features;
pub mod input;
pub mod version;

pub use error::{Result, ValidationError};
pub use features::validate_features_present;
pub use input::{validate_chrom_pos, validate_min_columns, validate_required_columns};
pub use version::{Version, VersionComponent, validate_versions_compatible};

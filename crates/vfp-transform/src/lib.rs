//! Feature derivation for variant annotation frames.
//!
//! Three stages, run in order:
//!
//! 1. [`dispatcher::dispatch`] derives feature columns from raw
//!    annotation columns via the registered [`transformer::Transformer`]s.
//! 2. [`encode`] expands categorical features into indicator columns,
//!    learning the retained value set at train time and replaying it at
//!    predict time.
//! 3. [`schema`] reconciles the result against the model's expected
//!    feature list and selects the numeric matrix.

pub mod dispatcher;
pub mod encode;
pub mod error;
pub mod registry;
pub mod schema;
pub mod transformer;
pub mod vep;

pub use dispatcher::{FeatureMap, dispatch};
pub use encode::{EncoderMode, create_preservation_column, encode, encode_predict, encode_train};
pub use error::{Result, TransformError};
pub use registry::registry;
pub use schema::{reconcile, select_matrix};
pub use transformer::Transformer;

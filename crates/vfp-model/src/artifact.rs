//! The model artifact bundle.
//!
//! An artifact pairs everything the predict pipeline needs to reproduce
//! the train-time feature matrix with an optional serialized booster:
//! the producing tool version (gated before the artifact is used), the
//! raw annotation columns the transform pass consumed at train time,
//! the learned category table, and the final ordered feature list.

use serde::{Deserialize, Serialize};

use crate::category::CategoryTable;
use crate::classifier::TreeEnsemble;
use crate::error::{Result, VfpError};

/// Everything learned about the feature schema at train time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Version of the tool that produced this artifact.
    pub model_version: String,

    /// Raw annotation columns the transform dispatch consumed at train
    /// time. At predict time this is the "features to process" list.
    pub vep_features: Vec<String>,

    /// Retained categorical values learned at train time.
    pub category_table: CategoryTable,

    /// Final ordered feature names of the numeric matrix the classifier
    /// expects.
    pub feature_names: Vec<String>,
}

/// A persisted model artifact: metadata plus, when shipped for scoring,
/// the serialized classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,

    /// The trained ensemble. Absent for matrix-only artifacts (for
    /// example the direct output of a train run whose booster is fit
    /// externally).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booster: Option<TreeEnsemble>,
}

impl ModelArtifact {
    /// Structural checks before the artifact is trusted: every field the
    /// predict pipeline dereferences must be present and consistent.
    pub fn validate(&self) -> Result<()> {
        if self.metadata.model_version.trim().is_empty() {
            return Err(VfpError::InvalidArtifact(
                "artifact carries no model version".to_string(),
            ));
        }
        if self.metadata.vep_features.is_empty() {
            return Err(VfpError::InvalidArtifact(
                "artifact carries no input feature list".to_string(),
            ));
        }
        if self.metadata.feature_names.is_empty() {
            return Err(VfpError::InvalidArtifact(
                "artifact carries no expected feature names".to_string(),
            ));
        }
        if let Some(booster) = &self.booster {
            booster.validate()?;
            if booster.feature_names != self.metadata.feature_names {
                return Err(VfpError::InvalidArtifact(
                    "booster feature names do not match artifact feature names".to_string(),
                ));
            }
        }
        Ok(())
    }
}

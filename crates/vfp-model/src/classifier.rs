//! The opaque classifier seam.
//!
//! The pipeline only ever talks to [`Classifier`]: an ordered feature
//! name list plus a probability prediction over a numeric matrix.
//! [`TreeEnsemble`] is the shipped implementation, a flat-array
//! gradient-boosted tree walker for ensembles serialized into the model
//! artifact. How such an ensemble is trained is not this crate's
//! concern.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VfpError};

/// A trained binary classifier consumed as a black box.
///
/// `matrix` rows must carry one `f64` per entry of `feature_names()`,
/// in that order, with `f64::NAN` for missing values.
pub trait Classifier {
    /// The ordered feature names the model was trained on.
    fn feature_names(&self) -> &[String];

    /// Probability of the positive class per row.
    fn predict_proba(&self, matrix: &[Vec<f64>]) -> Result<Vec<f64>>;
}

/// One regression tree in flat parallel arrays. Child indices are local
/// to the tree; a node is a leaf when its left child is negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    /// Split feature index per node (unused for leaves).
    pub split_feature: Vec<i32>,
    /// Split threshold per node; rows go left when `value < threshold`.
    pub threshold: Vec<f64>,
    /// Left child per node, `-1` for leaves.
    pub left: Vec<i32>,
    /// Right child per node, `-1` for leaves.
    pub right: Vec<i32>,
    /// Default direction for missing values (true = left).
    pub default_left: Vec<bool>,
    /// Leaf weight per node (unused for internal nodes).
    pub value: Vec<f64>,
}

impl Tree {
    fn node_count(&self) -> usize {
        self.left.len()
    }

    fn validate(&self, n_features: usize) -> Result<()> {
        let n = self.node_count();
        if self.split_feature.len() != n
            || self.threshold.len() != n
            || self.right.len() != n
            || self.default_left.len() != n
            || self.value.len() != n
        {
            return Err(VfpError::InvalidArtifact(
                "tree node arrays have mismatching lengths".to_string(),
            ));
        }
        for idx in 0..n {
            let (left, right) = (self.left[idx], self.right[idx]);
            if left < 0 {
                continue;
            }
            if right < 0 || left as usize >= n || right as usize >= n {
                return Err(VfpError::InvalidArtifact(format!(
                    "tree node {idx} has out-of-range children"
                )));
            }
            let feature = self.split_feature[idx];
            if feature < 0 || feature as usize >= n_features {
                return Err(VfpError::InvalidArtifact(format!(
                    "tree node {idx} splits on unknown feature index {feature}"
                )));
            }
        }
        Ok(())
    }

    /// Walk the tree for one row, following the default direction on
    /// missing (NaN) values.
    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut idx = 0usize;
        while self.left[idx] >= 0 {
            let feature = self.split_feature[idx] as usize;
            let value = row.get(feature).copied().unwrap_or(f64::NAN);
            let go_left = if value.is_nan() {
                self.default_left[idx]
            } else {
                value < self.threshold[idx]
            };
            idx = if go_left {
                self.left[idx] as usize
            } else {
                self.right[idx] as usize
            };
        }
        self.value[idx]
    }
}

/// A serialized gradient-boosted tree ensemble with a logistic link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeEnsemble {
    /// Ordered feature names the ensemble was trained on.
    pub feature_names: Vec<String>,
    /// Margin added before any tree contributes.
    pub base_margin: f64,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Structural validation of node arrays and feature indices.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(VfpError::InvalidArtifact(
                "ensemble declares no feature names".to_string(),
            ));
        }
        for tree in &self.trees {
            tree.validate(self.feature_names.len())?;
        }
        Ok(())
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl Classifier for TreeEnsemble {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    fn predict_proba(&self, matrix: &[Vec<f64>]) -> Result<Vec<f64>> {
        let width = self.feature_names.len();
        let mut scores = Vec::with_capacity(matrix.len());
        for (row_idx, row) in matrix.iter().enumerate() {
            if row.len() != width {
                return Err(VfpError::Message(format!(
                    "row {row_idx} has {} values, model expects {width}",
                    row.len()
                )));
            }
            let margin: f64 = self.base_margin
                + self.trees.iter().map(|tree| tree.predict_row(row)).sum::<f64>();
            scores.push(sigmoid(margin));
        }
        Ok(scores)
    }
}

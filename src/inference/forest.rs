//! Random forest classifier artifact
//!
//! The classifier artifact is a forest of decision trees exported as flat
//! parallel node arrays: `feature` holds the split feature per node with -1
//! marking leaves, `left`/`right` hold child indices, and `values` holds
//! per-node class counts. A vector descends from node 0 taking the left
//! child while `x[feature] <= threshold`; the leaf's normalized counts are
//! that tree's class distribution, and the forest's distribution is the
//! mean over its trees.

use serde::{Deserialize, Serialize};

use crate::error::PredictionError;
use crate::inference::Classifier;

/// One decision tree in flat parallel-array form
///
/// All arrays have one entry per node. Children of an internal node must
/// come strictly after it, which [`RandomForestModel::validate`] enforces;
/// evaluation assumes it and is guaranteed to terminate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Split feature index per node, -1 at leaves
    pub feature: Vec<i32>,
    /// Split threshold per node, unused at leaves
    pub threshold: Vec<f64>,
    /// Left child index per node, taken when `x[feature] <= threshold`
    pub left: Vec<i32>,
    /// Right child index per node
    pub right: Vec<i32>,
    /// Class count row per node
    pub values: Vec<Vec<f64>>,
}

impl DecisionTree {
    /// Assemble a tree from its parallel node arrays
    #[must_use]
    pub fn from_arrays(
        feature: Vec<i32>,
        threshold: Vec<f64>,
        left: Vec<i32>,
        right: Vec<i32>,
        values: Vec<Vec<f64>>,
    ) -> Self {
        Self {
            feature,
            threshold,
            left,
            right,
            values,
        }
    }

    /// Number of nodes in the tree
    #[must_use]
    pub fn n_nodes(&self) -> usize {
        self.feature.len()
    }

    /// Structural check against the declared feature count
    fn check(&self, n_features: usize) -> Result<(), String> {
        let nodes = self.feature.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.threshold.len() != nodes
            || self.left.len() != nodes
            || self.right.len() != nodes
            || self.values.len() != nodes
        {
            return Err("node arrays differ in length".to_string());
        }

        for node in 0..nodes {
            let counts = &self.values[node];
            if counts.len() != 2 {
                return Err(format!(
                    "node {node} has {} class counts, expected 2",
                    counts.len()
                ));
            }
            if counts.iter().any(|count| !count.is_finite() || *count < 0.0) {
                return Err(format!("node {node} has negative or non-finite class counts"));
            }

            if self.feature[node] < 0 {
                let total: f64 = counts.iter().sum();
                if total <= 0.0 {
                    return Err(format!("leaf {node} has no count mass"));
                }
            } else {
                if self.feature[node] as usize >= n_features {
                    return Err(format!(
                        "node {node} splits on feature {} but the model has {n_features}",
                        self.feature[node]
                    ));
                }
                if !self.threshold[node].is_finite() {
                    return Err(format!("node {node} has a non-finite threshold"));
                }
                for child in [self.left[node], self.right[node]] {
                    if child <= node as i32 || child as usize >= nodes {
                        return Err(format!(
                            "node {node} child {child} must land strictly after its parent"
                        ));
                    }
                }
            }
        }
        Ok(())
    }

    /// Normalized class distribution at the leaf this vector descends to
    fn leaf_distribution(&self, features: &[f64]) -> [f64; 2] {
        let mut node = 0_usize;
        while self.feature[node] >= 0 {
            let value = features[self.feature[node] as usize];
            node = if value <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }

        let counts = &self.values[node];
        let total: f64 = counts.iter().sum();
        [counts[0] / total, counts[1] / total]
    }
}

/// Random forest classifier deserialized from the model artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestModel {
    /// Model identifier carried by the artifact
    pub model_name: String,
    /// Number of input features the forest was fit on
    pub n_features: usize,
    /// Class labels in distribution order, must be `[0, 1]`
    pub classes: Vec<i64>,
    /// Per-feature importance weights, when the export included them
    #[serde(default)]
    pub feature_importances: Option<Vec<f64>>,
    /// The fitted trees
    pub trees: Vec<DecisionTree>,
}

impl RandomForestModel {
    /// Structural check of a deserialized artifact
    ///
    /// Rejects empty forests, class labels other than `[0, 1]`, importance
    /// arrays of the wrong arity, and trees whose node arrays are
    /// inconsistent, reference out-of-range features, carry zero-mass
    /// leaves, or whose children do not come strictly after their parent.
    /// Evaluation assumes a validated model.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_features == 0 {
            return Err("model declares zero features".to_string());
        }
        if self.classes != [0, 1] {
            return Err(format!(
                "unsupported class labels {:?}, expected [0, 1]",
                self.classes
            ));
        }
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        if let Some(importances) = &self.feature_importances {
            if importances.len() != self.n_features {
                return Err(format!(
                    "{} importance weights for {} features",
                    importances.len(),
                    self.n_features
                ));
            }
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.check(self.n_features)
                .map_err(|reason| format!("tree {index}: {reason}"))?;
        }
        Ok(())
    }

    /// Number of trees in the forest
    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Classifier for RandomForestModel {
    fn predict(&self, features: &[f64]) -> Result<usize, PredictionError> {
        let proba = self.predict_proba(features)?;
        // Argmax with the lower index winning ties
        Ok(usize::from(proba[1] > proba[0]))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, PredictionError> {
        if features.len() != self.n_features {
            return Err(PredictionError::DimensionMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let mut acc = [0.0_f64; 2];
        for tree in &self.trees {
            let dist = tree.leaf_distribution(features);
            acc[0] += dist[0];
            acc[1] += dist[1];
        }

        let count = self.trees.len() as f64;
        Ok(vec![acc[0] / count, acc[1] / count])
    }

    fn feature_importances(&self) -> Option<Vec<f64>> {
        self.feature_importances.clone()
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

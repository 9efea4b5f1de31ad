//! Gradient-boosted decision stumps for binary classification.
//!
//! The ensemble sums `learning_rate * stump(x)` over all rounds on top of
//! `init_raw` and maps the total through a sigmoid.

use serde::{Deserialize, Serialize};

use super::sigmoid;

/// Single-node decision tree used as a weak learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stump {
    /// Feature index used for the split.
    pub feature_index: u16,
    /// Threshold in feature units.
    pub threshold: f32,
    /// Prediction for `feature <= threshold`.
    pub left_value: f32,
    /// Prediction for `feature > threshold`.
    pub right_value: f32,
}

impl Stump {
    /// Predict the stump value for a feature vector.
    pub fn predict(&self, features: &[f32]) -> f32 {
        let value = features
            .get(self.feature_index as usize)
            .copied()
            .unwrap_or(0.0);
        if value <= self.threshold {
            self.left_value
        } else {
            self.right_value
        }
    }
}

/// Boosted stump ensemble producing a positive-class probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtStumpModel {
    /// Ordered input columns addressed by `Stump::feature_index`.
    pub feature_names: Vec<String>,
    /// Learning rate applied to each stump prediction.
    pub learning_rate: f32,
    /// Initial raw logit before boosting rounds.
    pub init_raw: f32,
    /// One stump per boosting round.
    pub stumps: Vec<Stump>,
}

impl GbdtStumpModel {
    /// Validate structural invariants of the ensemble.
    pub fn validate(&self) -> Result<(), String> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err("learning_rate must be > 0".to_string());
        }
        if !self.init_raw.is_finite() {
            return Err("init_raw must be finite".to_string());
        }
        for (round_idx, stump) in self.stumps.iter().enumerate() {
            if stump.feature_index as usize >= self.feature_names.len() {
                return Err(format!(
                    "Round {round_idx} splits on feature {} but only {} features exist",
                    stump.feature_index,
                    self.feature_names.len()
                ));
            }
        }
        Ok(())
    }

    /// Raw logit for a feature vector ordered like `feature_names`.
    pub fn predict_raw(&self, features: &[f32]) -> f32 {
        self.stumps.iter().fold(self.init_raw, |raw, stump| {
            raw + self.learning_rate * stump.predict(features)
        })
    }

    /// Probability of the positive class.
    pub fn predict_positive(&self, features: &[f32]) -> f32 {
        sigmoid(self.predict_raw(features))
    }
}

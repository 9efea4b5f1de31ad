//! Binary logistic regression over a named feature schema.

use serde::{Deserialize, Serialize};

use super::sigmoid;

/// Logistic regression model for the positive (stroke) class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Ordered input columns; `weights[i]` applies to `feature_names[i]`.
    pub feature_names: Vec<String>,
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LogisticModel {
    /// Validate the parameter shapes.
    pub fn validate(&self) -> Result<(), String> {
        if self.weights.len() != self.feature_names.len() {
            return Err(format!(
                "weights length {} does not match {} feature names",
                self.weights.len(),
                self.feature_names.len()
            ));
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err("parameters must be finite".to_string());
        }
        Ok(())
    }

    /// Raw logit for a feature vector ordered like `feature_names`.
    pub fn predict_raw(&self, features: &[f32]) -> f32 {
        self.weights
            .iter()
            .zip(features)
            .fold(self.bias, |acc, (w, x)| acc + w * x)
    }

    /// Probability of the positive class.
    pub fn predict_positive(&self, features: &[f32]) -> f32 {
        sigmoid(self.predict_raw(features))
    }
}

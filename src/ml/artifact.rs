//! JSON model artifacts and their loading errors.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{GbdtStumpModel, LogisticModel};

/// Errors raised while loading or running a classifier artifact.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Failed to read the artifact file.
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The artifact is not valid JSON for any supported model kind.
    #[error("Invalid model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The artifact parsed but failed structural validation.
    #[error("Model artifact failed validation: {0}")]
    Invalid(String),
    /// The feature vector does not match the model schema.
    #[error("Feature vector has {actual} values but the model expects {expected}")]
    FeatureLen { expected: usize, actual: usize },
    /// The model produced NaN or infinity.
    #[error("Model produced a non-finite probability")]
    NonFinite,
}

/// A pre-trained binary classifier together with its input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticModel),
    GbdtStump(GbdtStumpModel),
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ClassifierError> {
        let bytes = std::fs::read(path).map_err(|source| ClassifierError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: Self = serde_json::from_slice(&bytes).map_err(|source| ClassifierError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Ordered list of input column names the model expects.
    pub fn feature_names(&self) -> &[String] {
        match self {
            Self::Logistic(model) => &model.feature_names,
            Self::GbdtStump(model) => &model.feature_names,
        }
    }

    /// Validate model parameters and the schema itself.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let mut seen = HashSet::new();
        if let Some(dup) = self.feature_names().iter().find(|name| !seen.insert(*name)) {
            return Err(ClassifierError::Invalid(format!(
                "duplicate feature name {dup:?}"
            )));
        }
        let params = match self {
            Self::Logistic(model) => model.validate(),
            Self::GbdtStump(model) => model.validate(),
        };
        params.map_err(ClassifierError::Invalid)
    }

    /// Class probabilities `[negative, positive]` for a schema-ordered row.
    pub fn predict_proba(&self, features: &[f32]) -> Result<[f32; 2], ClassifierError> {
        let expected = self.feature_names().len();
        if features.len() != expected {
            return Err(ClassifierError::FeatureLen {
                expected,
                actual: features.len(),
            });
        }
        let positive = match self {
            Self::Logistic(model) => model.predict_positive(features),
            Self::GbdtStump(model) => model.predict_positive(features),
        };
        if !positive.is_finite() {
            return Err(ClassifierError::NonFinite);
        }
        Ok([1.0 - positive, positive])
    }
}

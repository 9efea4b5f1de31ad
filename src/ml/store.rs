//! Process-wide classifier handle loaded once at startup.

use std::path::Path;

use super::{ClassifierError, ModelArtifact};

/// Immutable classifier shared read-only by every request.
///
/// When the artifact cannot be loaded the handle is `unavailable`: the schema
/// is empty and every prediction fails with `ModelUnavailable` upstream.
#[derive(Debug, Clone)]
pub struct LoadedClassifier {
    model: Option<ModelArtifact>,
}

impl LoadedClassifier {
    /// Wrap an already validated model.
    pub fn from_model(model: ModelArtifact) -> Self {
        Self { model: Some(model) }
    }

    /// Handle without a model and with an empty schema.
    pub fn unavailable() -> Self {
        Self { model: None }
    }

    /// Load the artifact at `path`.
    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let model = ModelArtifact::load_json(path)?;
        tracing::info!(
            "Loaded classifier from {} ({} features)",
            path.display(),
            model.feature_names().len()
        );
        Ok(Self::from_model(model))
    }

    /// Load the artifact at `path`, falling back to an unavailable handle.
    pub fn load_or_unavailable(path: &Path) -> Self {
        match Self::load(path) {
            Ok(loaded) => loaded,
            Err(err) => {
                tracing::error!(
                    "Classifier unavailable ({}), predictions will fail: {err}",
                    path.display()
                );
                Self::unavailable()
            }
        }
    }

    /// Ordered input columns; empty when no model is loaded.
    pub fn schema(&self) -> &[String] {
        self.model
            .as_ref()
            .map(ModelArtifact::feature_names)
            .unwrap_or(&[])
    }

    pub fn model(&self) -> Option<&ModelArtifact> {
        self.model.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn failed_load_degrades_to_empty_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_stroke.json");
        std::fs::write(&path, "not json").unwrap();
        let loaded = LoadedClassifier::load_or_unavailable(&path);
        assert!(!loaded.is_available());
        assert!(loaded.schema().is_empty());
    }

    #[test]
    fn loaded_model_exposes_schema() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model_stroke.json");
        std::fs::write(
            &path,
            r#"{"kind":"logistic","feature_names":["age","bmi"],"weights":[0.1,0.2],"bias":-3}"#,
        )
        .unwrap();
        let loaded = LoadedClassifier::load(&path).unwrap();
        assert!(loaded.is_available());
        assert_eq!(loaded.schema(), ["age", "bmi"]);
    }
}

//! Binary classifiers used for stroke risk inference.
//!
//! Models are trained elsewhere and shipped as JSON artifacts. Each artifact
//! carries its ordered input schema (`feature_names`) next to the parameters.

pub mod artifact;
pub mod gbdt_stump;
pub mod logreg;
pub mod store;

pub use artifact::{ClassifierError, ModelArtifact};
pub use gbdt_stump::{GbdtStumpModel, Stump};
pub use logreg::LogisticModel;
pub use store::LoadedClassifier;

/// Numerically-stable logistic function.
pub fn sigmoid(raw: f32) -> f32 {
    if raw >= 0.0 {
        1.0 / (1.0 + (-raw).exp())
    } else {
        let e = raw.exp();
        e / (1.0 + e)
    }
}

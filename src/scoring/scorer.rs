//! Classifier inference plus heuristic overlay.

use std::sync::Arc;

use serde::Serialize;

use crate::features::{self, FeatureRow, PatientInput};
use crate::ml::LoadedClassifier;

use super::adjustment::{final_probability, heuristic_adjustment};
use super::error::ScoreError;
use super::verdict::RiskVerdict;

/// Intermediate values of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub raw_prob: f64,
    pub adjustment: f64,
    pub final_prob: f64,
    pub verdict: RiskVerdict,
}

/// Scores patients against the shared, read-only classifier.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    classifier: Arc<LoadedClassifier>,
}

impl RiskScorer {
    pub fn new(classifier: Arc<LoadedClassifier>) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &LoadedClassifier {
        &self.classifier
    }

    /// Assemble the classifier row for `input`.
    pub fn feature_row(&self, input: &PatientInput) -> FeatureRow {
        features::assemble(input, self.classifier.schema())
    }

    /// Positive-class probability straight from the classifier.
    pub fn raw_probability(&self, row: &FeatureRow) -> Result<f64, ScoreError> {
        let model = self.classifier.model().ok_or(ScoreError::ModelUnavailable)?;
        let [_, positive] = model.predict_proba(row.values())?;
        Ok(f64::from(positive))
    }

    /// Run the full pipeline and keep every intermediate value.
    pub fn evaluate(&self, input: &PatientInput) -> Result<ScoreBreakdown, ScoreError> {
        validate_input(input)?;
        let row = self.feature_row(input);
        let raw_prob = self.raw_probability(&row)?;
        let adjustment = heuristic_adjustment(input);
        let final_prob = final_probability(raw_prob, adjustment);
        let verdict = RiskVerdict::from_final_probability(final_prob);
        tracing::debug!(
            raw_prob,
            adjustment,
            final_prob,
            label = verdict.label.as_str(),
            "Scored submission"
        );
        Ok(ScoreBreakdown {
            raw_prob,
            adjustment,
            final_prob,
            verdict,
        })
    }

    pub fn score(&self, input: &PatientInput) -> Result<RiskVerdict, ScoreError> {
        self.evaluate(input).map(|breakdown| breakdown.verdict)
    }

    /// Request boundary: any failure becomes an ERROR verdict with a safe message.
    pub fn score_or_error_verdict(
        &self,
        input: Result<PatientInput, ScoreError>,
    ) -> RiskVerdict {
        match input.and_then(|input| self.score(&input)) {
            Ok(verdict) => verdict,
            Err(err) => {
                match &err {
                    ScoreError::InvalidInput { .. } | ScoreError::MalformedForm(_) => {
                        tracing::warn!("Rejected submission: {err}")
                    }
                    _ => tracing::error!("Scoring failed: {err}"),
                }
                RiskVerdict::from_error(&err)
            }
        }
    }
}

fn validate_input(input: &PatientInput) -> Result<(), ScoreError> {
    for (field, value) in [
        ("age", input.age),
        ("glucose_level", input.glucose_level),
        ("bmi", input.bmi),
    ] {
        if !value.is_finite() {
            return Err(ScoreError::invalid(field, format!("{value} is not a finite number")));
        }
    }
    if let features::Gender::Unrecognized(raw) = &input.gender {
        tracing::warn!("Unrecognized gender {raw:?}; no gender column will be set");
    }
    if let features::SmokingStatus::Unrecognized(raw) = &input.smoking_status {
        tracing::warn!("Unrecognized smoking status {raw:?}; no smoking column will be set");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{Gender, SmokingStatus};
    use crate::ml::{LogisticModel, ModelArtifact};
    use crate::scoring::verdict::RiskLabel;

    fn schema() -> Vec<String> {
        [
            "age",
            "hypertension",
            "heart_disease",
            "ever_married",
            "Residence_type",
            "avg_glucose_level",
            "bmi",
            "gender_Male",
            "work_type_Private",
            "smoking_status_never smoked",
            "smoking_status_smokes",
        ]
        .iter()
        .map(|name| name.to_string())
        .collect()
    }

    /// Logistic model whose only non-zero weight is on `age`.
    fn age_model(weight: f32, bias: f32) -> RiskScorer {
        let feature_names = schema();
        let mut weights = vec![0.0; feature_names.len()];
        weights[0] = weight;
        let model = ModelArtifact::Logistic(LogisticModel {
            feature_names,
            weights,
            bias,
        });
        RiskScorer::new(Arc::new(LoadedClassifier::from_model(model)))
    }

    fn patient(
        age: f64,
        hypertension: bool,
        heart_disease: bool,
        gender: &str,
        smoking: &str,
    ) -> PatientInput {
        PatientInput {
            name: Some("Budi".into()),
            age,
            glucose_level: 150.0,
            bmi: 28.0,
            hypertension,
            heart_disease,
            gender: Gender::parse(gender),
            smoking_status: SmokingStatus::parse(smoking),
        }
    }

    #[test]
    fn all_risk_factors_are_high_risk_regardless_of_model() {
        let scorer = age_model(0.0, -30.0);
        let breakdown = scorer
            .evaluate(&patient(70.0, true, true, "male", "smokes"))
            .unwrap();
        assert!(breakdown.raw_prob < 1e-6);
        assert!((breakdown.adjustment - 0.75).abs() < 1e-12);
        assert!(breakdown.final_prob >= 0.75);
        assert_eq!(breakdown.verdict.label, RiskLabel::HighRisk);
    }

    #[test]
    fn no_risk_factors_follow_the_model() {
        let input = patient(30.0, false, false, "female", "never");
        let low = age_model(0.0, -2.0).evaluate(&input).unwrap();
        assert_eq!(low.adjustment, 0.0);
        assert_eq!(low.final_prob, low.raw_prob);
        assert_eq!(low.verdict.label, RiskLabel::Normal);

        let high = age_model(0.1, 0.0).evaluate(&input).unwrap();
        assert!(high.raw_prob > 0.9);
        assert!(high.final_prob <= 0.99);
        assert_eq!(high.verdict.label, RiskLabel::HighRisk);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = age_model(0.05, -4.0);
        let input = patient(64.0, true, false, "male", "formerly");
        assert_eq!(scorer.score(&input).unwrap(), scorer.score(&input).unwrap());
    }

    #[test]
    fn unseen_smoking_status_does_not_error() {
        let scorer = age_model(0.0, 0.0);
        let breakdown = scorer
            .evaluate(&patient(70.0, false, false, "male", "occasionally"))
            .unwrap();
        assert_eq!(breakdown.adjustment, 0.0);
        assert_eq!(breakdown.raw_prob, 0.5);
        let row = scorer.feature_row(&patient(70.0, false, false, "male", "occasionally"));
        assert_eq!(row.get("smoking_status_smokes"), Some(0.0));
        assert_eq!(row.get("smoking_status_never smoked"), Some(0.0));
    }

    #[test]
    fn empty_schema_scores_the_bias_only_row() {
        let model = ModelArtifact::Logistic(LogisticModel {
            feature_names: Vec::new(),
            weights: Vec::new(),
            bias: -2.0,
        });
        let scorer = RiskScorer::new(Arc::new(LoadedClassifier::from_model(model)));
        let input = patient(30.0, false, false, "female", "never");
        assert!(scorer.feature_row(&input).is_empty());
        let breakdown = scorer.evaluate(&input).unwrap();
        // sigmoid(-2)
        assert!((breakdown.raw_prob - 0.119_202_92).abs() < 1e-6);
        assert_eq!(breakdown.verdict.probability_percent, 11.9);
    }

    #[test]
    fn missing_model_becomes_error_verdict() {
        let scorer = RiskScorer::new(Arc::new(LoadedClassifier::unavailable()));
        let input = patient(30.0, false, false, "female", "never");
        assert!(matches!(
            scorer.score(&input),
            Err(ScoreError::ModelUnavailable)
        ));
        let verdict = scorer.score_or_error_verdict(Ok(input));
        assert_eq!(verdict.label, RiskLabel::Error);
        assert_eq!(verdict.probability_percent, 0.0);
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let scorer = age_model(0.0, 0.0);
        let mut input = patient(30.0, false, false, "female", "never");
        input.bmi = f64::NAN;
        assert!(matches!(
            scorer.score(&input),
            Err(ScoreError::InvalidInput { field: "bmi", .. })
        ));
        input.bmi = f64::INFINITY;
        assert!(matches!(
            scorer.score(&input),
            Err(ScoreError::InvalidInput { field: "bmi", .. })
        ));
    }

    #[test]
    fn negative_measurements_are_scored_as_given() {
        let scorer = age_model(1.0, 0.0);
        let mut input = patient(-1.0, false, false, "female", "never");
        input.glucose_level = -5.0;
        let breakdown = scorer.evaluate(&input).unwrap();
        let expected = 1.0 / (1.0 + 1.0_f64.exp());
        assert!((breakdown.raw_prob - expected).abs() < 1e-5);
        assert_eq!(breakdown.verdict.label, RiskLabel::Normal);
    }
}

//! Form-encoded submission of the analysis page.

use serde::Deserialize;

use crate::features::{Gender, PatientInput, SmokingStatus};
use crate::scoring::ScoreError;

/// Raw `POST /predict` fields. Every value stays a string so malformed input
/// surfaces as a [`ScoreError::InvalidInput`] instead of a framework rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PredictForm {
    #[serde(alias = "nama")]
    pub name: Option<String>,
    #[serde(alias = "usia")]
    pub age: Option<String>,
    #[serde(alias = "gula")]
    pub glucose_level: Option<String>,
    pub bmi: Option<String>,
    #[serde(alias = "hipertensi")]
    pub hypertension: Option<String>,
    #[serde(alias = "jantung")]
    pub heart_disease: Option<String>,
    pub gender: Option<String>,
    #[serde(alias = "rokok")]
    pub smoking_status: Option<String>,
}

impl PredictForm {
    /// Validate and convert into a typed patient input.
    pub fn into_patient(self) -> Result<PatientInput, ScoreError> {
        Ok(PatientInput {
            name: self
                .name
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            age: parse_number("age", self.age.as_deref())?,
            glucose_level: parse_number("glucose_level", self.glucose_level.as_deref())?,
            bmi: parse_number("bmi", self.bmi.as_deref())?,
            hypertension: parse_flag("hypertension", self.hypertension.as_deref())?,
            heart_disease: parse_flag("heart_disease", self.heart_disease.as_deref())?,
            gender: Gender::parse(required("gender", self.gender.as_deref())?),
            smoking_status: SmokingStatus::parse(required(
                "smoking_status",
                self.smoking_status.as_deref(),
            )?),
        })
    }
}

fn required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, ScoreError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ScoreError::invalid(field, "missing value")),
    }
}

fn parse_number(field: &'static str, value: Option<&str>) -> Result<f64, ScoreError> {
    let value = required(field, value)?;
    value
        .parse::<f64>()
        .map_err(|err| ScoreError::invalid(field, format!("{value:?}: {err}")))
}

fn parse_flag(field: &'static str, value: Option<&str>) -> Result<bool, ScoreError> {
    let value = required(field, value)?;
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ScoreError::invalid(field, format!("{value:?} is not a yes/no flag"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PredictForm {
        PredictForm {
            name: Some("  Siti ".into()),
            age: Some("70".into()),
            glucose_level: Some("150.5".into()),
            bmi: Some("28".into()),
            hypertension: Some("1".into()),
            heart_disease: Some("0".into()),
            gender: Some("male".into()),
            smoking_status: Some("smokes".into()),
        }
    }

    #[test]
    fn converts_valid_submission() {
        let input = form().into_patient().unwrap();
        assert_eq!(input.name.as_deref(), Some("Siti"));
        assert_eq!(input.glucose_level, 150.5);
        assert!(input.hypertension);
        assert!(!input.heart_disease);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.smoking_status, SmokingStatus::Smokes);
    }

    #[test]
    fn non_numeric_age_is_invalid_input() {
        let mut bad = form();
        bad.age = Some("seventy".into());
        assert!(matches!(
            bad.into_patient(),
            Err(ScoreError::InvalidInput { field: "age", .. })
        ));
    }

    #[test]
    fn missing_and_malformed_flags_are_rejected() {
        let mut bad = form();
        bad.heart_disease = None;
        assert!(matches!(
            bad.into_patient(),
            Err(ScoreError::InvalidInput {
                field: "heart_disease",
                ..
            })
        ));
        let mut bad = form();
        bad.hypertension = Some("2".into());
        assert!(bad.into_patient().is_err());
    }

    #[test]
    fn blank_name_is_dropped() {
        let mut anonymous = form();
        anonymous.name = Some("   ".into());
        assert_eq!(anonymous.into_patient().unwrap().name, None);
    }
}

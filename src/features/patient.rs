//! Typed patient input collected from the analysis form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::columns;

/// Vitals and history of one patient, constructed per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Display-only name, never fed to the model.
    pub name: Option<String>,
    pub age: f64,
    pub glucose_level: f64,
    pub bmi: f64,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub gender: Gender,
    pub smoking_status: SmokingStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    /// A value outside the known categories, kept verbatim.
    Unrecognized(String),
}

impl Gender {
    /// Parse a form value, case-insensitively.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            "other" => Self::Other,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// One-hot column this value sets to 1.
    pub fn column(&self) -> String {
        match self {
            Self::Male => columns::GENDER_MALE.to_string(),
            Self::Female => columns::GENDER_FEMALE.to_string(),
            Self::Other => columns::GENDER_OTHER.to_string(),
            Self::Unrecognized(raw) => format!("{}{raw}", columns::GENDER_PREFIX),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("Male"),
            Self::Female => f.write_str("Female"),
            Self::Other => f.write_str("Other"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    Smokes,
    NeverSmoked,
    FormerlySmoked,
    Unknown,
    /// A value outside the known categories, kept verbatim.
    Unrecognized(String),
}

impl SmokingStatus {
    /// Parse a form value; accepts short forms and the dataset spellings.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "smokes" => Self::Smokes,
            "never" | "never smoked" | "never_smoked" => Self::NeverSmoked,
            "formerly" | "formerly smoked" | "formerly_smoked" => Self::FormerlySmoked,
            "unknown" => Self::Unknown,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// One-hot column this value sets to 1.
    pub fn column(&self) -> String {
        match self {
            Self::Smokes => columns::SMOKING_SMOKES.to_string(),
            Self::NeverSmoked => columns::SMOKING_NEVER.to_string(),
            Self::FormerlySmoked => columns::SMOKING_FORMERLY.to_string(),
            Self::Unknown => columns::SMOKING_UNKNOWN.to_string(),
            Self::Unrecognized(raw) => format!("{}{raw}", columns::SMOKING_PREFIX),
        }
    }

    pub fn is_smoker(&self) -> bool {
        matches!(self, Self::Smokes)
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Smokes => f.write_str("smokes"),
            Self::NeverSmoked => f.write_str("never smoked"),
            Self::FormerlySmoked => f.write_str("formerly smoked"),
            Self::Unknown => f.write_str("Unknown"),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

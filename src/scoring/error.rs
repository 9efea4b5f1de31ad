use thiserror::Error;

use crate::ml::ClassifierError;

/// Reasons a submission could not be scored.
///
/// `Display` carries internal detail for logs; users only ever see
/// [`ScoreError::user_message`].
#[derive(Debug, Error)]
pub enum ScoreError {
    /// A form field is missing or malformed.
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    /// The request body could not be decoded as a form at all.
    #[error("Unreadable form submission: {0}")]
    MalformedForm(String),
    /// No classifier was loaded at startup.
    #[error("Classifier is not loaded")]
    ModelUnavailable,
    /// The classifier rejected the row or produced an unusable value.
    #[error("Classifier failure: {0}")]
    Classifier(#[from] ClassifierError),
}

impl ScoreError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Fixed text that is safe to render to the end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput { field, .. } => format!(
                "Please check the \"{}\" field and submit again.",
                field_label(field)
            ),
            Self::MalformedForm(_) => {
                "The form could not be read. Please fill it in and submit again.".to_string()
            }
            Self::ModelUnavailable => {
                "The risk model is currently unavailable. Please try again later.".to_string()
            }
            Self::Classifier(_) => {
                "The risk analysis could not be completed. Please try again later.".to_string()
            }
        }
    }
}

fn field_label(field: &str) -> &str {
    match field {
        "age" => "Age",
        "glucose_level" => "Average glucose level",
        "bmi" => "BMI",
        "hypertension" => "Hypertension",
        "heart_disease" => "Heart disease",
        "gender" => "Gender",
        "smoking_status" => "Smoking status",
        other => other,
    }
}

//! User-facing risk verdicts.

use serde::{Deserialize, Serialize};

use super::error::ScoreError;

/// Scores strictly above this classify as high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.40;

pub const HIGH_RISK_MESSAGE: &str =
    "Significant stroke risk indicators detected. Please consult a doctor as soon as possible.";
pub const NORMAL_MESSAGE: &str =
    "No significant risk detected. Keep up a healthy lifestyle.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLabel {
    HighRisk,
    Normal,
    Error,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HighRisk => "HIGH_RISK",
            Self::Normal => "NORMAL",
            Self::Error => "ERROR",
        }
    }
}

/// Bootstrap-style alert class used by the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityStyle {
    Danger,
    Success,
    Warning,
}

impl SeverityStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// Outcome shown to the user for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub label: RiskLabel,
    /// `final_prob * 100`, rounded to one decimal.
    pub probability_percent: f64,
    pub style: SeverityStyle,
    pub icon: String,
    pub message: String,
}

impl RiskVerdict {
    /// Classify a final score against the fixed threshold.
    pub fn from_final_probability(final_prob: f64) -> Self {
        let probability_percent = round_percent(final_prob);
        if final_prob > HIGH_RISK_THRESHOLD {
            Self {
                label: RiskLabel::HighRisk,
                probability_percent,
                style: SeverityStyle::Danger,
                icon: "⚠️".to_string(),
                message: HIGH_RISK_MESSAGE.to_string(),
            }
        } else {
            Self {
                label: RiskLabel::Normal,
                probability_percent,
                style: SeverityStyle::Success,
                icon: "✅".to_string(),
                message: NORMAL_MESSAGE.to_string(),
            }
        }
    }

    /// Error verdict carrying only the safe message for `err`.
    pub fn from_error(err: &ScoreError) -> Self {
        Self {
            label: RiskLabel::Error,
            probability_percent: 0.0,
            style: SeverityStyle::Warning,
            icon: "❗".to_string(),
            message: err.user_message(),
        }
    }

    /// Percentage formatted for display, e.g. `"75.0%"`.
    pub fn percent_display(&self) -> String {
        format!("{:.1}%", self.probability_percent)
    }
}

fn round_percent(final_prob: f64) -> f64 {
    (final_prob * 1000.0).round() / 10.0
}

//! Additive heuristic overlay applied on top of the model probability.

use crate::features::PatientInput;

pub const HEART_DISEASE_BONUS: f64 = 0.35;
pub const HYPERTENSION_BONUS: f64 = 0.25;
pub const SMOKER_OVER_50_BONUS: f64 = 0.15;
/// Ages strictly above this count for the smoker bonus.
pub const SMOKER_AGE_THRESHOLD: f64 = 50.0;
/// Upper cap so the display never reaches 100%.
pub const FINAL_PROBABILITY_CAP: f64 = 0.99;

/// Sum of the fixed risk-factor bonuses for `input`.
pub fn heuristic_adjustment(input: &PatientInput) -> f64 {
    let mut adj = 0.0;
    if input.heart_disease {
        adj += HEART_DISEASE_BONUS;
    }
    if input.hypertension {
        adj += HYPERTENSION_BONUS;
    }
    if input.age > SMOKER_AGE_THRESHOLD && input.smoking_status.is_smoker() {
        adj += SMOKER_OVER_50_BONUS;
    }
    adj
}

/// `min(raw_prob + adj, 0.99)`. Not a calibrated probability once `adj > 0`.
pub fn final_probability(raw_prob: f64, adj: f64) -> f64 {
    (raw_prob + adj).min(FINAL_PROBABILITY_CAP)
}

//! Canonical column names of the stroke dataset schema.

pub const AGE: &str = "age";
pub const AVG_GLUCOSE_LEVEL: &str = "avg_glucose_level";
pub const BMI: &str = "bmi";
pub const HYPERTENSION: &str = "hypertension";
pub const HEART_DISEASE: &str = "heart_disease";

pub const EVER_MARRIED: &str = "ever_married";
pub const RESIDENCE_TYPE: &str = "Residence_type";
pub const WORK_TYPE_PRIVATE: &str = "work_type_Private";

pub const GENDER_PREFIX: &str = "gender_";
pub const GENDER_MALE: &str = "gender_Male";
pub const GENDER_FEMALE: &str = "gender_Female";
pub const GENDER_OTHER: &str = "gender_Other";

pub const SMOKING_PREFIX: &str = "smoking_status_";
pub const SMOKING_SMOKES: &str = "smoking_status_smokes";
pub const SMOKING_NEVER: &str = "smoking_status_never smoked";
pub const SMOKING_FORMERLY: &str = "smoking_status_formerly smoked";
pub const SMOKING_UNKNOWN: &str = "smoking_status_Unknown";

/// Columns mapped directly from patient measurements.
pub const DIRECT: [&str; 5] = [AGE, AVG_GLUCOSE_LEVEL, BMI, HYPERTENSION, HEART_DISEASE];

/// Indicator columns fixed to 1 for every prediction.
pub const CONSTANT_ONES: [&str; 3] = [EVER_MARRIED, RESIDENCE_TYPE, WORK_TYPE_PRIVATE];

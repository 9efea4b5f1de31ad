//! Assembly of schema-ordered feature rows from patient input.

use std::collections::HashMap;

use super::columns;
use super::patient::PatientInput;

/// Numeric model input: exactly the schema's columns, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f32>,
}

impl FeatureRow {
    /// Reindex sparse `(column, value)` pairs against an ordered schema.
    ///
    /// Schema columns without a pair are 0; pairs outside the schema are
    /// dropped. Later pairs win when a column repeats.
    pub fn reindex(sparse: &[(String, f32)], schema: &[String]) -> Self {
        let lookup: HashMap<&str, f32> = sparse
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        let values = schema
            .iter()
            .map(|name| lookup.get(name.as_str()).copied().unwrap_or(0.0))
            .collect();
        Self {
            columns: schema.to_vec(),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order, ready for the classifier.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f32> {
        self.columns
            .iter()
            .position(|name| name == column)
            .map(|idx| self.values[idx])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// Sparse features produced from the input before reindexing.
pub fn sparse_features(input: &PatientInput) -> Vec<(String, f32)> {
    let mut sparse = vec![
        (columns::AGE.to_string(), input.age as f32),
        (columns::AVG_GLUCOSE_LEVEL.to_string(), input.glucose_level as f32),
        (columns::BMI.to_string(), input.bmi as f32),
        (columns::HYPERTENSION.to_string(), flag(input.hypertension)),
        (columns::HEART_DISEASE.to_string(), flag(input.heart_disease)),
    ];
    sparse.extend(
        columns::CONSTANT_ONES
            .iter()
            .map(|name| (name.to_string(), 1.0)),
    );
    sparse.push((input.gender.column(), 1.0));
    sparse.push((input.smoking_status.column(), 1.0));
    sparse
}

/// Build the classifier input row for `input` under `schema`.
pub fn assemble(input: &PatientInput, schema: &[String]) -> FeatureRow {
    let sparse = sparse_features(input);
    for one_hot in [input.gender.column(), input.smoking_status.column()] {
        if !schema.iter().any(|name| *name == one_hot) {
            tracing::debug!("Column {one_hot:?} not in model schema; dropped");
        }
    }
    FeatureRow::reindex(&sparse, schema)
}

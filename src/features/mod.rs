//! Feature assembly: patient input to schema-ordered classifier rows.

pub mod assembler;
pub mod columns;
pub mod patient;

pub use assembler::{FeatureRow, assemble};
pub use patient::{Gender, PatientInput, SmokingStatus};

/// Result of checking a model schema against the columns the assembler emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Direct measurement columns the schema lacks.
    pub missing: Vec<&'static str>,
    /// Schema columns the assembler never produces; always 0 at inference.
    pub never_set: Vec<String>,
}

impl SchemaReport {
    /// True when every direct measurement reaches the model.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare `schema` with the assembler's output columns.
pub fn check_schema(schema: &[String]) -> SchemaReport {
    let missing = columns::DIRECT
        .iter()
        .copied()
        .filter(|name| !schema.iter().any(|column| column.as_str() == *name))
        .collect();
    let never_set = schema
        .iter()
        .filter(|column| !is_produced(column))
        .cloned()
        .collect();
    SchemaReport { missing, never_set }
}

fn is_produced(column: &str) -> bool {
    const ONE_HOT: [&str; 7] = [
        columns::GENDER_MALE,
        columns::GENDER_FEMALE,
        columns::GENDER_OTHER,
        columns::SMOKING_SMOKES,
        columns::SMOKING_NEVER,
        columns::SMOKING_FORMERLY,
        columns::SMOKING_UNKNOWN,
    ];
    columns::DIRECT
        .iter()
        .chain(columns::CONSTANT_ONES.iter())
        .chain(ONE_HOT.iter())
        .any(|name| *name == column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_missing_direct_columns_and_dead_columns() {
        let schema: Vec<String> = ["age", "bmi", "work_type_children", "gender_Male"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        let report = check_schema(&schema);
        assert_eq!(
            report.missing,
            vec!["avg_glucose_level", "hypertension", "heart_disease"]
        );
        assert_eq!(report.never_set, vec!["work_type_children".to_string()]);
        assert!(!report.is_complete());
    }

    #[test]
    fn empty_schema_is_incomplete() {
        assert_eq!(check_schema(&[]).missing.len(), columns::DIRECT.len());
    }
}

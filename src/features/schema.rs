//! Column layout resolved once per artifact.
//!
//! The classifier is order-sensitive and the scaler was fitted on a fixed column
//! order, so every column name the builder may write is resolved to a slot here,
//! at load time. Per-call feature building is then pure index arithmetic.
//!
//! Working row layout: `feature_names` in order, followed by any scale column
//! that is not also a feature. Projecting onto the features is taking the prefix.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Category, LoanPurpose, LoanType, ResidenceType};
use crate::error::AppError;

/// Numeric columns produced directly (or derived) from applicant input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFeature {
    Age,
    LoanTenureMonths,
    NumberOfOpenAccounts,
    CreditUtilizationRatio,
    LoanToIncome,
    DelinquencyRatio,
    AvgDpdPerDelinquency,
}

impl NumericFeature {
    pub const ALL: [NumericFeature; 7] = [
        NumericFeature::Age,
        NumericFeature::LoanTenureMonths,
        NumericFeature::NumberOfOpenAccounts,
        NumericFeature::CreditUtilizationRatio,
        NumericFeature::LoanToIncome,
        NumericFeature::DelinquencyRatio,
        NumericFeature::AvgDpdPerDelinquency,
    ];

    /// Column name used in the training data.
    pub fn column_name(self) -> &'static str {
        match self {
            NumericFeature::Age => "age",
            NumericFeature::LoanTenureMonths => "loan_tenure_months",
            NumericFeature::NumberOfOpenAccounts => "number_of_open_accounts",
            NumericFeature::CreditUtilizationRatio => "credit_utilization_ratio",
            NumericFeature::LoanToIncome => "loan_to_income",
            NumericFeature::DelinquencyRatio => "delinquency_ratio",
            NumericFeature::AvgDpdPerDelinquency => "avg_dpd_per_delinquency",
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

/// Resolved column layout of a model artifact.
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    feature_names: Vec<String>,
    scale_columns: Vec<String>,
    columns: Vec<String>,
    scale_slots: Vec<usize>,
    numeric_slots: Vec<Option<usize>>,
    residence_slots: Vec<Option<usize>>,
    purpose_slots: Vec<Option<usize>>,
    loan_type_slots: Vec<Option<usize>>,
}

impl FeatureSchema {
    /// Resolve and validate the layout for the given feature and scale columns.
    ///
    /// Fails (exit code 3) on an empty feature list, duplicate names, or a
    /// one-hot column naming a category this build does not know.
    pub fn new(feature_names: Vec<String>, scale_columns: Vec<String>) -> Result<Self, AppError> {
        if feature_names.is_empty() {
            return Err(AppError::new(3, "Artifact lists no feature columns."));
        }
        ensure_unique(&feature_names, "features")?;
        ensure_unique(&scale_columns, "cols_to_scale")?;

        let mut columns = feature_names.clone();
        let mut index: HashMap<String, usize> = feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        for name in &scale_columns {
            if !index.contains_key(name) {
                index.insert(name.clone(), columns.len());
                columns.push(name.clone());
            }
        }

        ensure_known_categories::<ResidenceType>(&columns)?;
        ensure_known_categories::<LoanPurpose>(&columns)?;
        ensure_known_categories::<LoanType>(&columns)?;

        let scale_slots = scale_columns.iter().map(|name| index[name.as_str()]).collect();
        let numeric_slots = NumericFeature::ALL
            .iter()
            .map(|f| index.get(f.column_name()).copied())
            .collect();

        let schema = Self {
            feature_names,
            scale_columns,
            columns,
            scale_slots,
            numeric_slots,
            residence_slots: resolve_category_slots::<ResidenceType>(&index),
            purpose_slots: resolve_category_slots::<LoanPurpose>(&index),
            loan_type_slots: resolve_category_slots::<LoanType>(&index),
        };

        debug!(
            features = schema.feature_names.len(),
            scale_columns = schema.scale_columns.len(),
            width = schema.columns.len(),
            "resolved feature schema"
        );

        Ok(schema)
    }

    /// Ordered columns the classifier expects.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Ordered columns the scaler was fitted on.
    pub fn scale_columns(&self) -> &[String] {
        &self.scale_columns
    }

    /// Every column of the working row, features first.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Working-row slots of the scale columns, in scaler order.
    pub fn scale_slots(&self) -> &[usize] {
        &self.scale_slots
    }

    pub fn numeric_slot(&self, feature: NumericFeature) -> Option<usize> {
        self.numeric_slots[feature.ordinal()]
    }

    pub fn residence_slot(&self, value: ResidenceType) -> Option<usize> {
        category_slot(&self.residence_slots, value)
    }

    pub fn purpose_slot(&self, value: LoanPurpose) -> Option<usize> {
        category_slot(&self.purpose_slots, value)
    }

    pub fn loan_type_slot(&self, value: LoanType) -> Option<usize> {
        category_slot(&self.loan_type_slots, value)
    }
}

fn ensure_unique(names: &[String], list: &str) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(names.len());
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(AppError::new(
                3,
                format!("Artifact '{list}' lists column '{name}' more than once."),
            ));
        }
    }
    Ok(())
}

fn ensure_known_categories<C: Category>(columns: &[String]) -> Result<(), AppError> {
    let prefix = C::column_prefix();
    for column in columns.iter().filter(|c| c.starts_with(&prefix)) {
        let known = C::ALL.iter().any(|c| c.column_name() == *column);
        if !known {
            return Err(AppError::new(
                3,
                format!(
                    "Artifact column '{column}' does not match any known {} category.",
                    C::FIELD
                ),
            ));
        }
    }
    Ok(())
}

fn resolve_category_slots<C: Category>(index: &HashMap<String, usize>) -> Vec<Option<usize>> {
    C::ALL
        .iter()
        .map(|c| {
            let slot = index.get(&c.column_name()).copied();
            if slot.is_none() {
                // Usually the dropped reference level of the one-hot group.
                debug!(column = %c.column_name(), "category has no column in artifact");
            }
            slot
        })
        .collect()
}

fn category_slot<C: Category>(slots: &[Option<usize>], value: C) -> Option<usize> {
    slots.get(value.ordinal()).copied().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scale_only_columns_extend_the_working_row() {
        let schema = FeatureSchema::new(
            names(&["age", "loan_to_income", "loan_type_Unsecured"]),
            names(&["age", "income", "loan_to_income"]),
        )
        .unwrap();

        assert_eq!(schema.width(), 4);
        assert_eq!(schema.columns()[3], "income");
        assert_eq!(schema.scale_slots(), &[0, 3, 1]);
        assert_eq!(schema.numeric_slot(NumericFeature::Age), Some(0));
        assert_eq!(schema.numeric_slot(NumericFeature::LoanToIncome), Some(1));
        assert_eq!(schema.numeric_slot(NumericFeature::DelinquencyRatio), None);
    }

    #[test]
    fn resolves_category_slots_and_reference_levels() {
        let schema = FeatureSchema::new(
            names(&["residence_type_Owned", "residence_type_Rented", "loan_type_Unsecured"]),
            vec![],
        )
        .unwrap();

        assert_eq!(schema.residence_slot(ResidenceType::Owned), Some(0));
        assert_eq!(schema.residence_slot(ResidenceType::Rented), Some(1));
        assert_eq!(schema.residence_slot(ResidenceType::Mortgage), None);
        assert_eq!(schema.loan_type_slot(LoanType::Unsecured), Some(2));
        assert_eq!(schema.loan_type_slot(LoanType::Secured), None);
        assert_eq!(schema.purpose_slot(LoanPurpose::Home), None);
    }

    #[test]
    fn rejects_unknown_one_hot_column() {
        let err = FeatureSchema::new(names(&["age", "loan_purpose_Vacation"]), vec![]).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.message().contains("loan_purpose_Vacation"));
    }

    #[test]
    fn numeric_columns_sharing_a_prefix_are_not_categories() {
        // `loan_tenure_months` / `loan_to_income` must not be mistaken for one-hot columns.
        assert!(FeatureSchema::new(names(&["loan_tenure_months", "loan_to_income"]), vec![]).is_ok());
    }

    #[test]
    fn rejects_duplicates_and_empty_features() {
        assert_eq!(FeatureSchema::new(vec![], vec![]).unwrap_err().exit_code(), 3);
        assert!(FeatureSchema::new(names(&["age", "age"]), vec![]).is_err());
        assert!(FeatureSchema::new(names(&["age"]), names(&["age", "age"])).is_err());
    }
}

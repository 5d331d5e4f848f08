//! Build a model-ready feature row from raw applicant attributes.
//!
//! Steps (all against a `FeatureSchema` resolved at load time):
//! 1) zero-filled working row covering features + scale columns
//! 2) numeric inputs and the derived `loan_to_income`
//! 3) one-hot indicators for the selected categories
//! 4) scaler transform over the scale columns, in scaler order
//! 5) projection onto the feature columns

use nalgebra::DVector;

use crate::domain::ApplicantInput;
use crate::error::AppError;
use crate::features::schema::{FeatureSchema, NumericFeature};
use crate::models::Scaler;

/// One feature row aligned to the classifier's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow<'a> {
    names: &'a [String],
    values: DVector<f64>,
}

impl<'a> FeatureRow<'a> {
    pub fn names(&self) -> &'a [String] {
        self.names
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a named column, if the row has it.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Loan amount relative to income; `0.0` unless income is positive.
pub fn loan_to_income(loan_amount: f64, income: f64) -> f64 {
    if income > 0.0 { loan_amount / income } else { 0.0 }
}

fn numeric_value(feature: NumericFeature, input: &ApplicantInput) -> f64 {
    match feature {
        NumericFeature::Age => f64::from(input.age),
        NumericFeature::LoanTenureMonths => f64::from(input.loan_tenure_months),
        NumericFeature::NumberOfOpenAccounts => f64::from(input.num_open_accounts),
        NumericFeature::CreditUtilizationRatio => input.credit_utilization_ratio,
        NumericFeature::LoanToIncome => loan_to_income(input.loan_amount, input.income),
        NumericFeature::DelinquencyRatio => input.delinquency_ratio,
        NumericFeature::AvgDpdPerDelinquency => input.avg_dpd_per_delinquency,
    }
}

/// Unscaled working row: inputs and indicators written, everything else `0.0`.
fn raw_working_row(input: &ApplicantInput, schema: &FeatureSchema) -> DVector<f64> {
    let mut row = DVector::zeros(schema.width());

    for feature in NumericFeature::ALL {
        if let Some(slot) = schema.numeric_slot(feature) {
            row[slot] = numeric_value(feature, input);
        }
    }

    // A category without a column (reference level or unknown value) sets nothing.
    let one_hot = [
        input.residence_type.and_then(|v| schema.residence_slot(v)),
        input.loan_purpose.and_then(|v| schema.purpose_slot(v)),
        input.loan_type.and_then(|v| schema.loan_type_slot(v)),
    ];
    for slot in one_hot.into_iter().flatten() {
        row[slot] = 1.0;
    }

    row
}

/// Build the scaled feature row for one applicant.
///
/// Errors only if the scaler rejects the scale columns (schema drift).
pub fn build_feature_row<'a>(
    input: &ApplicantInput,
    schema: &'a FeatureSchema,
    scaler: &dyn Scaler,
) -> Result<FeatureRow<'a>, AppError> {
    let mut row = raw_working_row(input, schema);

    let slots = schema.scale_slots();
    let mut scaled = DVector::from_iterator(slots.len(), slots.iter().map(|&s| row[s]));
    scaler.transform(&mut scaled)?;
    for (&slot, &value) in slots.iter().zip(scaled.iter()) {
        row[slot] = value;
    }

    let names = schema.feature_names();
    let values = row.rows(0, names.len()).into_owned();

    Ok(FeatureRow { names, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, LoanPurpose, LoanType, ResidenceType};
    use crate::models::MinMaxScaler;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn applicant() -> ApplicantInput {
        ApplicantInput {
            age: 35,
            income: 50_000.0,
            loan_amount: 10_000.0,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 2.0,
            delinquency_ratio: 0.1,
            credit_utilization_ratio: 0.3,
            num_open_accounts: 4,
            residence_type: Some(ResidenceType::Owned),
            loan_purpose: Some(LoanPurpose::Home),
            loan_type: Some(LoanType::Unsecured),
        }
    }

    fn schema() -> FeatureSchema {
        FeatureSchema::new(
            names(&[
                "age",
                "loan_to_income",
                "residence_type_Owned",
                "residence_type_Rented",
                "loan_purpose_Home",
                "loan_type_Unsecured",
            ]),
            names(&["age", "income", "loan_to_income"]),
        )
        .unwrap()
    }

    fn scaler() -> MinMaxScaler {
        MinMaxScaler::from_fitted(&[18.0, 0.0, 0.0], &[68.0, 100_000.0, 2.0], (0.0, 1.0)).unwrap()
    }

    #[test]
    fn loan_to_income_guards_non_positive_income() {
        assert!((loan_to_income(10_000.0, 50_000.0) - 0.2).abs() < 1e-12);
        assert_eq!(loan_to_income(10_000.0, 0.0), 0.0);
        assert_eq!(loan_to_income(10_000.0, -5.0), 0.0);
        assert_eq!(loan_to_income(10_000.0, f64::NAN), 0.0);
    }

    #[test]
    fn row_matches_feature_columns_in_order() {
        let schema = schema();
        let row = build_feature_row(&applicant(), &schema, &scaler()).unwrap();

        let got: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(
            got,
            vec![
                "age",
                "loan_to_income",
                "residence_type_Owned",
                "residence_type_Rented",
                "loan_purpose_Home",
                "loan_type_Unsecured",
            ]
        );

        // age: (35 - 18) / 50, loan_to_income: 0.2 / 2
        assert!((row.get("age").unwrap() - 0.34).abs() < 1e-12);
        assert!((row.get("loan_to_income").unwrap() - 0.1).abs() < 1e-12);
        assert_eq!(row.get("residence_type_Owned"), Some(1.0));
        assert_eq!(row.get("residence_type_Rented"), Some(0.0));
        assert_eq!(row.get("loan_purpose_Home"), Some(1.0));
        assert_eq!(row.get("loan_type_Unsecured"), Some(1.0));
        // Scale-only columns never reach the classifier.
        assert_eq!(row.get("income"), None);
    }

    #[test]
    fn reference_level_sets_no_indicator() {
        let schema = schema();
        let mut input = applicant();
        input.residence_type = Some(ResidenceType::Mortgage);
        input.loan_type = Some(LoanType::Secured);

        let row = build_feature_row(&input, &schema, &scaler()).unwrap();
        assert_eq!(row.len(), schema.feature_names().len());
        assert_eq!(row.get("residence_type_Owned"), Some(0.0));
        assert_eq!(row.get("residence_type_Rented"), Some(0.0));
        assert_eq!(row.get("loan_type_Unsecured"), Some(0.0));
    }

    #[test]
    fn unset_category_equals_unknown_category() {
        let schema = schema();
        let mut unset = applicant();
        unset.loan_purpose = None;
        let mut unknown = applicant();
        unknown.loan_purpose = LoanPurpose::parse("Vacation");

        let a = build_feature_row(&unset, &schema, &scaler()).unwrap();
        let b = build_feature_row(&unknown, &schema, &scaler()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get("loan_purpose_Home"), Some(0.0));
    }

    #[test]
    fn zero_income_yields_zero_ratio_before_scaling() {
        let schema = schema();
        let mut input = applicant();
        input.income = 0.0;
        let row = build_feature_row(&input, &schema, &scaler()).unwrap();
        assert_eq!(row.get("loan_to_income"), Some(0.0));
    }

    #[test]
    fn scaler_width_mismatch_is_reported() {
        let schema = schema();
        let narrow = MinMaxScaler::from_fitted(&[0.0], &[1.0], (0.0, 1.0)).unwrap();
        let err = build_feature_row(&applicant(), &schema, &narrow).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}

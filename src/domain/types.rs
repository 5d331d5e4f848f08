//! Shared domain types.
//!
//! These types are intentionally kept small and serializable so they can be:
//!
//! - built from CLI flags (or by any other caller of the library)
//! - passed by reference through feature building and scoring
//! - reloaded from / written to JSON (artifact file, `--json` output)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A closed set of categories for one categorical applicant attribute.
///
/// The one-hot column for a category is `"<FIELD>_<label>"`. It is fixed at
/// build time so that it can be resolved against the artifact's columns once,
/// at load time, instead of being discovered per call.
pub trait Category: Copy + PartialEq + std::fmt::Debug + 'static {
    /// Field name used as the one-hot column prefix.
    const FIELD: &'static str;

    /// Every category, in declaration order.
    const ALL: &'static [Self];

    /// Label exactly as it appears in the training data.
    fn label(self) -> &'static str;

    /// One-hot column name for this category.
    fn column_name(self) -> String {
        format!("{}_{}", Self::FIELD, self.label())
    }

    /// Position of this category within `ALL`.
    fn ordinal(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or(Self::ALL.len())
    }

    /// Parse a raw label. The match is exact, because the label is spliced
    /// verbatim into the one-hot column name the model was trained on.
    ///
    /// Returns `None` for unknown labels; callers treat that as "unset".
    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == raw)
    }

    /// Prefix shared by every one-hot column of this field.
    fn column_prefix() -> String {
        format!("{}_", Self::FIELD)
    }
}

/// Parse an optional raw label into a category.
///
/// Unknown labels are not an error: they are logged and treated as unset, so
/// the row carries no indicator for that field.
pub fn parse_category<C: Category>(raw: Option<&str>) -> Option<C> {
    let raw = raw?;
    let parsed = C::parse(raw);
    if parsed.is_none() {
        warn!(field = C::FIELD, value = raw, "unknown category, no indicator will be set");
    }
    parsed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidenceType {
    Owned,
    Rented,
    Mortgage,
}

impl Category for ResidenceType {
    const FIELD: &'static str = "residence_type";
    const ALL: &'static [Self] = &[Self::Owned, Self::Rented, Self::Mortgage];

    fn label(self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Mortgage => "Mortgage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPurpose {
    Education,
    Home,
    Auto,
    Personal,
}

impl Category for LoanPurpose {
    const FIELD: &'static str = "loan_purpose";
    const ALL: &'static [Self] = &[Self::Education, Self::Home, Self::Auto, Self::Personal];

    fn label(self) -> &'static str {
        match self {
            LoanPurpose::Education => "Education",
            LoanPurpose::Home => "Home",
            LoanPurpose::Auto => "Auto",
            LoanPurpose::Personal => "Personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanType {
    Secured,
    Unsecured,
}

impl Category for LoanType {
    const FIELD: &'static str = "loan_type";
    const ALL: &'static [Self] = &[Self::Secured, Self::Unsecured];

    fn label(self) -> &'static str {
        match self {
            LoanType::Secured => "Secured",
            LoanType::Unsecured => "Unsecured",
        }
    }
}

/// Raw attributes of one loan applicant.
///
/// Categorical fields are `None` when the caller supplied no value or a value
/// outside the known set; both produce a row with no indicator for that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantInput {
    pub age: u32,
    pub income: f64,
    pub loan_amount: f64,
    pub loan_tenure_months: u32,
    /// Average days past due per delinquency event.
    pub avg_dpd_per_delinquency: f64,
    /// Fraction of periods delinquent, in `[0, 1]`.
    pub delinquency_ratio: f64,
    /// Fraction of available credit in use, in `[0, 1]`.
    pub credit_utilization_ratio: f64,
    pub num_open_accounts: u32,
    pub residence_type: Option<ResidenceType>,
    pub loan_purpose: Option<LoanPurpose>,
    pub loan_type: Option<LoanType>,
}

/// Discrete rating band derived from a credit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Poor,
    Average,
    Good,
    Excellent,
}

impl Rating {
    /// Band a credit score using fixed thresholds (500 / 650 / 750).
    pub fn from_score(credit_score: i64) -> Self {
        if credit_score < 500 {
            Rating::Poor
        } else if credit_score < 650 {
            Rating::Average
        } else if credit_score < 750 {
            Rating::Good
        } else {
            Rating::Excellent
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Poor => "Poor",
            Rating::Average => "Average",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of a single scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Estimated probability of default.
    pub probability: f64,
    pub credit_score: i64,
    pub rating: Rating,
}

/// Parameters of the probability → score mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: f64,
    pub scale_length: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 300.0,
            scale_length: 600.0,
        }
    }
}

/// Optional descriptive metadata stored alongside the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trained_on: Option<NaiveDate>,
}

/// Serialized classifier parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierSpec {
    /// Binary logistic regression: `p(default) = sigmoid(coef · x + intercept)`.
    LogisticRegression { coef: Vec<f64>, intercept: f64 },
}

/// Serialized scaler parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerSpec {
    /// Min-max normalization fitted on `[data_min, data_max]` per column.
    MinMax {
        data_min: Vec<f64>,
        data_max: Vec<f64>,
        #[serde(default = "default_feature_range")]
        feature_range: (f64, f64),
    },
    /// Standardization: `(x - mean) / scale` per column.
    Standard { mean: Vec<f64>, scale: Vec<f64> },
}

fn default_feature_range() -> (f64, f64) {
    (0.0, 1.0)
}

/// The model artifact file (JSON).
///
/// `features` is the exact, ordered column list the classifier was trained on;
/// `cols_to_scale` is the ordered column list the scaler was fitted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactFile {
    #[serde(default)]
    pub meta: ArtifactMeta,
    pub model: ClassifierSpec,
    pub scaler: ScalerSpec,
    pub features: Vec<String>,
    pub cols_to_scale: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_bands_at_boundaries() {
        assert_eq!(Rating::from_score(300), Rating::Poor);
        assert_eq!(Rating::from_score(499), Rating::Poor);
        assert_eq!(Rating::from_score(500), Rating::Average);
        assert_eq!(Rating::from_score(649), Rating::Average);
        assert_eq!(Rating::from_score(650), Rating::Good);
        assert_eq!(Rating::from_score(749), Rating::Good);
        assert_eq!(Rating::from_score(750), Rating::Excellent);
        assert_eq!(Rating::from_score(900), Rating::Excellent);
    }

    #[test]
    fn category_parse_requires_exact_label() {
        assert_eq!(ResidenceType::parse("Owned"), Some(ResidenceType::Owned));
        assert_eq!(ResidenceType::parse("owned"), None);
        assert_eq!(LoanPurpose::parse("Home"), Some(LoanPurpose::Home));
        assert_eq!(LoanPurpose::parse(" HOME "), None);
        assert_eq!(LoanPurpose::parse(" Home"), None);
        assert_eq!(LoanType::parse("Unsecured"), Some(LoanType::Unsecured));
        assert_eq!(LoanType::parse("Hybrid"), None);
        assert_eq!(ResidenceType::parse(""), None);
    }

    #[test]
    fn unknown_or_missing_labels_parse_to_none() {
        assert_eq!(parse_category::<LoanType>(Some("Secured")), Some(LoanType::Secured));
        assert_eq!(parse_category::<LoanType>(Some("secured")), None);
        assert_eq!(parse_category::<LoanType>(Some("Hybrid")), None);
        assert_eq!(parse_category::<LoanType>(None), None);
    }

    #[test]
    fn column_names_match_training_labels() {
        assert_eq!(ResidenceType::Mortgage.column_name(), "residence_type_Mortgage");
        assert_eq!(LoanPurpose::Education.column_name(), "loan_purpose_Education");
        assert_eq!(LoanType::Secured.column_name(), "loan_type_Secured");
        assert_eq!(LoanPurpose::Auto.ordinal(), 2);
    }

    #[test]
    fn scaler_spec_defaults_feature_range() {
        let json = r#"{"kind":"min_max","data_min":[0.0],"data_max":[1.0]}"#;
        let spec: ScalerSpec = serde_json::from_str(json).unwrap();
        match spec {
            ScalerSpec::MinMax { feature_range, .. } => assert_eq!(feature_range, (0.0, 1.0)),
            other => panic!("unexpected scaler spec: {other:?}"),
        }
    }

    #[test]
    fn artifact_meta_is_optional() {
        let json = r#"{
            "model": {"kind": "logistic_regression", "coef": [1.0], "intercept": 0.0},
            "scaler": {"kind": "standard", "mean": [0.0], "scale": [1.0]},
            "features": ["age"],
            "cols_to_scale": ["age"]
        }"#;
        let file: ArtifactFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.meta, ArtifactMeta::default());
        assert_eq!(file.features, vec!["age".to_string()]);
    }
}

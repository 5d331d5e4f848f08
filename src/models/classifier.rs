//! Fitted classifiers.
//!
//! The scorer only needs one primitive from a classifier: class-membership
//! probabilities for a single feature row, in class order `[no-default, default]`.

use nalgebra::DVector;

use crate::domain::ClassifierSpec;
use crate::error::AppError;
use crate::math::{linear_predictor, sigmoid};

/// A fitted binary classifier.
///
/// Implementations must be safe for concurrent read-only use so a loaded
/// artifact can be shared across threads without locking.
pub trait Classifier: Send + Sync + std::fmt::Debug {
    /// Number of input columns the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Probabilities `[p(no-default), p(default)]` for one row.
    fn predict_proba(&self, row: &DVector<f64>) -> Result<[f64; 2], AppError>;
}

/// Binary logistic regression.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: DVector<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self, AppError> {
        if coef.is_empty() {
            return Err(AppError::new(2, "Logistic regression has no coefficients."));
        }
        if !intercept.is_finite() || coef.iter().any(|c| !c.is_finite()) {
            return Err(AppError::new(2, "Logistic regression parameters must be finite."));
        }
        Ok(Self {
            coef: DVector::from_vec(coef),
            intercept,
        })
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn predict_proba(&self, row: &DVector<f64>) -> Result<[f64; 2], AppError> {
        if row.len() != self.coef.len() {
            return Err(AppError::new(
                4,
                format!(
                    "Classifier expects {} features, got a row with {}.",
                    self.coef.len(),
                    row.len()
                ),
            ));
        }

        let p = sigmoid(linear_predictor(&self.coef, self.intercept, row));
        if !p.is_finite() {
            return Err(AppError::new(4, "Classifier produced a non-finite probability."));
        }
        Ok([1.0 - p, p])
    }
}

/// Build a classifier from its serialized parameters.
pub fn classifier_from_spec(spec: &ClassifierSpec) -> Result<Box<dyn Classifier>, AppError> {
    match spec {
        ClassifierSpec::LogisticRegression { coef, intercept } => {
            Ok(Box::new(LogisticRegression::new(coef.clone(), *intercept)?))
        }
    }
}

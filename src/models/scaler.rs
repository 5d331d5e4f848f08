//! Fitted column scalers.
//!
//! Scalers are applied to the values of the artifact's scale columns, gathered
//! in the order the scaler was fitted on. Both implementations store their
//! parameters in the affine form `x' = x * scale + offset`.

use nalgebra::DVector;

use crate::domain::ScalerSpec;
use crate::error::AppError;

/// Ranges below this are treated as constant columns (scale 1), as in scikit-learn.
const ZERO_RANGE_EPS: f64 = 10.0 * f64::EPSILON;

/// A fitted, read-only column transform.
pub trait Scaler: Send + Sync + std::fmt::Debug {
    /// Number of columns the scaler was fitted on.
    fn n_features(&self) -> usize;

    /// Transform `values` in place.
    fn transform(&self, values: &mut DVector<f64>) -> Result<(), AppError>;
}

/// Min-max normalization to `feature_range`.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    scale: DVector<f64>,
    offset: DVector<f64>,
}

impl MinMaxScaler {
    /// Build from fitted per-column minima/maxima.
    pub fn from_fitted(
        data_min: &[f64],
        data_max: &[f64],
        feature_range: (f64, f64),
    ) -> Result<Self, AppError> {
        if data_min.len() != data_max.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Min-max scaler has {} minima but {} maxima.",
                    data_min.len(),
                    data_max.len()
                ),
            ));
        }
        let (lo, hi) = feature_range;
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            return Err(AppError::new(
                2,
                format!("Invalid min-max feature range ({lo}, {hi})."),
            ));
        }
        if data_min.iter().chain(data_max).any(|v| !v.is_finite()) {
            return Err(AppError::new(2, "Min-max scaler parameters must be finite."));
        }
        if let Some(col) = data_min.iter().zip(data_max).position(|(min, max)| max < min) {
            return Err(AppError::new(
                2,
                format!(
                    "Min-max scaler column {col} has data_max {} below data_min {}.",
                    data_max[col], data_min[col]
                ),
            ));
        }

        let scale: Vec<f64> = data_min
            .iter()
            .zip(data_max)
            .map(|(&min, &max)| (hi - lo) / non_zero(max - min))
            .collect();
        let offset: Vec<f64> = data_min
            .iter()
            .zip(&scale)
            .map(|(&min, &s)| lo - min * s)
            .collect();

        Ok(Self {
            scale: DVector::from_vec(scale),
            offset: DVector::from_vec(offset),
        })
    }
}

impl Scaler for MinMaxScaler {
    fn n_features(&self) -> usize {
        self.scale.len()
    }

    fn transform(&self, values: &mut DVector<f64>) -> Result<(), AppError> {
        check_width(self.scale.len(), values.len())?;
        values.component_mul_assign(&self.scale);
        *values += &self.offset;
        Ok(())
    }
}

/// Standardization `(x - mean) / scale`.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: DVector<f64>,
    scale: DVector<f64>,
}

impl StandardScaler {
    pub fn from_fitted(mean: &[f64], scale: &[f64]) -> Result<Self, AppError> {
        if mean.len() != scale.len() {
            return Err(AppError::new(
                2,
                format!(
                    "Standard scaler has {} means but {} scales.",
                    mean.len(),
                    scale.len()
                ),
            ));
        }
        if mean.iter().chain(scale).any(|v| !v.is_finite()) {
            return Err(AppError::new(2, "Standard scaler parameters must be finite."));
        }
        if let Some(col) = scale.iter().position(|&s| s < 0.0) {
            return Err(AppError::new(
                2,
                format!("Standard scaler column {col} has negative scale {}.", scale[col]),
            ));
        }

        Ok(Self {
            mean: DVector::from_row_slice(mean),
            scale: DVector::from_iterator(scale.len(), scale.iter().map(|&s| non_zero(s))),
        })
    }
}

impl Scaler for StandardScaler {
    fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn transform(&self, values: &mut DVector<f64>) -> Result<(), AppError> {
        check_width(self.mean.len(), values.len())?;
        *values -= &self.mean;
        values.component_div_assign(&self.scale);
        Ok(())
    }
}

/// Build a scaler from its serialized parameters.
pub fn scaler_from_spec(spec: &ScalerSpec) -> Result<Box<dyn Scaler>, AppError> {
    match spec {
        ScalerSpec::MinMax {
            data_min,
            data_max,
            feature_range,
        } => Ok(Box::new(MinMaxScaler::from_fitted(
            data_min,
            data_max,
            *feature_range,
        )?)),
        ScalerSpec::Standard { mean, scale } => Ok(Box::new(StandardScaler::from_fitted(mean, scale)?)),
    }
}

/// `range` is non-negative here; constructors reject reversed ranges.
fn non_zero(range: f64) -> f64 {
    if range < ZERO_RANGE_EPS { 1.0 } else { range }
}

fn check_width(expected: usize, got: usize) -> Result<(), AppError> {
    if expected != got {
        return Err(AppError::new(
            3,
            format!("Scaler was fitted on {expected} columns but received {got}."),
        ));
    }
    Ok(())
}

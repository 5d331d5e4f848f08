//! Stable logistic link.
//!
//! `sigmoid(z) = 1 / (1 + exp(-z))`
//!
//! Numerical notes:
//! - For large negative `z`, `exp(-z)` overflows to `inf`; the result is still
//!   `0.0`, but for symmetry we evaluate `exp(z) / (1 + exp(z))` on that side.
//! - The output is always within `[0, 1]` for finite input.

use nalgebra::DVector;

/// Compute the logistic function in a numerically stable way.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Linear predictor `w · x + b`.
///
/// # Panics
/// Panics if `weights` and `x` differ in length. Callers check widths first.
pub fn linear_predictor(weights: &DVector<f64>, intercept: f64, x: &DVector<f64>) -> f64 {
    weights.dot(x) + intercept
}

//! Credit scoring: feature row → default probability → score → rating.
//!
//! `predict` is the single entry point callers use; it takes the loaded artifact
//! by reference and has no other state, so repeated calls with the same input
//! return the same result.

pub mod engine;
pub mod validation;

use tracing::debug;

use crate::domain::{ApplicantInput, ScoreResult, ScoringConfig};
use crate::error::AppError;
use crate::features::build_feature_row;
use crate::models::ModelArtifact;

pub use engine::{calculate_credit_score, credit_score};
pub use validation::validate_scoring;

/// Score one applicant against a loaded artifact.
///
/// An invalid `config` (non-finite values, `scale_length <= 0`) is rejected
/// before any feature work with exit code 2.
pub fn predict(
    artifact: &ModelArtifact,
    input: &ApplicantInput,
    config: &ScoringConfig,
) -> Result<ScoreResult, AppError> {
    validate_scoring(config)?;
    let row = build_feature_row(input, artifact.schema(), artifact.scaler())?;
    debug!(columns = row.len(), "built feature row");
    calculate_credit_score(&row, artifact.classifier(), config)
}

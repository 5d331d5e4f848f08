use tracing::debug;

use crate::domain::{Rating, ScoreResult, ScoringConfig};
use crate::error::AppError;
use crate::features::FeatureRow;
use crate::models::Classifier;

/// Map a default probability to an integer credit score.
///
/// `trunc(base_score + (1 - probability) * scale_length)`; no clamping, so
/// non-default parameters may leave the nominal 300–900 range.
pub fn credit_score(probability: f64, config: &ScoringConfig) -> i64 {
    (config.base_score + (1.0 - probability) * config.scale_length).trunc() as i64
}

/// Score one aligned feature row.
///
/// The classifier failing to produce a probability in `[0, 1]` is fatal for
/// this call (exit code 4).
pub fn calculate_credit_score(
    row: &FeatureRow<'_>,
    classifier: &dyn Classifier,
    config: &ScoringConfig,
) -> Result<ScoreResult, AppError> {
    let [_, probability] = classifier.predict_proba(row.values())?;
    if !(0.0..=1.0).contains(&probability) {
        return Err(AppError::new(
            4,
            format!("Classifier returned default probability {probability} outside [0, 1]."),
        ));
    }

    let credit_score = credit_score(probability, config);
    let rating = Rating::from_score(credit_score);

    debug!(probability, credit_score, rating = %rating, "scored feature row");

    Ok(ScoreResult {
        probability,
        credit_score,
        rating,
    })
}

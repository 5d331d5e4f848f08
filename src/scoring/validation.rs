use crate::domain::ScoringConfig;
use crate::error::AppError;

/// Validate scoring parameters before any artifact is loaded.
/// Reports all problems at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if !config.base_score.is_finite() {
        errors.push(format!("base_score: must be finite, got {}", config.base_score));
    }
    if !config.scale_length.is_finite() || config.scale_length <= 0.0 {
        errors.push(format!(
            "scale_length: must be a positive number, got {}",
            config.scale_length
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::new(
            2,
            format!("Invalid scoring configuration: {}", errors.join("; ")),
        ))
    }
}

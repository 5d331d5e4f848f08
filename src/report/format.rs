use crate::domain::{ApplicantInput, Category, ScoreResult, ScoringConfig};
use crate::features::loan_to_income;
use crate::models::ModelArtifact;

/// Format a scoring result for the terminal.
pub fn format_score_result(input: &ApplicantInput, result: &ScoreResult, config: &ScoringConfig) -> String {
    let mut out = String::new();

    out.push_str("=== credit-score ===\n");
    out.push_str(&format!(
        "Applicant: age={} | income={:.2} | loan={:.2} over {} months\n",
        input.age, input.income, input.loan_amount, input.loan_tenure_months
    ));
    out.push_str(&format!(
        "Credit history: open_accounts={} | utilization={:.2} | delinquency={:.2} | avg_dpd={:.2}\n",
        input.num_open_accounts,
        input.credit_utilization_ratio,
        input.delinquency_ratio,
        input.avg_dpd_per_delinquency
    ));
    out.push_str(&format!(
        "Categories: residence={} | purpose={} | type={}\n",
        label_or_dash(input.residence_type),
        label_or_dash(input.loan_purpose),
        label_or_dash(input.loan_type)
    ));
    out.push_str(&format!(
        "Loan-to-income: {:.4}\n",
        loan_to_income(input.loan_amount, input.income)
    ));

    out.push('\n');
    out.push_str(&format!("Default probability: {:.2}%\n", result.probability * 100.0));
    out.push_str(&format!(
        "Credit score: {} (scale {:.0}-{:.0})\n",
        result.credit_score,
        config.base_score,
        config.base_score + config.scale_length
    ));
    out.push_str(&format!("Rating: {}\n", result.rating));

    out
}

/// Format the artifact's metadata and column layout.
pub fn format_artifact_summary(artifact: &ModelArtifact) -> String {
    let mut out = String::new();
    let meta = artifact.meta();
    let schema = artifact.schema();

    out.push_str("=== model artifact ===\n");
    out.push_str(&format!("Name: {}\n", meta.name.as_deref().unwrap_or("-")));
    if let Some(description) = &meta.description {
        out.push_str(&format!("Description: {description}\n"));
    }
    out.push_str(&format!(
        "Trained on: {}\n",
        meta.trained_on
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string())
    ));

    out.push_str(&format!("\nFeatures ({}):\n", schema.feature_names().len()));
    for (i, name) in schema.feature_names().iter().enumerate() {
        let scaled = if schema.scale_columns().contains(name) { " [scaled]" } else { "" };
        out.push_str(&format!("{:>3}. {name}{scaled}\n", i + 1));
    }

    let scale_only: Vec<&str> = schema
        .scale_columns()
        .iter()
        .filter(|c| !schema.feature_names().contains(*c))
        .map(String::as_str)
        .collect();
    if !scale_only.is_empty() {
        out.push_str(&format!(
            "\nScaled but not used by the classifier ({}): {}\n",
            scale_only.len(),
            scale_only.join(", ")
        ));
    }

    out
}

fn label_or_dash<C: Category>(value: Option<C>) -> &'static str {
    value.map(|c| c.label()).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArtifactFile, ArtifactMeta, ClassifierSpec, LoanPurpose, Rating, ScalerSpec};

    #[test]
    fn score_report_mentions_score_and_rating() {
        let input = ApplicantInput {
            age: 35,
            income: 50_000.0,
            loan_amount: 10_000.0,
            loan_tenure_months: 36,
            avg_dpd_per_delinquency: 2.0,
            delinquency_ratio: 0.1,
            credit_utilization_ratio: 0.3,
            num_open_accounts: 4,
            residence_type: None,
            loan_purpose: Some(LoanPurpose::Home),
            loan_type: None,
        };
        let result = ScoreResult {
            probability: 0.125,
            credit_score: 825,
            rating: Rating::Excellent,
        };
        let text = format_score_result(&input, &result, &ScoringConfig::default());
        assert!(text.contains("Default probability: 12.50%"));
        assert!(text.contains("Credit score: 825 (scale 300-900)"));
        assert!(text.contains("Rating: Excellent"));
        assert!(text.contains("residence=- | purpose=Home"));
        assert!(text.contains("Loan-to-income: 0.2000"));
    }

    #[test]
    fn artifact_summary_lists_scale_only_columns() {
        let artifact = ModelArtifact::from_file(ArtifactFile {
            meta: ArtifactMeta {
                name: Some("demo".to_string()),
                ..ArtifactMeta::default()
            },
            model: ClassifierSpec::LogisticRegression {
                coef: vec![1.0],
                intercept: 0.0,
            },
            scaler: ScalerSpec::Standard {
                mean: vec![0.0, 0.0],
                scale: vec![1.0, 1.0],
            },
            features: vec!["age".to_string()],
            cols_to_scale: vec!["age".to_string(), "income".to_string()],
        })
        .unwrap();

        let text = format_artifact_summary(&artifact);
        assert!(text.contains("Name: demo"));
        assert!(text.contains("1. age [scaled]"));
        assert!(text.contains("Scaled but not used by the classifier (1): income"));
    }
}

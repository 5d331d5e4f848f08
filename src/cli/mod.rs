//! Command-line parsing for the credit scorer.
//!
//! The goal of this module is to keep **argument parsing** separate from feature
//! building and scoring; it only turns flags into domain values.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{ApplicantInput, ScoringConfig, parse_category};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "credit-score", version, about = "Credit-risk scoring with a pre-trained model artifact")]
pub struct Cli {
    /// Log filter directive (overrides CREDIT_SCORE_LOG / RUST_LOG), e.g. `debug`.
    #[arg(long, global = true, value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one applicant and print probability, credit score and rating.
    Score(ScoreArgs),
    /// Validate an artifact and print its metadata and feature layout.
    Inspect(InspectArgs),
}

/// Location of the model artifact.
#[derive(Debug, Args, Clone)]
pub struct ArtifactArgs {
    /// Artifact JSON (defaults to $CREDIT_SCORE_ARTIFACT, then artifacts/model_data.json).
    #[arg(short = 'a', long, value_name = "JSON")]
    pub artifact: Option<PathBuf>,
}

/// Options for scoring one applicant.
#[derive(Debug, Args, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,

    /// Applicant age in years.
    #[arg(long)]
    pub age: u32,

    /// Annual income.
    #[arg(long, allow_negative_numbers = true)]
    pub income: f64,

    /// Requested loan amount.
    #[arg(long, allow_negative_numbers = true)]
    pub loan_amount: f64,

    /// Loan tenure in months.
    #[arg(long)]
    pub loan_tenure_months: u32,

    /// Average days past due per delinquency event.
    #[arg(long, allow_negative_numbers = true)]
    pub avg_dpd_per_delinquency: f64,

    /// Fraction of periods delinquent (0-1).
    #[arg(long, allow_negative_numbers = true)]
    pub delinquency_ratio: f64,

    /// Fraction of available credit in use (0-1).
    #[arg(long, allow_negative_numbers = true)]
    pub credit_utilization_ratio: f64,

    /// Number of open credit accounts.
    #[arg(long)]
    pub num_open_accounts: u32,

    /// Residence type (Owned, Rented, Mortgage).
    #[arg(long)]
    pub residence_type: Option<String>,

    /// Loan purpose (Education, Home, Auto, Personal).
    #[arg(long)]
    pub loan_purpose: Option<String>,

    /// Loan type (Secured, Unsecured).
    #[arg(long)]
    pub loan_type: Option<String>,

    /// Score assigned at default probability 1.
    #[arg(long, default_value_t = 300.0, allow_negative_numbers = true)]
    pub base_score: f64,

    /// Score range added as default probability falls to 0.
    #[arg(long, default_value_t = 600.0, allow_negative_numbers = true)]
    pub scale_length: f64,

    /// Print the result as JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

impl ScoreArgs {
    /// Applicant input; unknown category labels become `None`.
    pub fn applicant(&self) -> ApplicantInput {
        ApplicantInput {
            age: self.age,
            income: self.income,
            loan_amount: self.loan_amount,
            loan_tenure_months: self.loan_tenure_months,
            avg_dpd_per_delinquency: self.avg_dpd_per_delinquency,
            delinquency_ratio: self.delinquency_ratio,
            credit_utilization_ratio: self.credit_utilization_ratio,
            num_open_accounts: self.num_open_accounts,
            residence_type: parse_category(self.residence_type.as_deref()),
            loan_purpose: parse_category(self.loan_purpose.as_deref()),
            loan_type: parse_category(self.loan_type.as_deref()),
        }
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            base_score: self.base_score,
            scale_length: self.scale_length,
        }
    }
}

/// Options for inspecting an artifact.
#[derive(Debug, Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub artifact: ArtifactArgs,
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and loads `.env`
//! - installs the log subscriber
//! - loads the model artifact once
//! - scores the applicant / prints the artifact summary

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::cli::{ArtifactArgs, Command, InspectArgs, ScoreArgs};
use crate::error::AppError;
use crate::models::ModelArtifact;

/// Environment variable naming the artifact when `--artifact` is absent.
pub const ARTIFACT_ENV: &str = "CREDIT_SCORE_ARTIFACT";

/// Artifact location used when neither the flag nor the environment names one.
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/model_data.json";

/// Entry point for the `credit-score` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    dotenvy::dotenv().ok();

    let filter = crate::telemetry::resolve_filter(cli.log.as_deref());
    crate::telemetry::init(&filter)?;

    match cli.command {
        Command::Score(args) => handle_score(args),
        Command::Inspect(args) => handle_inspect(args),
    }
}

fn handle_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = args.scoring_config();
    crate::scoring::validate_scoring(&config)?;

    let artifact = load_artifact(&args.artifact)?;
    let input = args.applicant();
    let result = crate::scoring::predict(&artifact, &input, &config)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| AppError::new(2, format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", crate::report::format_score_result(&input, &result, &config));
    }

    Ok(())
}

fn handle_inspect(args: InspectArgs) -> Result<(), AppError> {
    let artifact = load_artifact(&args.artifact)?;
    println!("{}", crate::report::format_artifact_summary(&artifact));
    Ok(())
}

fn load_artifact(args: &ArtifactArgs) -> Result<ModelArtifact, AppError> {
    let path = resolve_artifact_path(args.artifact.clone(), std::env::var(ARTIFACT_ENV).ok());
    info!(path = %path.display(), "loading model artifact");
    ModelArtifact::load(&path)
}

/// Resolve the artifact path: flag, then environment, then the default location.
pub fn resolve_artifact_path(flag: Option<PathBuf>, env_value: Option<String>) -> PathBuf {
    flag.or_else(|| {
        env_value
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH))
}

//! Logging setup for the `credit-score` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the binary so embedding callers keep control of their own logging.

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Environment variable consulted before `RUST_LOG`.
pub const LOG_ENV: &str = "CREDIT_SCORE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Pick the log filter: explicit flag, then `CREDIT_SCORE_LOG`, then `RUST_LOG`, then `warn`.
pub fn resolve_filter(flag: Option<&str>) -> String {
    if let Some(flag) = flag {
        return flag.to_string();
    }
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install a compact stderr subscriber using the given filter directive.
pub fn init(filter: &str) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_new(filter)
        .map_err(|e| AppError::new(2, format!("Invalid log filter '{filter}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| AppError::new(2, format!("Failed to initialise logging: {e}")))
}

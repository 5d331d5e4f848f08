//! `credit-scorer` library crate.
//!
//! Scores a loan applicant with a pre-trained classifier: raw attributes are
//! aligned to the artifact's training-time feature layout, scaled, classified,
//! and the default probability is mapped to a credit score and rating band.
//!
//! The binary (`credit-score`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - other callers (services, notebooks) can load an artifact once and call
//!   [`scoring::predict`] directly

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod features;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
pub mod scoring;
pub mod telemetry;

pub use domain::{ApplicantInput, Rating, ScoreResult, ScoringConfig};
pub use error::AppError;
pub use models::ModelArtifact;
pub use scoring::predict;

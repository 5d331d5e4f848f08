//! Domain types used throughout the scorer.
//!
//! This module defines:
//!
//! - applicant input and the categorical enums (`ResidenceType`, `LoanPurpose`, `LoanType`)
//! - scoring outputs (`ScoreResult`, `Rating`) and `ScoringConfig`
//! - the serialized artifact schema (`ArtifactFile`, `ClassifierSpec`, `ScalerSpec`)

pub mod types;

pub use types::*;

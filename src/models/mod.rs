//! Fitted model capabilities and the artifact that bundles them.
//!
//! `Classifier` and `Scaler` are traits so that the scorer only depends on the two
//! primitives it needs; the concrete fitted types are built from the artifact JSON.

pub mod artifact;
pub mod classifier;
pub mod scaler;

pub use artifact::ModelArtifact;
pub use classifier::*;
pub use scaler::*;

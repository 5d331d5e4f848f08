//! The loaded model artifact: classifier + scaler + resolved column schema.
//!
//! Built once at startup and then only read. Every cross-part consistency check
//! happens here so that scoring never discovers schema drift on its own.

use std::path::Path;

use tracing::debug;

use crate::domain::{ArtifactFile, ArtifactMeta};
use crate::error::AppError;
use crate::features::FeatureSchema;
use crate::models::{Classifier, Scaler, classifier_from_spec, scaler_from_spec};

/// Immutable, validated model artifact.
#[derive(Debug)]
pub struct ModelArtifact {
    meta: ArtifactMeta,
    classifier: Box<dyn Classifier>,
    scaler: Box<dyn Scaler>,
    schema: FeatureSchema,
}

impl ModelArtifact {
    /// Read and validate an artifact JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let file = crate::io::read_artifact_json(path)?;
        let artifact = Self::from_file(file)?;
        debug!(path = %path.display(), "loaded model artifact");
        Ok(artifact)
    }

    /// Build from an already-deserialized artifact file.
    pub fn from_file(file: ArtifactFile) -> Result<Self, AppError> {
        let classifier = classifier_from_spec(&file.model)?;
        let scaler = scaler_from_spec(&file.scaler)?;
        Self::new(file.meta, classifier, scaler, file.features, file.cols_to_scale)
    }

    /// Assemble an artifact from fitted parts.
    ///
    /// Fails with exit code 3 if the classifier or scaler width disagrees with
    /// the column lists, or if the column lists themselves are invalid.
    pub fn new(
        meta: ArtifactMeta,
        classifier: Box<dyn Classifier>,
        scaler: Box<dyn Scaler>,
        feature_names: Vec<String>,
        scale_columns: Vec<String>,
    ) -> Result<Self, AppError> {
        let schema = FeatureSchema::new(feature_names, scale_columns)?;

        if classifier.n_features() != schema.feature_names().len() {
            return Err(AppError::new(
                3,
                format!(
                    "Classifier was fitted on {} features but the artifact lists {}.",
                    classifier.n_features(),
                    schema.feature_names().len()
                ),
            ));
        }
        if scaler.n_features() != schema.scale_columns().len() {
            return Err(AppError::new(
                3,
                format!(
                    "Scaler was fitted on {} columns but the artifact lists {} columns to scale.",
                    scaler.n_features(),
                    schema.scale_columns().len()
                ),
            ));
        }

        Ok(Self {
            meta,
            classifier,
            scaler,
            schema,
        })
    }

    pub fn meta(&self) -> &ArtifactMeta {
        &self.meta
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }
}

//! Read model artifact JSON files.
//!
//! The schema is defined by `domain::ArtifactFile`; validation of how its parts
//! fit together lives in `models::ModelArtifact`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::domain::ArtifactFile;
use crate::error::AppError;

/// Read an artifact JSON file.
pub fn read_artifact_json(path: &Path) -> Result<ArtifactFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open artifact '{}': {e}", path.display())))?;
    let artifact: ArtifactFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid artifact JSON '{}': {e}", path.display())))?;
    Ok(artifact)
}

//! Submission manifest.
//!
//! A submission directory carries a `submission.yaml` naming the registered
//! model to run, e.g.
//!
//! ```yaml
//! model: most_frequent
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Manifest file expected inside the submission directory.
pub const MANIFEST_FILE: &str = "submission.yaml";

/// Parsed submission manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionSpec {
    /// Name of a registered model, resolved by [`crate::model::factory_for`].
    pub model: String,
}

/// Load and validate the manifest from a submission directory.
pub fn load_submission(dir: impl AsRef<Path>) -> Result<SubmissionSpec> {
    let path = dir.as_ref().join(MANIFEST_FILE);
    let content = fs::read_to_string(&path)?;
    let spec: SubmissionSpec = serde_yaml::from_str(&content)
        .map_err(|e| Error::Manifest(format!("failed to parse {}: {e}", path.display())))?;
    validate_submission(&spec)?;
    Ok(spec)
}

/// Check manifest invariants that serde cannot express.
pub fn validate_submission(spec: &SubmissionSpec) -> Result<()> {
    if spec.model.trim().is_empty() {
        return Err(Error::Manifest("model name must not be empty".to_string()));
    }
    Ok(())
}

//! Report types crossing the ingestion/scoring boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wall-clock timings recorded by one ingestion run, in seconds.
///
/// `test_time` is the combined duration across all evaluation sets, not a
/// per-set figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub train_time: f64,
    pub test_time: f64,
}

/// Final scores: one accuracy per evaluation set plus the merged timings.
///
/// Serializes flat, e.g.
/// `{"private_test": 0.5, "test": 1.0, "train_time": 2.0, "test_time": 0.3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Accuracy per evaluation set, keyed by set name.
    #[serde(flatten)]
    pub accuracy: BTreeMap<String, f64>,
    pub train_time: f64,
    pub test_time: f64,
}

impl ScoreReport {
    /// Merge per-set accuracies with the ingestion timings.
    pub fn new(accuracy: BTreeMap<String, f64>, metadata: &RunMetadata) -> Self {
        Self {
            accuracy,
            train_time: metadata.train_time,
            test_time: metadata.test_time,
        }
    }
}

//! File I/O for both drivers.
//!
//! - `load`: CSV frames and the timing metadata produced by ingestion
//! - `save`: CSV frames, `metadata.json`, and `scores.json`
//! - `report`: the serialized report types shared across the stage boundary

mod load;
mod report;
mod save;

pub use load::{load_train_data, read_frame, read_metadata};
pub use report::{RunMetadata, ScoreReport};
pub use save::{write_frame, write_metadata, write_scores};

/// Timing metadata file written by ingestion and required by scoring.
pub const METADATA_FILE: &str = "metadata.json";

/// Final scores file written by scoring.
pub const SCORES_FILE: &str = "scores.json";

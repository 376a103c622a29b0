//! Calificar: ingestion and scoring drivers for a tabular ML competition.
//!
//! Two batch stages, run sequentially by an external orchestrator and
//! connected only through a shared directory:
//!
//! - `ingestion` trains a submission's model on the training split and
//!   writes one predictions CSV per evaluation set plus `metadata.json`
//!   with wall-clock timings.
//! - `scoring` compares those predictions to the reference labels, computes
//!   a mean-equality accuracy per evaluation set, merges in the timings,
//!   and writes `scores.json`.
//!
//! # Usage
//!
//! ```bash
//! ingestion --data-dir ./input_data --output-dir ./output \
//!     --submission-dir ./ingested_program
//!
//! scoring --reference-dir ./input/ref --prediction-dir ./input/res \
//!     --output-dir ./output
//! ```
//!
//! Submissions are resolved through [`model::factory_for`]; embedders and
//! tests can bypass the registry entirely via [`ingest::run_with_model`].

pub mod cli;
pub mod data;
pub mod error;
pub mod eval;
pub mod ingest;
pub mod io;
pub mod model;
pub mod score;
pub mod submission;

pub use error::{Error, Result};

/// Evaluation sets, in the order they are predicted and scored.
pub const EVAL_SETS: [&str; 2] = ["test", "private_test"];

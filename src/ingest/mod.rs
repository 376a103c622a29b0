//! Ingestion driver: train a submission's model and write its predictions.
//!
//! One linear pipeline with no recovery: load the training split, fit,
//! predict each evaluation set, write `metadata.json` and one predictions
//! CSV per set. Any failure aborts the run before downstream files are
//! touched.

use std::fs;
use std::time::Instant;

use crate::cli::{log, IngestionArgs, LogLevel};
use crate::data::Frame;
use crate::io::{
    load_train_data, read_frame, write_frame, write_metadata, RunMetadata, METADATA_FILE,
};
use crate::model::{factory_for, Model};
use crate::submission::load_submission;
use crate::{Result, EVAL_SETS};

/// Run ingestion end to end, resolving the model from the submission
/// manifest.
pub fn run(args: &IngestionArgs, level: LogLevel) -> Result<()> {
    let spec = load_submission(&args.submission_dir)?;
    let model = factory_for(&spec.model)?();
    run_with_model(args, model, level)
}

/// Run ingestion with an already-built model.
///
/// This is the injection seam: tests and embedders hand in any [`Model`]
/// implementation without going through the registry.
pub fn run_with_model(
    args: &IngestionArgs,
    mut model: Box<dyn Model>,
    level: LogLevel,
) -> Result<()> {
    let (features, labels) = load_train_data(&args.data_dir)?;

    log(level, LogLevel::Normal, "Training the model");
    let start = Instant::now();
    model.fit(&features, &labels)?;
    let train_time = start.elapsed().as_secs_f64();

    log(level, LogLevel::Normal, &"-".repeat(10));
    log(level, LogLevel::Normal, "Evaluating the model");
    let start = Instant::now();
    let mut predictions: Vec<(&str, Frame)> = Vec::with_capacity(EVAL_SETS.len());
    for set in EVAL_SETS {
        let set_features = read_frame(args.data_dir.join(set).join(format!("{set}_features.csv")))?;
        log(
            level,
            LogLevel::Verbose,
            &format!("  {set}: {} rows", set_features.n_rows()),
        );
        predictions.push((set, model.predict(&set_features)?));
    }
    // One combined duration across all evaluation sets.
    let test_time = start.elapsed().as_secs_f64();

    log(level, LogLevel::Normal, &"-".repeat(10));
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Completed prediction. Total duration: {}",
            train_time + test_time
        ),
    );

    fs::create_dir_all(&args.output_dir)?;
    write_metadata(
        &RunMetadata {
            train_time,
            test_time,
        },
        args.output_dir.join(METADATA_FILE),
    )?;
    for (set, frame) in &predictions {
        write_frame(frame, args.output_dir.join(format!("{set}_predictions.csv")))?;
    }

    log(level, LogLevel::Normal, "Ingestion finished, ready for scoring");
    Ok(())
}

//! Scoring driver: compare predictions to reference labels.
//!
//! Computes one accuracy per evaluation set, merges in the ingestion
//! timings, and writes `scores.json`. There is no partial scoring: the
//! first failing set, and a missing or malformed `metadata.json`, abort
//! the run.

use std::collections::BTreeMap;
use std::fs;

use crate::cli::{log, LogLevel, ScoringArgs};
use crate::eval::accuracy;
use crate::io::{read_frame, read_metadata, write_scores, ScoreReport, METADATA_FILE, SCORES_FILE};
use crate::{Result, EVAL_SETS};

/// Run scoring end to end.
pub fn run(args: &ScoringArgs, level: LogLevel) -> Result<()> {
    let mut accuracies = BTreeMap::new();
    for set in EVAL_SETS {
        log(level, LogLevel::Normal, &format!("Scoring {set}"));

        let predictions = read_frame(
            args.prediction_dir.join(format!("{set}_predictions.csv")),
        )?;
        let references = read_frame(args.reference_dir.join(format!("{set}_labels.csv")))?;

        let score = accuracy(&predictions, &references)?;
        log(level, LogLevel::Verbose, &format!("  {set}: {score}"));
        accuracies.insert(set.to_string(), score);
    }

    let metadata = read_metadata(args.prediction_dir.join(METADATA_FILE))?;
    let report = ScoreReport::new(accuracies, &metadata);
    log(level, LogLevel::Normal, &format!("{report:?}"));

    fs::create_dir_all(&args.output_dir)?;
    write_scores(&report, args.output_dir.join(SCORES_FILE))?;
    Ok(())
}

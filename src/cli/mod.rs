//! Command-line surface for the two drivers.
//!
//! Each driver is its own executable with its own argument struct; the
//! defaults match the directories mounted by the competition platform.

mod logging;

pub use logging::{log, LogLevel};

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Arguments for the ingestion driver.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "ingestion")]
#[command(version)]
#[command(about = "Train a submission's model and produce predictions")]
pub struct IngestionArgs {
    /// Root directory containing train/, test/, private_test/
    #[arg(long, default_value = "/app/input_data")]
    pub data_dir: PathBuf,

    /// Destination for predictions and timing metadata
    #[arg(long, default_value = "/app/output")]
    pub output_dir: PathBuf,

    /// Submission directory containing submission.yaml
    #[arg(long, default_value = "/app/ingested_program")]
    pub submission_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the scoring driver.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "scoring")]
#[command(version)]
#[command(about = "Score predictions against reference labels")]
pub struct ScoringArgs {
    /// Directory holding <set>_labels.csv ground truth
    #[arg(long, default_value = "/app/input/ref")]
    pub reference_dir: PathBuf,

    /// Ingestion output: <set>_predictions.csv plus metadata.json
    #[arg(long, default_value = "/app/input/res")]
    pub prediction_dir: PathBuf,

    /// Destination for scores.json
    #[arg(long, default_value = "/app/output")]
    pub output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl IngestionArgs {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.verbose, self.quiet)
    }
}

impl ScoringArgs {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.verbose, self.quiet)
    }
}

/// Parse ingestion arguments from an iterator (test seam).
pub fn parse_ingestion_args<I, T>(itr: I) -> Result<IngestionArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    IngestionArgs::try_parse_from(itr)
}

/// Parse scoring arguments from an iterator (test seam).
pub fn parse_scoring_args<I, T>(itr: I) -> Result<ScoringArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    ScoringArgs::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingestion_defaults() {
        let args = parse_ingestion_args(["ingestion"]).unwrap();
        assert_eq!(args.data_dir, PathBuf::from("/app/input_data"));
        assert_eq!(args.output_dir, PathBuf::from("/app/output"));
        assert_eq!(args.submission_dir, PathBuf::from("/app/ingested_program"));
        assert_eq!(args.log_level(), LogLevel::Normal);
    }

    #[test]
    fn test_ingestion_overrides() {
        let args = parse_ingestion_args([
            "ingestion",
            "--data-dir",
            "./data",
            "--output-dir",
            "./out",
            "--submission-dir",
            "./sub",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(args.data_dir, PathBuf::from("./data"));
        assert_eq!(args.output_dir, PathBuf::from("./out"));
        assert_eq!(args.submission_dir, PathBuf::from("./sub"));
        assert_eq!(args.log_level(), LogLevel::Verbose);
    }

    #[test]
    fn test_scoring_defaults() {
        let args = parse_scoring_args(["scoring"]).unwrap();
        assert_eq!(args.reference_dir, PathBuf::from("/app/input/ref"));
        assert_eq!(args.prediction_dir, PathBuf::from("/app/input/res"));
        assert_eq!(args.output_dir, PathBuf::from("/app/output"));
    }

    #[test]
    fn test_scoring_quiet_beats_verbose() {
        let args = parse_scoring_args(["scoring", "--verbose", "--quiet"]).unwrap();
        assert_eq!(args.log_level(), LogLevel::Quiet);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(parse_scoring_args(["scoring", "--nope"]).is_err());
    }
}

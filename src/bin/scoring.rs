//! Scoring executable: compare predictions to ground truth.

use clap::Parser;
use std::process::ExitCode;

use calificar::cli::ScoringArgs;

fn main() -> ExitCode {
    let args = ScoringArgs::parse();

    match calificar::score::run(&args, args.log_level()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

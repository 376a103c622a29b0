//! Ingestion executable: train a submission and write its predictions.

use clap::Parser;
use std::process::ExitCode;

use calificar::cli::IngestionArgs;

fn main() -> ExitCode {
    let args = IngestionArgs::parse();

    match calificar::ingest::run(&args, args.log_level()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

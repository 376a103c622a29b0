//! Writing of prediction tables and report files.

use std::fs;
use std::path::Path;

use crate::data::Frame;
use crate::error::Result;
use crate::io::report::{RunMetadata, ScoreReport};

/// Write a frame as CSV: header row plus data rows, no index column.
///
/// Floats serialize in their shortest round-tripping form and missing
/// cells as empty strings. An existing file is overwritten.
pub fn write_frame(frame: &Frame, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(frame.columns())?;
    for row in frame.rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `metadata.json` with the two wall-clock timings.
pub fn write_metadata(metadata: &RunMetadata, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, serde_json::to_string(metadata)?)?;
    Ok(())
}

/// Write the final `scores.json`.
pub fn write_scores(report: &ScoreReport, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, serde_json::to_string(report)?)?;
    Ok(())
}

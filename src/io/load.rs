//! Loading of tabular files and ingestion metadata.

use std::fs;
use std::path::Path;

use crate::data::{Frame, Value};
use crate::error::Result;
use crate::io::report::RunMetadata;

/// Read a CSV file with a header row into a [`Frame`].
///
/// The first column is ordinary data, not an index. Cells are parsed with
/// [`Value::parse`], so empty cells come back missing.
///
/// # Example
///
/// ```no_run
/// use calificar::io::read_frame;
///
/// let frame = read_frame("train/train_features.csv").expect("failed to read features");
/// println!("{} rows", frame.n_rows());
/// ```
pub fn read_frame(path: impl AsRef<Path>) -> Result<Frame> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(Value::parse).collect());
    }

    Frame::new(columns, rows)
}

/// Load the training split from the data directory.
///
/// Expects `train/train_features.csv` and `train/train_labels.csv` under
/// `data_dir`; rows correspond 1:1 between the two files.
pub fn load_train_data(data_dir: impl AsRef<Path>) -> Result<(Frame, Frame)> {
    let train_dir = data_dir.as_ref().join("train");
    let features = read_frame(train_dir.join("train_features.csv"))?;
    let labels = read_frame(train_dir.join("train_labels.csv"))?;
    Ok((features, labels))
}

/// Read `metadata.json`. A missing or malformed file is a hard error;
/// timings are never defaulted.
pub fn read_metadata(path: impl AsRef<Path>) -> Result<RunMetadata> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

//! Accuracy metric for scored evaluation sets.

use crate::data::Frame;
use crate::error::{Error, Result};

/// Fill value for missing predictions, outside any valid label domain.
pub const SENTINEL: f64 = -10.0;

/// Mean elementwise equality between predictions and reference labels.
///
/// Missing predictions are replaced by [`SENTINEL`] before comparison, so
/// an unanswered cell can only score against a reference that is literally
/// that value. Cells are aligned by position; the two frames must have
/// identical shapes. A multi-column table is scored as the overall fraction
/// of matching cells, not per-row exact match. Empty tables score 0.0.
pub fn accuracy(predictions: &Frame, references: &Frame) -> Result<f64> {
    if predictions.shape() != references.shape() {
        return Err(Error::ShapeMismatch {
            predictions: predictions.shape(),
            references: references.shape(),
        });
    }

    let (n_rows, n_cols) = predictions.shape();
    let total = n_rows * n_cols;
    if total == 0 {
        return Ok(0.0);
    }

    let filled = predictions.fill_missing(SENTINEL);
    let correct = filled
        .rows()
        .iter()
        .zip(references.rows())
        .flat_map(|(pred_row, ref_row)| pred_row.iter().zip(ref_row))
        .filter(|(pred, reference)| pred.matches(reference))
        .count();

    Ok(correct as f64 / total as f64)
}

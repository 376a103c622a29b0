//! Constant-prediction baseline.

use crate::data::{Frame, Value};
use crate::error::{Error, Result};
use crate::model::Model;

/// Predicts the most frequent training label for every input row.
///
/// The mode is taken per label column, skipping missing cells; ties go to
/// the value seen first. A column with no non-missing labels predicts
/// missing.
#[derive(Debug, Default)]
pub struct MostFrequent {
    columns: Vec<String>,
    modes: Vec<Value>,
    fitted: bool,
}

impl MostFrequent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Model for MostFrequent {
    fn fit(&mut self, features: &Frame, labels: &Frame) -> Result<()> {
        if features.n_rows() != labels.n_rows() {
            return Err(Error::Model(format!(
                "features have {} rows but labels have {}",
                features.n_rows(),
                labels.n_rows()
            )));
        }

        self.columns = labels.columns().to_vec();
        self.modes = (0..labels.n_cols())
            .map(|col| column_mode(labels.column(col)))
            .collect();
        self.fitted = true;
        Ok(())
    }

    fn predict(&self, features: &Frame) -> Result<Frame> {
        if !self.fitted {
            return Err(Error::NotFitted);
        }
        let rows = vec![self.modes.clone(); features.n_rows()];
        Frame::new(self.columns.clone(), rows)
    }
}

fn column_mode<'a>(values: impl Iterator<Item = &'a Value>) -> Value {
    let mut counts: Vec<(&Value, usize)> = Vec::new();
    for value in values {
        if value.is_missing() {
            continue;
        }
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }

    // Strictly-greater keeps the first value seen on ties.
    let mut best: Option<(&Value, usize)> = None;
    for (value, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((value, n));
        }
    }
    best.map_or(Value::Missing, |(value, _)| value.clone())
}

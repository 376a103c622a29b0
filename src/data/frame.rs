//! Owned tabular frame with positionally aligned rows.
//!
//! The drivers treat column schemas as opaque: cells are parsed into a
//! tri-state [`Value`] and compared positionally, never by key.

use std::fmt;

use crate::error::{Error, Result};

/// A single table cell.
///
/// Cells that parse as `f64` compare numerically, so `1`, `1.0`, and
/// `1.000` are the same value. Everything else compares as text. Missing
/// cells never compare equal to anything, including other missing cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Text(String),
    Missing,
}

impl Value {
    /// Parse a raw CSV cell.
    ///
    /// Empty and NaN-spelled cells are missing. Numeric cells (including
    /// infinities) become [`Value::Float`]; anything else is text.
    pub fn parse(cell: &str) -> Value {
        let cell = cell.trim();
        if cell.is_empty() {
            return Value::Missing;
        }
        match cell.parse::<f64>() {
            Ok(v) if v.is_nan() => Value::Missing,
            Ok(v) => Value::Float(v),
            Err(_) => Value::Text(cell.to_string()),
        }
    }

    /// Scoring equality.
    ///
    /// Floats compare by `==`, text byte-wise. Missing matches nothing and
    /// kinds never cross-match.
    pub fn matches(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}

/// An owned table: ordered column names plus rows of cells.
///
/// Rows are aligned positionally between features, labels, and predictions
/// within a split; there is no join key.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Build a frame, rejecting ragged rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Iterate one column top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(col))
    }

    /// Copy of the frame with every missing cell replaced by `fill`.
    pub fn fill_missing(&self, fill: f64) -> Frame {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|v| match v {
                        Value::Missing => Value::Float(fill),
                        other => other.clone(),
                    })
                    .collect()
            })
            .collect();
        Frame {
            columns: self.columns.clone(),
            rows,
        }
    }
}

//! Crate-wide error type.
//!
//! Every failure is fatal: the drivers never retry and never write partial
//! output. Errors bubble up to the binaries, which print them to stderr and
//! exit non-zero.

use thiserror::Error;

/// Errors produced by the ingestion and scoring drivers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid submission manifest: {0}")]
    Manifest(String),

    #[error("row {row} has {got} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("shape mismatch: predictions are {predictions:?}, references are {references:?}")]
    ShapeMismatch {
        predictions: (usize, usize),
        references: (usize, usize),
    },

    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("model error: {0}")]
    Model(String),

    #[error("model was not fitted before predict")]
    NotFitted,
}

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownModel("gbm".to_string());
        assert!(format!("{err}").contains("unknown model"));
        assert!(format!("{err}").contains("gbm"));

        let err = Error::RaggedRow {
            row: 3,
            expected: 2,
            got: 5,
        };
        assert!(format!("{err}").contains("row 3"));
        assert!(format!("{err}").contains("expected 2"));

        let err = Error::ShapeMismatch {
            predictions: (5, 1),
            references: (4, 1),
        };
        assert!(format!("{err}").contains("shape mismatch"));

        let err = Error::NotFitted;
        assert!(format!("{err}").contains("not fitted"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

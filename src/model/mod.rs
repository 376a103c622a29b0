//! Pluggable model contract.
//!
//! Submissions implement [`Model`] and register a zero-argument factory;
//! the ingestion driver resolves the factory by name from the submission
//! manifest. This replaces runtime code loading with an explicit seam:
//! anything implementing the trait can also be handed straight to
//! [`crate::ingest::run_with_model`].

mod baseline;
mod registry;

pub use baseline::MostFrequent;
pub use registry::factory_for;

use crate::data::Frame;
use crate::error::Result;

/// A trainable model over opaque tabular data.
///
/// `fit` sees the full training split at once; `predict` must return one
/// row per input row, in input order.
pub trait Model {
    fn fit(&mut self, features: &Frame, labels: &Frame) -> Result<()>;

    fn predict(&self, features: &Frame) -> Result<Frame>;
}

/// Zero-argument constructor for a model instance.
pub type ModelFactory = fn() -> Box<dyn Model>;

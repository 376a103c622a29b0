//! Name-based model factory resolution.

use crate::error::{Error, Result};
use crate::model::baseline::MostFrequent;
use crate::model::{Model, ModelFactory};

/// Resolve a registered model name to its factory.
pub fn factory_for(name: &str) -> Result<ModelFactory> {
    match name {
        "most_frequent" | "constant" => Ok(|| Box::new(MostFrequent::new()) as Box<dyn Model>),
        _ => Err(Error::UnknownModel(name.to_string())),
    }
}

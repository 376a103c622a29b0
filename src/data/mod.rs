//! Tabular data structures shared by both drivers.

mod frame;

pub use frame::{Frame, Value};

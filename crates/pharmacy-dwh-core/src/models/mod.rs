//! Domain models for the pharmacy warehouse.

mod source;
mod warehouse;

pub use source::*;
pub use warehouse::*;

//! In-memory dataset model and the shape-derived pieces of a table region.

pub mod column;
pub mod dataset;
pub mod normalizer;
pub mod range;

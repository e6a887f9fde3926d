//! Small utilities shared across the builder.

pub(crate) mod xml;

//! # Table Module
//!
//! Turns a normalized dataset into a table region: the validated table
//! style, the style plan for typed columns, and the table descriptor.

pub mod descriptor;
pub mod options;
pub mod planner;
pub mod region;
pub mod style;

//! # Sheet Coordinates
//!
//! Cell references and table placement. Everything here is 1-based, the
//! way spreadsheet applications number rows and columns.

pub mod placement;
pub mod reference;

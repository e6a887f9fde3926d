//! # Sheet Writer Bridge
//!
//! Contracts the builder hands its output to. The sheet-writing subsystem
//! implements them; this crate only calls them, in this order: cells,
//! styles, table registration.
use crate::database::normalizer::NormalizedDataset;
use crate::database::range::TableRange;
use crate::table::descriptor::TableDescriptor;
use crate::table::options::NaPolicy;
use crate::table::planner::CellStyle;
use anyhow::Result;
use std::fmt::Display;

/// Identifies a worksheet by name or 1-based position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SheetId {
    Name(String),
    Index(usize),
}

impl From<&str> for SheetId {
    fn from(value: &str) -> Self {
        SheetId::Name(value.to_owned())
    }
}

impl From<String> for SheetId {
    fn from(value: String) -> Self {
        SheetId::Name(value)
    }
}

impl From<usize> for SheetId {
    fn from(value: usize) -> Self {
        SheetId::Index(value)
    }
}

impl Display for SheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetId::Name(name) => write!(f, "'{}'", name),
            SheetId::Index(index) => write!(f, "#{}", index),
        }
    }
}

/// Writes literal cell values into a sheet.
pub trait CellWriter {
    /// Writes the header row (when `write_header`) followed by every data
    /// row, starting at the given 1-based row and column.
    fn write_cells(
        &mut self,
        sheet: &SheetId,
        data: &NormalizedDataset,
        write_header: bool,
        start_row: u32,
        start_col: u32,
        na: &NaPolicy,
    ) -> Result<()>;
}

/// Marks cells with a style.
pub trait StyleApplier {
    /// Styles the given rows and columns. With `grid_expand` every
    /// (row, column) pair is styled, otherwise rows and columns are paired
    /// index by index.
    fn apply_style(&mut self, sheet: &SheetId, style: &CellStyle, rows: &[u32], cols: &[u32], grid_expand: bool) -> Result<()>;
}

/// Creates table objects on a sheet.
pub trait TableRegistrar {
    /// Registers a new table and returns its unique id.
    fn register_table(&mut self, sheet: &SheetId, descriptor: &TableDescriptor) -> Result<u32>;

    /// Names and ranges of the tables already on the sheet.
    fn tables(&self, sheet: &SheetId) -> Result<Vec<(String, TableRange)>>;
}

/// A sheet-writing subsystem providing all three contracts.
pub trait SheetSink: CellWriter + StyleApplier + TableRegistrar {}

impl<T: CellWriter + StyleApplier + TableRegistrar> SheetSink for T {}

use crate::spreadsheet::reference::letters_to_column;
use crate::spreadsheet::reference::CellRef;
use crate::spreadsheet::reference::MAX_COLUMN;
use crate::spreadsheet::reference::MAX_ROW;
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while resolving where a table starts.
#[derive(Error, Debug, PartialEq)]
pub enum PlacementError {
    #[error("anchor must have exactly two elements, got {0}")]
    AnchorArity(usize),

    #[error("Invalid column reference '{0}'")]
    InvalidColumn(String),

    #[error("Invalid row reference '{0}'")]
    InvalidRow(String),

    #[error("Invalid cell reference '{0}'")]
    InvalidReference(String),
}

/// One element of a two-element anchor.
#[derive(Clone, Debug, PartialEq)]
pub enum Coordinate {
    Number(u32),
    Text(String),
}

impl From<u32> for Coordinate {
    fn from(value: u32) -> Self {
        Coordinate::Number(value)
    }
}

impl From<&str> for Coordinate {
    fn from(value: &str) -> Self {
        Coordinate::Text(value.to_owned())
    }
}

impl From<String> for Coordinate {
    fn from(value: String) -> Self {
        Coordinate::Text(value)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Number(value) => write!(f, "{}", value),
            Coordinate::Text(value) => f.write_str(value),
        }
    }
}

/// Normalized 1-based top-left anchor of a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Column index (1-based)
    pub col: u32,
    /// Row index (1-based)
    pub row: u32,
}

impl Default for Placement {
    /// Cell `A1`.
    fn default() -> Self {
        Placement { col: 1, row: 1 }
    }
}

impl Placement {
    /// Builds a placement from separate column and row indexes.
    pub fn new(col: u32, row: u32) -> Result<Self, PlacementError> {
        Ok(Placement {
            col: check_column(col, || col.to_string())?,
            row: check_row(row, || row.to_string())?,
        })
    }

    /// Resolves a `(column, row)` anchor. Columns may be letters or numbers,
    /// rows must be positive integers.
    pub fn from_anchor(anchor: &[Coordinate]) -> Result<Self, PlacementError> {
        let [column, row] = anchor else {
            return Err(PlacementError::AnchorArity(anchor.len()));
        };
        Ok(Placement {
            col: resolve_column(column)?,
            row: resolve_row(row)?,
        })
    }

    pub fn cell(&self) -> CellRef {
        CellRef::new(self.col, self.row)
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    /// Parses an A1-style anchor such as `B5` or `$B$5`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let pattern = Regex::new(r"^\$?([A-Za-z]+)\$?(\d+)$").expect("Hardcode regex pattern");
        let captures = pattern
            .captures(value.trim())
            .ok_or_else(|| PlacementError::InvalidReference(value.to_owned()))?;
        let column = Coordinate::Text(captures[1].to_owned());
        let row = Coordinate::Text(captures[2].to_owned());
        Placement::from_anchor(&[column, row])
    }
}

fn resolve_column(column: &Coordinate) -> Result<u32, PlacementError> {
    let index = match column {
        Coordinate::Number(value) => *value,
        Coordinate::Text(value) => {
            let value = value.trim();
            if value.chars().all(|c| c.is_ascii_digit()) {
                value.parse().map_err(|_| PlacementError::InvalidColumn(value.to_owned()))?
            } else {
                letters_to_column(value).ok_or_else(|| PlacementError::InvalidColumn(value.to_owned()))?
            }
        }
    };
    check_column(index, || column.to_string())
}

fn resolve_row(row: &Coordinate) -> Result<u32, PlacementError> {
    let index = match row {
        Coordinate::Number(value) => *value,
        Coordinate::Text(value) => value
            .trim()
            .parse()
            .map_err(|_| PlacementError::InvalidRow(value.to_owned()))?,
    };
    check_row(index, || row.to_string())
}

fn check_column(index: u32, raw: impl FnOnce() -> String) -> Result<u32, PlacementError> {
    if (1..=MAX_COLUMN).contains(&index) {
        Ok(index)
    } else {
        Err(PlacementError::InvalidColumn(raw()))
    }
}

fn check_row(index: u32, raw: impl FnOnce() -> String) -> Result<u32, PlacementError> {
    if (1..=MAX_ROW).contains(&index) {
        Ok(index)
    } else {
        Err(PlacementError::InvalidRow(raw()))
    }
}

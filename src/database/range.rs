use crate::spreadsheet::placement::Placement;
use crate::spreadsheet::reference::letters_to_column;
use crate::spreadsheet::reference::CellRef;
use regex::Regex;
use std::fmt::Display;
use thiserror::Error;

/// Errors related to Excel-style range parsing and computation.
#[derive(Error, Debug, PartialEq)]
pub enum RangeError {
    #[error("Invalid range format '{0}'")]
    FormatError(String),

    #[error("Range {0} exceeds the worksheet limits")]
    OutOfBounds(String),
}

/// Inclusive rectangle occupied by a table, header row included.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableRange {
    /// Top-left cell (1-based)
    pub top_left: CellRef,
    /// Bottom-right cell (1-based)
    pub bottom_right: CellRef,
}

impl TableRange {
    /// Derives the extent of a table of `rows` data rows and `cols` columns
    /// anchored at `placement`, reserving one extra row for the header.
    ///
    /// `rows` and `cols` must be at least one, which normalization guarantees.
    pub fn compute(placement: Placement, rows: usize, cols: usize, include_header: bool) -> Result<Self, RangeError> {
        let top_left = placement.cell();
        let overflow = || {
            RangeError::OutOfBounds(format!(
                "{}:+{}x{}",
                top_left.reference(),
                cols,
                rows + usize::from(include_header)
            ))
        };
        let width = u32::try_from(cols.max(1)).map_err(|_| overflow())?;
        let height = u32::try_from(rows.max(1) + usize::from(include_header)).map_err(|_| overflow())?;
        let bottom_right = CellRef::new(
            top_left.col.checked_add(width - 1).ok_or_else(overflow)?,
            top_left.row.checked_add(height - 1).ok_or_else(overflow)?,
        );
        let range = TableRange { top_left, bottom_right };
        if !bottom_right.in_bounds() {
            return Err(RangeError::OutOfBounds(range.to_string()));
        }
        Ok(range)
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.bottom_right.col - self.top_left.col + 1
    }

    /// Number of rows covered, header row included.
    pub fn height(&self) -> u32 {
        self.bottom_right.row - self.top_left.row + 1
    }

    /// Returns true if both ranges share at least one cell.
    pub fn overlaps(&self, other: &TableRange) -> bool {
        self.top_left.col <= other.bottom_right.col
            && other.top_left.col <= self.bottom_right.col
            && self.top_left.row <= other.bottom_right.row
            && other.top_left.row <= self.bottom_right.row
    }
}

impl Display for TableRange {
    /// Formats as `topLeft:bottomRight`, e.g. `B5:C8`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.top_left, self.bottom_right)
    }
}

impl TryFrom<&str> for TableRange {
    type Error = RangeError;

    /// Parses a bounded range such as `B5:C8`. The corners may be given in
    /// any order.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let pattern = Regex::new(r"^\$?([A-Z]+)\$?(\d+):\$?([A-Z]+)\$?(\d+)$").expect("Hardcode regex pattern");
        let upper = value.trim().to_ascii_uppercase();
        let format_error = || RangeError::FormatError(value.to_owned());
        let captures = pattern.captures(upper.as_str()).ok_or_else(format_error)?;
        let col = |index: usize| letters_to_column(&captures[index]).ok_or_else(format_error);
        let row = |index: usize| captures[index].parse::<u32>().map_err(|_| format_error());
        let (col1, row1, col2, row2) = (col(1)?, row(2)?, col(3)?, row(4)?);
        let range = TableRange {
            top_left: CellRef::new(col1.min(col2), row1.min(row2)),
            bottom_right: CellRef::new(col1.max(col2), row1.max(row2)),
        };
        if !range.top_left.in_bounds() || !range.bottom_right.in_bounds() {
            return Err(RangeError::OutOfBounds(value.to_owned()));
        }
        Ok(range)
    }
}

//! Conversions between 1-based sheet coordinates and Excel-style references.
//!
//! Columns use the bijective base-26 letter encoding: A = 1, ..., Z = 26,
//! AA = 27, ..., AZ = 52, BA = 53, ...

/// Largest column index a worksheet accepts (`XFD`).
pub const MAX_COLUMN: u32 = 16_384;

/// Largest row index a worksheet accepts.
pub const MAX_ROW: u32 = 1_048_576;

/// Converts a 1-based column index to its letter code.
///
/// Returns an empty string for `0`, which has no letter code.
pub fn column_to_letters(column: u32) -> String {
    let mut column = column;
    let mut letters = Vec::new();
    while column > 0 {
        column -= 1;
        letters.push(b'A' + (column % 26) as u8);
        column /= 26;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

/// Converts a column letter code (case-insensitive) to its 1-based index.
///
/// Returns `None` for empty input, non-letter characters, or codes too long
/// to fit in a `u32`.
pub fn letters_to_column(letters: &str) -> Option<u32> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0u32, |index, letter| {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let digit = letter.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        index.checked_mul(26)?.checked_add(digit)
    })
}

/// Formats a 1-based (column, row) pair as an A1 reference, e.g. `(2, 5)` -> `B5`.
pub fn index_to_reference(column: u32, row: u32) -> String {
    format!("{}{}", column_to_letters(column), row)
}

/// A single 1-based cell position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellRef {
    /// Column index (1-based)
    pub col: u32,
    /// Row index (1-based)
    pub row: u32,
}

impl CellRef {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Returns the A1 form of this position.
    pub fn reference(&self) -> String {
        index_to_reference(self.col, self.row)
    }

    /// Returns true if the position fits inside a worksheet.
    pub fn in_bounds(&self) -> bool {
        (1..=MAX_COLUMN).contains(&self.col) && (1..=MAX_ROW).contains(&self.row)
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.reference())
    }
}

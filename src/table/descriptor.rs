use crate::database::range::TableRange;
use crate::spreadsheet::placement::Placement;
use crate::table::style::TableStyleName;
use regex::Regex;
use thiserror::Error;

/// Errors raised while validating a table name.
#[derive(Error, Debug, PartialEq)]
pub enum TableNameError {
    #[error("table name cannot be empty")]
    Empty,

    #[error("table name exceeds the 255 character limit")]
    TooLong,

    #[error("table name '{0}' must start with a letter or '_'")]
    InvalidStart(String),

    #[error("table name '{name}' contains invalid character '{ch}'")]
    InvalidChar { name: String, ch: char },

    #[error("table name '{0}' conflicts with a cell reference")]
    CellReference(String),

    #[error("table name '{0}' is reserved")]
    Reserved(String),
}

/// Checks a table name against the workbook naming rules: letters, digits,
/// `_` and `.` only, starting with a letter or `_`, and not readable as a
/// cell reference.
pub fn validate_table_name(name: &str) -> Result<(), TableNameError> {
    if name.is_empty() {
        return Err(TableNameError::Empty);
    }
    if name.chars().count() > 255 {
        return Err(TableNameError::TooLong);
    }
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        if !(first.is_alphabetic() || first == '_') {
            return Err(TableNameError::InvalidStart(name.to_owned()));
        }
    }
    if let Some(ch) = chars.find(|ch| !(ch.is_alphanumeric() || *ch == '_' || *ch == '.')) {
        return Err(TableNameError::InvalidChar {
            name: name.to_owned(),
            ch,
        });
    }
    if ["TRUE", "FALSE"].iter().any(|reserved| name.eq_ignore_ascii_case(reserved)) {
        return Err(TableNameError::Reserved(name.to_owned()));
    }
    let r1c1 = Regex::new(r"^(?i:r\d*(c\d*)?|c\d*)$").expect("Hardcode regex pattern");
    if name.parse::<Placement>().is_ok() || r1c1.is_match(name) {
        return Err(TableNameError::CellReference(name.to_owned()));
    }
    Ok(())
}

/// Display flags stored on the table object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableDisplay {
    /// Show filter buttons on the header row
    pub with_filter: bool,
    pub first_column: bool,
    pub last_column: bool,
    pub banded_rows: bool,
    pub banded_columns: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        TableDisplay {
            with_filter: true,
            first_column: false,
            last_column: false,
            banded_rows: true,
            banded_columns: false,
        }
    }
}

/// Everything the table registrar needs to create the table object.
#[derive(Clone, Debug, PartialEq)]
pub struct TableDescriptor {
    /// Validated table name, `None` to let the registrar pick one
    pub name: Option<String>,
    /// XML-escaped header labels, one per column
    pub header_labels: Vec<String>,
    /// Occupied range, header row included
    pub range: TableRange,
    pub show_header: bool,
    pub style: TableStyleName,
    pub display: TableDisplay,
}

impl TableDescriptor {
    /// The `ref` attribute value, e.g. `B5:C8`.
    pub fn reference(&self) -> String {
        self.range.to_string()
    }
}

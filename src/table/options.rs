use crate::spreadsheet::placement::Placement;
use crate::table::descriptor::TableDisplay;

/// How missing values are written.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum NaPolicy {
    /// Leave the cell blank
    #[default]
    Blank,
    /// Write the `#N/A` error value
    ErrorValue,
    /// Write a fixed string
    Text(String),
}

/// Options controlling how a dataset becomes a table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableOptions {
    /// Top-left cell of the table.
    pub placement: Placement,

    /// Show the dataset's column names as the header row; placeholder labels
    /// are used otherwise.
    pub include_header: bool,

    /// Prepend a "row names" column.
    pub include_row_names: bool,

    /// Table style name, validated case-insensitively.
    pub style: String,

    /// Table name; the registrar assigns one when absent.
    pub table_name: Option<String>,

    /// Table display flags.
    pub display: TableDisplay,

    /// Missing value handling, passed to the cell writer.
    pub na: NaPolicy,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            placement: Placement::default(),
            include_header: true,
            include_row_names: false,
            style: "TableStyleLight9".to_owned(),
            table_name: None,
            display: TableDisplay::default(),
            na: NaPolicy::default(),
        }
    }
}

impl TableOptions {
    pub fn at(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    pub fn row_names(mut self, include_row_names: bool) -> Self {
        self.include_row_names = include_row_names;
        self
    }

    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }
}

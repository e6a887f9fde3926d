//! Maps semantic column types to rectangular style assignments.

use crate::database::column::ColumnType;
use crate::spreadsheet::placement::Placement;
use log::trace;

/// Style kinds a table column can receive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Date,
    Currency,
    Accounting,
    Hyperlink,
    Percentage,
    Scientific,
    Comma,
}

/// Cell formatting the style collaborator applies for a [`StyleKind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellStyle {
    /// Built-in number format id
    pub num_fmt_id: Option<u32>,
    /// Font colour as ARGB hex
    pub font_colour: Option<&'static str>,
    /// Single underline
    pub underline: bool,
}

impl StyleKind {
    /// Assignment order in a plan.
    pub const ALL: [StyleKind; 7] = [
        StyleKind::Date,
        StyleKind::Currency,
        StyleKind::Accounting,
        StyleKind::Hyperlink,
        StyleKind::Percentage,
        StyleKind::Scientific,
        StyleKind::Comma,
    ];

    /// The style kind a column type maps to, `None` for plain columns.
    pub const fn for_column(kind: ColumnType) -> Option<StyleKind> {
        match kind {
            ColumnType::Plain => None,
            ColumnType::Date | ColumnType::Timestamp => Some(StyleKind::Date),
            ColumnType::Currency => Some(StyleKind::Currency),
            ColumnType::Accounting => Some(StyleKind::Accounting),
            ColumnType::Hyperlink => Some(StyleKind::Hyperlink),
            ColumnType::Percentage => Some(StyleKind::Percentage),
            ColumnType::Scientific => Some(StyleKind::Scientific),
            ColumnType::Comma => Some(StyleKind::Comma),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Date => "Date",
            StyleKind::Currency => "Currency",
            StyleKind::Accounting => "Accounting",
            StyleKind::Hyperlink => "Hyperlink",
            StyleKind::Percentage => "Percentage",
            StyleKind::Scientific => "Scientific",
            StyleKind::Comma => "Comma",
        }
    }

    /// Cell formatting for this kind, using built-in number format ids
    /// (14 `m/d/yyyy`, 7 currency, 44 accounting, 10 `0.00%`, 11 `0.00E+00`,
    /// 4 `#,##0.00`).
    pub const fn style(&self) -> CellStyle {
        match self {
            StyleKind::Date => number_format(14),
            StyleKind::Currency => number_format(7),
            StyleKind::Accounting => number_format(44),
            StyleKind::Percentage => number_format(10),
            StyleKind::Scientific => number_format(11),
            StyleKind::Comma => number_format(4),
            StyleKind::Hyperlink => CellStyle {
                num_fmt_id: None,
                font_colour: Some("FF0000FF"),
                underline: true,
            },
        }
    }
}

const fn number_format(id: u32) -> CellStyle {
    CellStyle {
        num_fmt_id: Some(id),
        font_colour: None,
        underline: false,
    }
}

/// Applies one style kind to the data rows of a set of sheet columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleAssignment {
    /// First data row (1-based, inclusive)
    pub first_row: u32,
    /// Last data row (1-based, inclusive)
    pub last_row: u32,
    /// Absolute sheet columns (1-based), ascending, not necessarily contiguous
    pub columns: Vec<u32>,
    pub kind: StyleKind,
}

impl StyleAssignment {
    /// Every row the assignment covers.
    pub fn rows(&self) -> Vec<u32> {
        (self.first_row..=self.last_row).collect()
    }
}

/// Plans one assignment per style kind present among `kinds`.
///
/// Rows cover data rows only, below the header when one is shown.
/// `row_count` is the normalized row count and must be at least one.
pub fn plan_styles<I>(kinds: I, placement: Placement, row_count: u32, include_header: bool) -> Vec<StyleAssignment>
where
    I: IntoIterator<Item = ColumnType>,
{
    let first_row = placement.row + u32::from(include_header);
    let last_row = first_row + row_count.max(1) - 1;
    let styled: Vec<(u32, StyleKind)> = kinds
        .into_iter()
        .zip(placement.col..)
        .filter_map(|(kind, col)| StyleKind::for_column(kind).map(|style| (col, style)))
        .collect();

    StyleKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let columns: Vec<u32> = styled
                .iter()
                .filter(|(_, style)| *style == kind)
                .map(|(col, _)| *col)
                .collect();
            if columns.is_empty() {
                return None;
            }
            trace!("style {} rows {}-{} columns {:?}", kind.as_str(), first_row, last_row, columns);
            Some(StyleAssignment {
                first_row,
                last_row,
                columns,
                kind,
            })
        })
        .collect()
}

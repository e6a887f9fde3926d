//! # Spreadsheet Table Regions
//!
//! Turns a typed, tabular dataset into a table region of a spreadsheet
//! document, ready for a sheet writer to persist.
//!
//! ## Features
//!
//! - **Placement**: start the table from separate column/row indexes, a
//!   two-element anchor (`["B", 5]`) or an A1 reference (`"B5"`)
//! - **Normalization**: optional "row names" column, placeholder header
//!   labels, and a single padding row for empty datasets
//! - **Range calculation**: the `topLeft:bottomRight` reference of the table,
//!   header row included
//! - **Style planning**: date, currency, accounting, hyperlink, percentage,
//!   scientific and comma columns mapped to cell styles
//! - **Table styles**: the built-in `TableStyleLight1-21`,
//!   `TableStyleMedium1-28` and `TableStyleDark1-11`, matched ignoring case
//! - **Pure**: building borrows the dataset and never writes anything;
//!   [`TableRegion::write`] drives the sheet writer through the
//!   [`bridge`] traits
//!
//! ## Example
//!
//! ```
//! use sheet_table::{Column, ColumnType, Dataset, Placement, TableOptions, TableRegion};
//!
//! let dataset = Dataset::new(vec![
//!     Column::new("Date", ColumnType::Date, ["2024-01-01", "2024-01-02", "2024-01-03"]),
//!     Column::new("Amount", ColumnType::Currency, [10.0, 20.5, 30.25]),
//! ]);
//! let options = TableOptions::default().at(Placement::new(2, 5)?).style("tablestylemedium2");
//! let region = TableRegion::build(&dataset, &options)?;
//!
//! assert_eq!(region.reference(), "B5:C8");
//! assert_eq!(region.descriptor.style.to_string(), "TableStyleMedium2");
//! # Ok::<(), sheet_table::TableRegionError>(())
//! ```

pub mod bridge;
pub mod database;
pub mod error;
mod helpers;
pub mod spreadsheet;
pub mod table;

pub use crate::bridge::CellWriter;
pub use crate::bridge::SheetId;
pub use crate::bridge::SheetSink;
pub use crate::bridge::StyleApplier;
pub use crate::bridge::TableRegistrar;
pub use crate::database::column::CellValue;
pub use crate::database::column::Column;
pub use crate::database::column::ColumnType;
pub use crate::database::dataset::Dataset;
pub use crate::database::normalizer::NormalizedDataset;
pub use crate::database::range::TableRange;
pub use crate::error::ErrorKind;
pub use crate::error::TableRegionError;
pub use crate::spreadsheet::placement::Coordinate;
pub use crate::spreadsheet::placement::Placement;
pub use crate::spreadsheet::reference::CellRef;
pub use crate::table::descriptor::TableDescriptor;
pub use crate::table::descriptor::TableDisplay;
pub use crate::table::options::NaPolicy;
pub use crate::table::options::TableOptions;
pub use crate::table::planner::CellStyle;
pub use crate::table::planner::StyleAssignment;
pub use crate::table::planner::StyleKind;
pub use crate::table::region::TableRegion;
pub use crate::table::style::TableStyleName;

//! Builds the normalized view of a dataset that the rest of the pipeline
//! works on. The caller's dataset is only borrowed.

use crate::database::column::CellValue;
use crate::database::column::Column;
use crate::database::column::ColumnType;
use crate::database::dataset::Dataset;
use crate::error::TableRegionError;
use crate::helpers::xml::escape_xml_text;
use log::debug;
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

/// Name of the synthetic column holding row identifiers.
pub const ROW_NAMES_COLUMN: &str = "row names";

/// Errors raised while resolving header labels.
#[derive(Error, Debug, PartialEq)]
pub enum HeaderError {
    #[error("Duplicate column name '{0}', table column names must be unique ignoring case")]
    DuplicateLabel(String),
}

/// A dataset with the row-name column applied, at least one row, and
/// resolved header labels.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedDataset {
    /// Columns in output order, the row-name column first when requested
    pub columns: Vec<Column>,
    /// Number of data rows, never zero
    pub row_count: usize,
    /// Raw header labels, one per column
    pub labels: Vec<String>,
    /// XML-escaped header labels, one per column
    pub header_labels: Vec<String>,
    /// Whether the header row is shown
    pub include_header: bool,
}

impl NormalizedDataset {
    /// Normalizes `dataset` without modifying it.
    pub fn build(dataset: &Dataset, include_header: bool, include_row_names: bool) -> Result<Self, TableRegionError> {
        dataset.validate()?;

        let height = dataset.height();
        let mut columns = Vec::with_capacity(dataset.width() + usize::from(include_row_names));
        if include_row_names {
            columns.push(row_names_column(dataset, height));
        }
        columns.extend(dataset.columns.iter().cloned());

        let labels = resolve_labels(&columns, include_header)?;

        let row_count = if height == 0 {
            warn!("dataset has no rows, padding with one empty row");
            for column in columns.iter_mut() {
                column.values.push(CellValue::Text(String::new()));
            }
            1
        } else {
            height
        };

        let header_labels = labels.iter().map(|label| escape_xml_text(label).into_owned()).collect();
        debug!(
            "normalized dataset: {} columns, {} rows, header {}, row names {}",
            columns.len(),
            row_count,
            include_header,
            include_row_names
        );

        Ok(NormalizedDataset {
            columns,
            row_count,
            labels,
            header_labels,
            include_header,
        })
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column types in output order.
    pub fn kinds(&self) -> impl ExactSizeIterator<Item = ColumnType> + '_ {
        self.columns.iter().map(|column| column.kind)
    }

    /// Returns the values of one row, or `None` past the end.
    pub fn row(&self, index: usize) -> Option<Vec<&CellValue>> {
        if index < self.row_count {
            Some(self.columns.iter().map(|column| &column.values[index]).collect())
        } else {
            None
        }
    }
}

fn row_names_column(dataset: &Dataset, height: usize) -> Column {
    let values: Vec<CellValue> = match &dataset.row_names {
        Some(row_names) => row_names.iter().map(|name| CellValue::Text(name.to_owned())).collect(),
        None => (1..=height).map(|index| CellValue::Text(index.to_string())).collect(),
    };
    Column {
        name: ROW_NAMES_COLUMN.to_owned(),
        kind: ColumnType::Plain,
        values,
    }
}

/// Column names when the header is shown, `Column1..ColumnN` otherwise.
fn resolve_labels(columns: &[Column], include_header: bool) -> Result<Vec<String>, HeaderError> {
    let labels: Vec<String> = if include_header {
        columns.iter().map(|column| column.name.to_owned()).collect()
    } else {
        (1..=columns.len()).map(|index| format!("Column{}", index)).collect()
    };

    let mut seen: HashMap<String, usize> = HashMap::with_capacity(labels.len());
    for (index, label) in labels.iter().enumerate() {
        if seen.insert(label.to_lowercase(), index).is_some() {
            return Err(HeaderError::DuplicateLabel(label.to_owned()));
        }
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn sales() -> Dataset {
        Dataset::new(vec![
            Column::new("Date", ColumnType::Date, ["2024-01-01", "2024-01-02"]),
            Column::new("R&D", ColumnType::Currency, [1.0, 2.0]),
        ])
    }

    #[test]
    fn keeps_columns_and_escapes_labels() {
        let normalized = NormalizedDataset::build(&sales(), true, false).unwrap();
        assert_eq!(normalized.row_count, 2);
        assert_eq!(normalized.column_count(), 2);
        assert_eq!(normalized.labels, vec!["Date", "R&D"]);
        assert_eq!(normalized.header_labels, vec!["Date", "R&amp;D"]);
        assert!(normalized.include_header);
    }

    #[test]
    fn synthesizes_labels_without_header() {
        let normalized = NormalizedDataset::build(&sales(), false, false).unwrap();
        assert_eq!(normalized.labels, vec!["Column1", "Column2"]);
        assert!(!normalized.include_header);
    }

    #[test]
    fn prepends_row_names() {
        let dataset = sales();
        let normalized = NormalizedDataset::build(&dataset, true, true).unwrap();
        assert_eq!(normalized.column_count(), 3);
        assert_eq!(normalized.columns[0].name, ROW_NAMES_COLUMN);
        assert_eq!(normalized.columns[0].kind, ColumnType::Plain);
        assert_eq!(normalized.columns[0].values, vec![CellValue::from("1"), CellValue::from("2")]);
        assert_eq!(normalized.labels, vec!["row names", "Date", "R&D"]);
        assert_eq!(dataset.width(), 2);
    }

    #[test]
    fn uses_supplied_row_names() {
        let dataset = sales().with_row_names(["first", "second"]);
        let normalized = NormalizedDataset::build(&dataset, true, true).unwrap();
        assert_eq!(normalized.row(1).unwrap()[0], &CellValue::from("second"));
    }

    #[test]
    fn pads_empty_dataset() {
        let dataset = Dataset::new(vec![
            Column::new("a", ColumnType::Date, Vec::<CellValue>::new()),
            Column::new("b", ColumnType::Plain, Vec::<CellValue>::new()),
        ]);
        let normalized = NormalizedDataset::build(&dataset, true, true).unwrap();
        assert_eq!(normalized.row_count, 1);
        for column in &normalized.columns {
            assert_eq!(column.values, vec![CellValue::Text(String::new())]);
        }
        assert_eq!(normalized.columns[1].kind, ColumnType::Date);
        assert!(normalized.row(1).is_none());
    }

    #[test]
    fn rejects_non_tabular_and_duplicate_labels() {
        let error = NormalizedDataset::build(&Dataset::default(), true, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Type);

        let dataset = Dataset::new(vec![
            Column::new("Name", ColumnType::Plain, ["x"]),
            Column::new("name", ColumnType::Plain, ["y"]),
        ]);
        let error = NormalizedDataset::build(&dataset, true, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
        assert!(NormalizedDataset::build(&dataset, false, false).is_ok());
    }
}

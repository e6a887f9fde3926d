use crate::database::column::Column;
use thiserror::Error;

/// Errors raised when a dataset is not tabular.
#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("dataset has no columns")]
    NoColumns,

    #[error("column '{name}' has {actual} rows, expected {expected}")]
    RaggedColumn {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("dataset has {actual} row names for {expected} rows")]
    RowNameCount { expected: usize, actual: usize },
}

/// An ordered set of named, typed columns. Construction does not check the
/// shape, [`Dataset::validate`] does.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    /// Columns in output order
    pub columns: Vec<Column>,
    /// Optional row identifiers, used when row names are requested
    pub row_names: Option<Vec<String>>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Self {
        Dataset {
            columns,
            row_names: None,
        }
    }

    pub fn with_row_names<I, S>(mut self, row_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.row_names = Some(row_names.into_iter().map(Into::into).collect());
        self
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows, taken from the first column.
    pub fn height(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    /// Checks that the dataset is a proper rectangle: at least one column,
    /// all columns of equal length and one row name per row.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let expected = match self.columns.first() {
            Some(column) => column.len(),
            None => return Err(DatasetError::NoColumns),
        };
        if let Some(column) = self.columns.iter().find(|column| column.len() != expected) {
            return Err(DatasetError::RaggedColumn {
                name: column.name.to_owned(),
                expected,
                actual: column.len(),
            });
        }
        match &self.row_names {
            Some(row_names) if row_names.len() != expected => Err(DatasetError::RowNameCount {
                expected,
                actual: row_names.len(),
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::column::ColumnType;

    #[test]
    fn dataset_shape() {
        let dataset = Dataset::new(vec![
            Column::new("a", ColumnType::Plain, ["x", "y"]),
            Column::new("b", ColumnType::Plain, ["z", "w"]),
        ]);
        assert_eq!(dataset.width(), 2);
        assert_eq!(dataset.height(), 2);
        assert_eq!(dataset.validate(), Ok(()));
    }

    #[test]
    fn dataset_not_tabular() {
        assert_eq!(Dataset::default().validate(), Err(DatasetError::NoColumns));

        let ragged = Dataset::new(vec![
            Column::new("a", ColumnType::Plain, ["x", "y"]),
            Column::new("b", ColumnType::Plain, ["z"]),
        ]);
        assert_eq!(
            ragged.validate(),
            Err(DatasetError::RaggedColumn {
                name: "b".to_owned(),
                expected: 2,
                actual: 1,
            })
        );

        let names = Dataset::new(vec![Column::new("a", ColumnType::Plain, ["x"])]).with_row_names(["r1", "r2"]);
        assert_eq!(names.validate(), Err(DatasetError::RowNameCount { expected: 1, actual: 2 }));
    }
}

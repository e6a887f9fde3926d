use thiserror::Error;

/// Main error type for the table region builder.
/// Aggregates the errors of the individual pipeline stages.
#[derive(Error, Debug, PartialEq)]
pub enum TableRegionError {
    #[error("{message}: {source}")]
    WithContextError {
        message: String,
        source: Box<TableRegionError>,
    },

    // Placement errors
    #[error("{0}")]
    PlacementError(#[from] crate::spreadsheet::placement::PlacementError),

    #[error("{0}")]
    RangeError(#[from] crate::database::range::RangeError),

    // Dataset errors
    #[error("{0}")]
    DatasetError(#[from] crate::database::dataset::DatasetError),

    #[error("{0}")]
    ColumnError(#[from] crate::database::column::ColumnError),

    // Validation errors
    #[error("{0}")]
    HeaderError(#[from] crate::database::normalizer::HeaderError),

    #[error("{0}")]
    StyleNameError(#[from] crate::table::style::StyleNameError),

    #[error("{0}")]
    TableNameError(#[from] crate::table::descriptor::TableNameError),
}

/// Broad classes of builder failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed placement or a table that does not fit the sheet
    Argument,
    /// The dataset is not tabular
    Type,
    /// A name is not acceptable
    Validation,
}

impl TableRegionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableRegionError::WithContextError { source, .. } => source.kind(),
            TableRegionError::PlacementError(_) | TableRegionError::RangeError(_) => ErrorKind::Argument,
            TableRegionError::DatasetError(_) | TableRegionError::ColumnError(_) => ErrorKind::Type,
            TableRegionError::HeaderError(_)
            | TableRegionError::StyleNameError(_)
            | TableRegionError::TableNameError(_) => ErrorKind::Validation,
        }
    }
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, TableRegionError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| TableRegionError::WithContextError {
            message: message.to_owned(),
            source: Box::new(e),
        })
    }
}

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Display;
use thiserror::Error;

/// Errors related to column type parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ColumnError {
    #[error("Invalid column type '{0}'")]
    TypeError(String),
}

/// Semantic column types. The type only drives styling, never the literal
/// value that ends up in the cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// No explicit style
    #[default]
    Plain,
    /// Calendar date
    Date,
    /// Date and time
    Timestamp,
    /// Currency amounts
    Currency,
    /// Accounting amounts
    Accounting,
    /// Link targets, rendered as underlined blue text
    Hyperlink,
    /// Fractions shown as percentages
    Percentage,
    /// Numbers in scientific notation
    Scientific,
    /// Numbers with thousands separators
    Comma,
}

impl ColumnType {
    /// Returns the string representation of the column type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Plain => "plain",
            ColumnType::Date => "date",
            ColumnType::Timestamp => "timestamp",
            ColumnType::Currency => "currency",
            ColumnType::Accounting => "accounting",
            ColumnType::Hyperlink => "hyperlink",
            ColumnType::Percentage => "percentage",
            ColumnType::Scientific => "scientific",
            ColumnType::Comma => "comma",
        }
    }

    /// Parses a column type from a string representation.
    /// Supports various aliases for each type.
    pub fn parse(name: &str) -> Result<Self, ColumnError> {
        match name.to_ascii_uppercase().as_str() {
            "PLAIN" | "TEXT" | "STRING" | "GENERAL" => Ok(Self::Plain),
            "DATE" => Ok(Self::Date),
            "DATETIME" | "TIMESTAMP" | "POSIXCT" => Ok(Self::Timestamp),
            "CURRENCY" => Ok(Self::Currency),
            "ACCOUNTING" => Ok(Self::Accounting),
            "HYPERLINK" | "LINK" | "URL" => Ok(Self::Hyperlink),
            "PERCENT" | "PERCENTAGE" => Ok(Self::Percentage),
            "SCIENTIFIC" => Ok(Self::Scientific),
            "COMMA" => Ok(Self::Comma),
            _ => Err(ColumnError::TypeError(name.to_string())),
        }
    }

    /// Returns true if this column type represents date/time related values.
    #[inline]
    pub fn is_datetime(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Timestamp)
    }
}

/// A literal cell value, carried verbatim to the cell writer.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    /// A missing value, written according to the configured NA policy
    Missing,
    Boolean(bool),
    Number(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Empty | CellValue::Missing => Ok(()),
            CellValue::Boolean(value) => write!(f, "{}", if *value { "TRUE" } else { "FALSE" }),
            CellValue::Number(value) => write!(f, "{}", value),
            CellValue::Text(value) => f.write_str(value),
            CellValue::Date(value) => write!(f, "{}", value),
            CellValue::DateTime(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::DateTime(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Missing)
    }
}

/// A named, typed column of a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Column name, used as the header label
    pub name: String,
    /// Semantic type
    pub kind: ColumnType,
    /// Cell values, one per row
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new<N, I, V>(name: N, kind: ColumnType, values: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        Column {
            name: name.into(),
            kind,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of rows in this column.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aliases() {
        assert_eq!(ColumnType::parse("date"), Ok(ColumnType::Date));
        assert_eq!(ColumnType::parse("POSIXct"), Ok(ColumnType::Timestamp));
        assert_eq!(ColumnType::parse("Currency"), Ok(ColumnType::Currency));
        assert_eq!(ColumnType::parse("url"), Ok(ColumnType::Hyperlink));
        assert_eq!(ColumnType::parse("percent"), Ok(ColumnType::Percentage));
    }

    #[test]
    fn parse_rejects_misspelled_tags() {
        assert_eq!(ColumnType::parse("curency"), Err(ColumnError::TypeError("curency".to_owned())));
    }

    #[test]
    fn as_str_parses_back() {
        for kind in [
            ColumnType::Plain,
            ColumnType::Date,
            ColumnType::Timestamp,
            ColumnType::Currency,
            ColumnType::Accounting,
            ColumnType::Hyperlink,
            ColumnType::Percentage,
            ColumnType::Scientific,
            ColumnType::Comma,
        ] {
            assert_eq!(ColumnType::parse(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn column_values() {
        let column = Column::new("Amount", ColumnType::Currency, [Some(1.5), None]);
        assert_eq!(column.len(), 2);
        assert_eq!(column.values, vec![CellValue::Number(1.5), CellValue::Missing]);
        assert_eq!(CellValue::Boolean(true).to_string(), "TRUE");
        assert_eq!(CellValue::Missing.to_string(), "");
    }
}

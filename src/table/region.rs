use crate::bridge::SheetId;
use crate::bridge::SheetSink;
use crate::database::dataset::Dataset;
use crate::database::normalizer::NormalizedDataset;
use crate::database::range::TableRange;
use crate::error::ResultMessage;
use crate::error::TableRegionError;
use crate::table::descriptor::validate_table_name;
use crate::table::descriptor::TableDescriptor;
use crate::table::options::NaPolicy;
use crate::table::options::TableOptions;
use crate::table::planner::plan_styles;
use crate::table::planner::StyleAssignment;
use crate::table::style::TableStyleName;
use anyhow::bail;
use anyhow::Context;
use log::debug;
use thiserror::Error;

/// Conflicts with tables already on the target sheet.
#[derive(Error, Debug, PartialEq)]
pub enum SheetConflictError {
    #[error("table range {range} overlaps existing table '{name}' at {existing}")]
    Overlap {
        range: String,
        name: String,
        existing: String,
    },

    #[error("table name '{0}' already exists on the sheet")]
    DuplicateName(String),
}

/// The complete, internally consistent output of the builder.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRegion {
    /// Normalized data handed to the cell writer
    pub data: NormalizedDataset,
    /// Table object description
    pub descriptor: TableDescriptor,
    /// Style assignments, one per style kind present
    pub styles: Vec<StyleAssignment>,
    /// Missing value handling
    pub na: NaPolicy,
}

impl TableRegion {
    /// Turns a dataset into a table region. The dataset is not modified and
    /// nothing is produced unless every step succeeds.
    pub fn build(dataset: &Dataset, options: &TableOptions) -> Result<Self, TableRegionError> {
        let style = TableStyleName::parse(&options.style)?;
        if let Some(name) = &options.table_name {
            validate_table_name(name)?;
        }

        let data = NormalizedDataset::build(dataset, options.include_header, options.include_row_names)
            .with_prefix("normalize dataset")?;
        let range = TableRange::compute(options.placement, data.row_count, data.column_count(), data.include_header)?;
        // Bounded by the sheet row limit.
        let row_count = range.height() - u32::from(data.include_header);
        let styles = plan_styles(data.kinds(), options.placement, row_count, data.include_header);
        debug!("table region {} style {} with {} style assignments", range, style, styles.len());

        let descriptor = TableDescriptor {
            name: options.table_name.clone(),
            header_labels: data.header_labels.clone(),
            range,
            show_header: data.include_header,
            style,
            display: options.display,
        };
        Ok(TableRegion {
            data,
            descriptor,
            styles,
            na: options.na.clone(),
        })
    }

    /// The range descriptor, e.g. `B5:C8`.
    pub fn reference(&self) -> String {
        self.descriptor.reference()
    }

    /// Hands the region to the sheet writer: cells, then styles, then the
    /// table object. Conflicts with existing tables are detected before
    /// anything is written. Returns the new table's id.
    pub fn write<S: SheetSink + ?Sized>(&self, sheet: &SheetId, sink: &mut S) -> anyhow::Result<u32> {
        self.check_conflicts(sheet, &*sink)?;

        let top_left = self.descriptor.range.top_left;
        sink.write_cells(sheet, &self.data, self.data.include_header, top_left.row, top_left.col, &self.na)
            .with_context(|| format!("Failed to write cells of table {} on sheet {}", self.reference(), sheet))?;

        for assignment in &self.styles {
            sink.apply_style(sheet, &assignment.kind.style(), &assignment.rows(), &assignment.columns, true)
                .with_context(|| format!("Failed to apply {} style on sheet {}", assignment.kind.as_str(), sheet))?;
        }

        let id = sink
            .register_table(sheet, &self.descriptor)
            .with_context(|| format!("Failed to register table {} on sheet {}", self.reference(), sheet))?;
        debug!("registered table {} at {} on sheet {}", id, self.reference(), sheet);
        Ok(id)
    }

    fn check_conflicts<S: SheetSink + ?Sized>(&self, sheet: &SheetId, sink: &S) -> anyhow::Result<()> {
        let existing = sink
            .tables(sheet)
            .with_context(|| format!("Failed to list tables on sheet {}", sheet))?;
        for (name, range) in existing {
            if let Some(own) = &self.descriptor.name {
                if own.eq_ignore_ascii_case(&name) {
                    bail!(SheetConflictError::DuplicateName(own.to_owned()));
                }
            }
            if range.overlaps(&self.descriptor.range) {
                bail!(SheetConflictError::Overlap {
                    range: self.reference(),
                    name,
                    existing: range.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::column::CellValue;
    use crate::database::column::Column;
    use crate::database::column::ColumnType;
    use crate::error::ErrorKind;
    use crate::spreadsheet::placement::Placement;
    use crate::table::planner::StyleKind;
    use pretty_assertions::assert_eq;

    fn payments(rows: usize) -> Dataset {
        Dataset::new(vec![
            Column::new("Date", ColumnType::Date, (0..rows).map(|day| format!("2024-01-{:02}", day + 1))),
            Column::new("Amount", ColumnType::Currency, (0..rows).map(|amount| amount as f64)),
        ])
    }

    #[test]
    fn builds_region() {
        let options = TableOptions::default().at(Placement::new(2, 5).unwrap());
        let region = TableRegion::build(&payments(3), &options).unwrap();
        assert_eq!(region.reference(), "B5:C8");
        assert_eq!(region.descriptor.style.to_string(), "TableStyleLight9");
        assert_eq!(region.descriptor.header_labels, vec!["Date", "Amount"]);
        assert!(region.descriptor.show_header);
        assert_eq!(
            region.styles,
            vec![
                StyleAssignment {
                    first_row: 6,
                    last_row: 8,
                    columns: vec![2],
                    kind: StyleKind::Date,
                },
                StyleAssignment {
                    first_row: 6,
                    last_row: 8,
                    columns: vec![3],
                    kind: StyleKind::Currency,
                },
            ]
        );
    }

    #[test]
    fn empty_dataset_gets_one_row() {
        let region = TableRegion::build(&payments(0), &TableOptions::default()).unwrap();
        assert_eq!(region.reference(), "A1:B2");
        assert_eq!(region.data.row_count, 1);
        assert_eq!(region.data.row(0).unwrap(), vec![&CellValue::from(""), &CellValue::from("")]);
        assert_eq!(region.styles[0].first_row, 2);
        assert_eq!(region.styles[0].last_row, 2);
    }

    #[test]
    fn row_names_shift_styles() {
        let options = TableOptions::default().at(Placement::new(2, 5).unwrap()).row_names(true);
        let region = TableRegion::build(&payments(3), &options).unwrap();
        assert_eq!(region.reference(), "B5:D8");
        assert_eq!(region.styles[0].columns, vec![3]);
        assert_eq!(region.styles[1].columns, vec![4]);
        assert_eq!(region.descriptor.header_labels[0], "row names");
    }

    #[test]
    fn canonical_style_name() {
        let options = TableOptions::default().style("tablestylelight5");
        let region = TableRegion::build(&payments(1), &options).unwrap();
        assert_eq!(region.descriptor.style.to_string(), "TableStyleLight5");
    }

    #[test]
    fn style_is_validated_before_dataset() {
        let options = TableOptions::default().style("TableStyleLight99");
        let error = TableRegion::build(&Dataset::default(), &options).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn invalid_table_name() {
        let options = TableOptions::default().name("my table");
        let error = TableRegion::build(&payments(1), &options).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn non_tabular_dataset_has_context() {
        let error = TableRegion::build(&Dataset::default(), &TableOptions::default()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Type);
        assert_eq!(error.to_string(), "normalize dataset: dataset has no columns");
    }

    #[test]
    fn out_of_bounds_range() {
        let options = TableOptions::default().at(Placement::new(16_384, 1).unwrap());
        let error = TableRegion::build(&payments(1), &options).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Argument);
    }
}

//! CSV file boundary: raw rows out of a `.csv` file.

use std::path::Path;

use crate::error::AnalysisResult;
use crate::types::{RawCell, RawTable};

/// Read a CSV file into a [`RawTable`], header row included.
///
/// No typing happens here: every non-empty field comes back as
/// [`RawCell::Text`] and the coercion stage decides what it really is. Records
/// may have uneven lengths; short rows are padded downstream.
pub fn raw_table_from_path(path: impl AsRef<Path>) -> AnalysisResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    raw_table_from_reader(&mut rdr)
}

/// Read CSV data from an existing CSV reader into a [`RawTable`].
///
/// The reader should be configured with `has_headers(false)`; the first record
/// is kept as the header row of the returned table.
pub fn raw_table_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> AnalysisResult<RawTable> {
    let mut rows: Vec<Vec<RawCell>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::Text(field.to_owned())
                    }
                })
                .collect(),
        );
    }
    Ok(RawTable::new(rows))
}

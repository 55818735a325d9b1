#![cfg(feature = "excel")]

//! Excel file boundary: raw rows out of the first worksheet of a workbook.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::AnalysisResult;
use crate::types::{RawCell, RawTable};

/// Read the first worksheet of a workbook (`.xlsx`, `.xls`) into a [`RawTable`].
///
/// Multi-sheet workbooks are not merged; only the first sheet is read. Leading
/// fully-empty rows are skipped so the header row is the first row with any
/// content, matching what spreadsheet UIs display as the data region.
pub fn raw_table_from_path(path: impl AsRef<Path>) -> AnalysisResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(calamine::Error::Msg("workbook has no sheets"))?;
    let range = workbook.worksheet_range(&sheet)?;

    Ok(raw_table_from_range(&range))
}

/// Convert a worksheet cell range into a [`RawTable`].
pub fn raw_table_from_range(range: &calamine::Range<Data>) -> RawTable {
    let rows: Vec<Vec<RawCell>> = range
        .rows()
        .skip_while(|row| row.iter().all(|c| matches!(c, Data::Empty)))
        .map(|row| row.iter().map(raw_cell).collect())
        .collect();
    RawTable::new(rows)
}

/// Map a calamine cell to the loosely-typed [`RawCell`] the engine coerces.
///
/// Dates and durations come through in their display form as text; the
/// coercion rules carry no date detection, so they end up as string columns.
fn raw_cell(c: &Data) -> RawCell {
    match c {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::Text(s.clone()),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Float(f) => RawCell::Number(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => RawCell::Text(dt.to_string()),
        Data::DateTimeIso(s) => RawCell::Text(s.clone()),
        Data::DurationIso(s) => RawCell::Text(s.clone()),
        Data::Error(e) => RawCell::Text(format!("{e:?}")),
    }
}
